//! Teacher records and weekly teaching schedule.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A teacher, optionally linked to a login account via `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub teacher_id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Free-text specialization, e.g. "Mathematics". Optional.
    pub subject_specialization: Option<String>,
    pub phone_number: String,
    pub email: Option<String>,
    pub user_id: Option<i32>,
}

/// One recurring slot in a teacher's weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSchedule {
    pub teacher_schedule_id: i32,
    pub teacher_id: i32,
    pub subject_id: i32,
    pub class_name: String,
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
