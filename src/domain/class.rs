//! Class records: the class itself plus its schedule, subject, and teacher
//! assignment rows.
//!
//! The class name doubles as the natural key most other entities reference;
//! the synthetic `class_id` stays the storage identity.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A class (homeroom) at one grade level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub class_id: i32,
    pub class_name: String,
    pub grade_level_id: i32,
}

/// One recurring slot in a class's weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSchedule {
    pub class_schedule_id: i32,
    pub class_name: String,
    pub subject_id: i32,
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// A subject taught to a class by a teacher.
///
/// `subject_factor` is the grading weight (1-10) when the school weighs
/// subjects differently; absent means unweighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSubject {
    pub class_subject_id: i32,
    pub class_name: String,
    pub subject_id: i32,
    pub teacher_id: i32,
    pub subject_factor: Option<i32>,
}

/// Assignment of a teacher to a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTeacher {
    pub class_teacher_id: i32,
    pub class_name: String,
    pub teacher_id: i32,
}
