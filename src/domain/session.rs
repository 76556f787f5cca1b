//! Held class session record.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single held lesson of a class-subject on a given date.
///
/// Sessions are recorded after the fact; the date is never in the future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: i32,
    pub class_subject_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
