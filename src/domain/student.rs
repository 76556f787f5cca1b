//! Student record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A student enrolled in a class, linked to a parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub class_name: String,
    pub parent_id: i32,
}
