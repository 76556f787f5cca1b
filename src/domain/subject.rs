//! Subject and grade-level lookup records.

use serde::{Deserialize, Serialize};

/// A taught subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub subject_id: i32,
    pub subject_name: String,
}

/// A grade level, e.g. "Grade 7".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeLevel {
    pub grade_level_id: i32,
    pub grade_name: String,
}
