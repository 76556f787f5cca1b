//! Student grading-rate records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A student's overall rate for one school year, as a percentage (0-100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentGeneralRate {
    pub student_rate_id: i32,
    pub student_id: i32,
    pub class_name: String,
    pub rate: Decimal,
    pub start_year: i32,
    pub end_year: i32,
}

/// A student's per-subject rate for one trimester of one school year.
///
/// `(student_id, subject_id, trimester, start_year)` is the natural key.
/// Component notes and the overall rate are on the 0-20 scale; each is
/// absent until the corresponding assessment happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentTrimesterRate {
    pub student_rate_id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    /// 1-3.
    pub trimester: i32,
    pub start_year: i32,
    pub end_year: i32,
    pub in_class_activities_note: Option<Decimal>,
    pub first_test_note: Option<Decimal>,
    pub second_test_note: Option<Decimal>,
    pub exam_note: Option<Decimal>,
    pub rate: Option<Decimal>,
}
