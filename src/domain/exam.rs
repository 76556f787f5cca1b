//! Exam and exam-result records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A scheduled exam for a class-subject in one trimester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub exam_id: i32,
    pub exam_name: String,
    pub class_subject_id: i32,
    pub date_scheduled: NaiveDate,
    /// 1-3.
    pub trimester: i32,
}

/// One student's result for one exam.
///
/// `(student_id, exam_id)` is the natural key; `exam_result_id` stays the
/// storage identity. Score is on the 0-20 scale, absent until graded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamResult {
    pub exam_result_id: i32,
    pub student_id: i32,
    pub exam_id: i32,
    pub score: Option<Decimal>,
    pub date_taken: NaiveDate,
    pub note: Option<String>,
}
