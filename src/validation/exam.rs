//! Exam and exam-result rule sets.

use rust_decimal_macros::dec;

use crate::domain::{Exam, ExamResult};

use super::{not_blank, today, RuleSet};

pub fn exam_rules() -> RuleSet<Exam> {
    RuleSet::new("Exam")
        .rule("exam_name", "Exam name is required.", |e: &Exam| {
            not_blank(&e.exam_name)
        })
        .rule(
            "exam_name",
            "Exam name must not exceed 100 characters.",
            |e: &Exam| e.exam_name.chars().count() <= 100,
        )
        .rule(
            "class_subject_id",
            "Class Subject ID must be greater than zero.",
            |e: &Exam| e.class_subject_id > 0,
        )
        // New exams are validated before they happen; the scheduled date may
        // not already be gone.
        .rule("date_scheduled", "Exam date cannot be in the past.", |e: &Exam| {
            e.date_scheduled >= today()
        })
        .rule("trimester", "Trimester must be between 1 and 3.", |e: &Exam| {
            (1..=3).contains(&e.trimester)
        })
}

pub fn exam_result_rules() -> RuleSet<ExamResult> {
    RuleSet::new("ExamResult")
        .rule(
            "student_id",
            "Student ID must be greater than zero.",
            |er: &ExamResult| er.student_id > 0,
        )
        .rule("exam_id", "Exam ID must be greater than zero.", |er: &ExamResult| {
            er.exam_id > 0
        })
        .rule_when(
            "score",
            "Score must be between 0 and 20.",
            |er: &ExamResult| er.score.is_some(),
            |er: &ExamResult| {
                er.score
                    .is_some_and(|s| s >= dec!(0) && s <= dec!(20))
            },
        )
        .rule(
            "date_taken",
            "Date taken cannot be in the future.",
            |er: &ExamResult| er.date_taken <= today(),
        )
        .rule_when(
            "note",
            "Note must not exceed 250 characters.",
            |er: &ExamResult| er.note.as_deref().is_some_and(not_blank),
            |er: &ExamResult| {
                er.note
                    .as_deref()
                    .is_some_and(|n| n.chars().count() <= 250)
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::builders::{exam, exam_result};

    #[test]
    fn exam_scheduled_today_passes() {
        let mut e = exam(1);
        e.date_scheduled = today();
        assert!(exam_rules().evaluate(&e).is_valid());
    }

    #[test]
    fn exam_scheduled_yesterday_fails() {
        let mut e = exam(1);
        e.date_scheduled = today() - chrono::Days::new(1);
        let report = exam_rules().evaluate(&e);
        assert_eq!(report.violations()[0].field, "date_scheduled");
    }

    #[test]
    fn score_boundaries() {
        let mut er = exam_result(1);
        for score in [dec!(0), dec!(20)] {
            er.score = Some(score);
            assert!(exam_result_rules().evaluate(&er).is_valid());
        }
        for score in [dec!(-1), dec!(21)] {
            er.score = Some(score);
            assert!(!exam_result_rules().evaluate(&er).is_valid());
        }
    }

    #[test]
    fn ungraded_result_passes() {
        let mut er = exam_result(1);
        er.score = None;
        assert!(exam_result_rules().evaluate(&er).is_valid());
    }
}
