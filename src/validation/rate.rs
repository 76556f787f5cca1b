//! Grading-rate rule sets.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{StudentGeneralRate, StudentTrimesterRate};

use super::RuleSet;

fn on_twenty_scale(value: Decimal) -> bool {
    value >= dec!(0) && value <= dec!(20)
}

pub fn general_rate_rules() -> RuleSet<StudentGeneralRate> {
    RuleSet::new("StudentGeneralRate")
        .rule(
            "student_rate_id",
            "Student Rate ID must be greater than zero.",
            |r: &StudentGeneralRate| r.student_rate_id > 0,
        )
        .rule(
            "student_id",
            "Student ID must be greater than zero.",
            |r: &StudentGeneralRate| r.student_id > 0,
        )
        // The general rate is a yearly percentage, unlike the 0-20 scale
        // used everywhere else.
        .rule("rate", "Rate must be between 0 and 100.", |r: &StudentGeneralRate| {
            r.rate >= dec!(0) && r.rate <= dec!(100)
        })
        .rule(
            "start_year",
            "Start year must be greater than 2000.",
            |r: &StudentGeneralRate| r.start_year > 2000,
        )
        .rule(
            "end_year",
            "End year must be greater than the start year.",
            |r: &StudentGeneralRate| r.end_year > r.start_year,
        )
}

pub fn trimester_rate_rules() -> RuleSet<StudentTrimesterRate> {
    RuleSet::new("StudentTrimesterRate")
        .rule(
            "student_rate_id",
            "Student Rate ID must be greater than zero.",
            |r: &StudentTrimesterRate| r.student_rate_id > 0,
        )
        .rule(
            "student_id",
            "Student ID must be greater than zero.",
            |r: &StudentTrimesterRate| r.student_id > 0,
        )
        .rule(
            "subject_id",
            "Subject ID must be greater than zero.",
            |r: &StudentTrimesterRate| r.subject_id > 0,
        )
        .rule(
            "trimester",
            "Trimester must be between 1 and 3.",
            |r: &StudentTrimesterRate| (1..=3).contains(&r.trimester),
        )
        .rule(
            "start_year",
            "Start Year must be greater than 2000.",
            |r: &StudentTrimesterRate| r.start_year > 2000,
        )
        .rule(
            "end_year",
            "End Year must be greater than or equal to Start Year.",
            |r: &StudentTrimesterRate| r.end_year >= r.start_year,
        )
        .rule_when(
            "in_class_activities_note",
            "In-Class Activities Note must be between 0 and 20.",
            |r: &StudentTrimesterRate| r.in_class_activities_note.is_some(),
            |r: &StudentTrimesterRate| r.in_class_activities_note.is_some_and(on_twenty_scale),
        )
        .rule_when(
            "first_test_note",
            "First Test Note must be between 0 and 20.",
            |r: &StudentTrimesterRate| r.first_test_note.is_some(),
            |r: &StudentTrimesterRate| r.first_test_note.is_some_and(on_twenty_scale),
        )
        .rule_when(
            "second_test_note",
            "Second Test Note must be between 0 and 20.",
            |r: &StudentTrimesterRate| r.second_test_note.is_some(),
            |r: &StudentTrimesterRate| r.second_test_note.is_some_and(on_twenty_scale),
        )
        .rule_when(
            "exam_note",
            "Exam Note must be between 0 and 20.",
            |r: &StudentTrimesterRate| r.exam_note.is_some(),
            |r: &StudentTrimesterRate| r.exam_note.is_some_and(on_twenty_scale),
        )
        .rule_when(
            "rate",
            "Rate must be between 0 and 20.",
            |r: &StudentTrimesterRate| r.rate.is_some(),
            |r: &StudentTrimesterRate| r.rate.is_some_and(on_twenty_scale),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::builders::{general_rate, trimester_rate};

    #[test]
    fn trimester_boundaries() {
        let mut r = trimester_rate(1);
        for trimester in [1, 3] {
            r.trimester = trimester;
            assert!(trimester_rate_rules().evaluate(&r).is_valid());
        }
        for trimester in [0, 4] {
            r.trimester = trimester;
            assert!(!trimester_rate_rules().evaluate(&r).is_valid());
        }
    }

    #[test]
    fn note_boundaries() {
        let mut r = trimester_rate(1);
        for note in [dec!(0), dec!(20)] {
            r.exam_note = Some(note);
            assert!(trimester_rate_rules().evaluate(&r).is_valid());
        }
        for note in [dec!(-1), dec!(21)] {
            r.exam_note = Some(note);
            let report = trimester_rate_rules().evaluate(&r);
            assert_eq!(report.violations()[0].field, "exam_note");
        }
    }

    #[test]
    fn end_year_may_equal_start_year_for_trimester_rate_only() {
        let mut tr = trimester_rate(1);
        tr.end_year = tr.start_year;
        assert!(trimester_rate_rules().evaluate(&tr).is_valid());

        let mut gr = general_rate(1);
        gr.end_year = gr.start_year;
        assert!(!general_rate_rules().evaluate(&gr).is_valid());
    }

    #[test]
    fn general_rate_percentage_bounds() {
        let mut gr = general_rate(1);
        gr.rate = dec!(100);
        assert!(general_rate_rules().evaluate(&gr).is_valid());
        gr.rate = dec!(100.5);
        assert!(!general_rate_rules().evaluate(&gr).is_valid());
    }
}
