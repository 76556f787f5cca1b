//! Attendance rule set.

use crate::domain::Attendance;

use super::{not_blank, today, RuleSet};

pub fn attendance_rules() -> RuleSet<Attendance> {
    RuleSet::new("Attendance")
        .rule(
            "attendance_id",
            "Attendance ID must be greater than 0.",
            |a: &Attendance| a.attendance_id > 0,
        )
        .rule(
            "student_id",
            "Student ID must be greater than 0.",
            |a: &Attendance| a.student_id > 0,
        )
        .rule("class_name", "Class name cannot be empty.", |a: &Attendance| {
            not_blank(&a.class_name)
        })
        .rule(
            "class_name",
            "Class name cannot exceed 100 characters.",
            |a: &Attendance| a.class_name.chars().count() <= 100,
        )
        .rule(
            "session_id",
            "Session ID must be greater than 0.",
            |a: &Attendance| a.session_id > 0,
        )
        .rule(
            "date",
            "Attendance date cannot be in the future.",
            |a: &Attendance| a.date <= today(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::builders::attendance;

    #[test]
    fn attendance_today_passes() {
        let mut a = attendance(1);
        a.date = today();
        assert!(attendance_rules().evaluate(&a).is_valid());
    }

    #[test]
    fn future_attendance_is_rejected() {
        let mut a = attendance(1);
        a.date = today() + chrono::Days::new(1);
        let report = attendance_rules().evaluate(&a);
        assert_eq!(report.violations()[0].field, "date");
    }
}
