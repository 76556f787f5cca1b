//! Student rule set.

use crate::domain::Student;

use super::{len_between, not_blank, today, RuleSet};

pub fn student_rules() -> RuleSet<Student> {
    RuleSet::new("Student")
        .rule("student_id", "Student ID must be greater than zero.", |s: &Student| {
            s.student_id > 0
        })
        .rule("first_name", "First name is required.", |s: &Student| {
            not_blank(&s.first_name)
        })
        .rule(
            "first_name",
            "First name must be between 1 and 100 characters.",
            |s: &Student| len_between(&s.first_name, 1, 100),
        )
        .rule("last_name", "Last name is required.", |s: &Student| {
            not_blank(&s.last_name)
        })
        .rule(
            "last_name",
            "Last name must be between 1 and 100 characters.",
            |s: &Student| len_between(&s.last_name, 1, 100),
        )
        .rule(
            "date_of_birth",
            "Date of birth must be in the past.",
            |s: &Student| s.date_of_birth < today(),
        )
        .rule("class_name", "Class name is required.", |s: &Student| {
            not_blank(&s.class_name)
        })
        .rule("parent_id", "Parent ID must be greater than zero.", |s: &Student| {
            s.parent_id > 0
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::builders::student;

    #[test]
    fn valid_student_passes() {
        assert!(student_rules().evaluate(&student(1)).is_valid());
    }

    #[test]
    fn every_broken_field_is_reported() {
        let mut bad = student(1);
        bad.student_id = 0;
        bad.first_name = String::new();
        bad.parent_id = -3;
        let report = student_rules().evaluate(&bad);
        let fields: Vec<_> = report.violations().iter().map(|v| v.field).collect();
        // first_name trips both the required and the length rule
        assert_eq!(
            fields,
            vec!["student_id", "first_name", "first_name", "parent_id"]
        );
    }

    #[test]
    fn future_date_of_birth_is_rejected() {
        let mut bad = student(1);
        bad.date_of_birth = today() + chrono::Days::new(1);
        let report = student_rules().evaluate(&bad);
        assert_eq!(report.violations().len(), 1);
        assert_eq!(report.violations()[0].field, "date_of_birth");
    }
}
