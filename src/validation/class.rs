//! Rule sets for class records: class, schedule slot, subject assignment,
//! teacher assignment.

use crate::domain::{Class, ClassSchedule, ClassSubject, ClassTeacher};

use super::{not_blank, RuleSet};

pub fn class_rules() -> RuleSet<Class> {
    RuleSet::new("Class")
        .rule("class_name", "Class name is required.", |c: &Class| {
            not_blank(&c.class_name)
        })
        .rule(
            "class_name",
            "Class name must not exceed 100 characters.",
            |c: &Class| c.class_name.chars().count() <= 100,
        )
        .rule(
            "grade_level_id",
            "Grade Level ID must be greater than zero.",
            |c: &Class| c.grade_level_id > 0,
        )
}

pub fn class_schedule_rules() -> RuleSet<ClassSchedule> {
    RuleSet::new("ClassSchedule")
        .rule("class_name", "Class name is required.", |cs: &ClassSchedule| {
            not_blank(&cs.class_name)
        })
        .rule(
            "class_name",
            "Class name must not exceed 100 characters.",
            |cs: &ClassSchedule| cs.class_name.chars().count() <= 100,
        )
        .rule(
            "subject_id",
            "Subject ID must be greater than zero.",
            |cs: &ClassSchedule| cs.subject_id > 0,
        )
        .rule(
            "start_time",
            "Start time must be earlier than end time.",
            |cs: &ClassSchedule| cs.start_time < cs.end_time,
        )
}

pub fn class_subject_rules() -> RuleSet<ClassSubject> {
    RuleSet::new("ClassSubject")
        .rule("class_name", "Class name is required.", |cs: &ClassSubject| {
            not_blank(&cs.class_name)
        })
        .rule(
            "class_name",
            "Class name must not exceed 100 characters.",
            |cs: &ClassSubject| cs.class_name.chars().count() <= 100,
        )
        .rule(
            "subject_id",
            "Subject ID must be greater than zero.",
            |cs: &ClassSubject| cs.subject_id > 0,
        )
        .rule(
            "teacher_id",
            "Teacher ID must be greater than zero.",
            |cs: &ClassSubject| cs.teacher_id > 0,
        )
        .rule_when(
            "subject_factor",
            "Subject Factor must be between 1 and 10.",
            |cs: &ClassSubject| cs.subject_factor.is_some(),
            |cs: &ClassSubject| cs.subject_factor.is_some_and(|f| (1..=10).contains(&f)),
        )
}

pub fn class_teacher_rules() -> RuleSet<ClassTeacher> {
    RuleSet::new("ClassTeacher")
        .rule("class_name", "Class name is required.", |ct: &ClassTeacher| {
            not_blank(&ct.class_name)
        })
        .rule(
            "class_name",
            "Class name must not exceed 100 characters.",
            |ct: &ClassTeacher| ct.class_name.chars().count() <= 100,
        )
        .rule(
            "teacher_id",
            "Teacher ID must be greater than zero.",
            |ct: &ClassTeacher| ct.teacher_id > 0,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::builders::{class, class_schedule, class_subject};

    #[test]
    fn valid_records_pass() {
        assert!(class_rules().evaluate(&class(1)).is_valid());
        assert!(class_schedule_rules().evaluate(&class_schedule(1)).is_valid());
        assert!(class_subject_rules().evaluate(&class_subject(1)).is_valid());
    }

    #[test]
    fn subject_factor_bounds() {
        let mut cs = class_subject(1);
        for factor in [1, 10] {
            cs.subject_factor = Some(factor);
            assert!(class_subject_rules().evaluate(&cs).is_valid());
        }
        for factor in [0, 11] {
            cs.subject_factor = Some(factor);
            assert!(!class_subject_rules().evaluate(&cs).is_valid());
        }
    }

    #[test]
    fn equal_schedule_times_are_rejected() {
        let mut cs = class_schedule(1);
        cs.end_time = cs.start_time;
        let report = class_schedule_rules().evaluate(&cs);
        assert_eq!(report.violations()[0].field, "start_time");
    }
}
