//! Teacher and teacher-schedule rule sets.

use crate::domain::{Teacher, TeacherSchedule};

use super::{is_email, is_phone, len_between, not_blank, RuleSet};

pub fn teacher_rules() -> RuleSet<Teacher> {
    RuleSet::new("Teacher")
        .rule("teacher_id", "Teacher ID must be greater than zero.", |t: &Teacher| {
            t.teacher_id > 0
        })
        .rule("first_name", "First Name is required.", |t: &Teacher| {
            not_blank(&t.first_name)
        })
        .rule(
            "first_name",
            "First Name must be between 2 and 50 characters.",
            |t: &Teacher| len_between(&t.first_name, 2, 50),
        )
        .rule("last_name", "Last Name is required.", |t: &Teacher| {
            not_blank(&t.last_name)
        })
        .rule(
            "last_name",
            "Last Name must be between 2 and 50 characters.",
            |t: &Teacher| len_between(&t.last_name, 2, 50),
        )
        .rule_when(
            "subject_specialization",
            "Subject Specialization must be less than or equal to 100 characters.",
            |t: &Teacher| t.subject_specialization.is_some(),
            |t: &Teacher| {
                t.subject_specialization
                    .as_deref()
                    .is_some_and(|s| s.chars().count() <= 100)
            },
        )
        .rule(
            "phone_number",
            "Phone number must be between 10 and 15 digits and may start with a '+'.",
            |t: &Teacher| is_phone(&t.phone_number),
        )
        .rule_when(
            "email",
            "Email must be a valid email address.",
            |t: &Teacher| t.email.as_deref().is_some_and(|e| !e.is_empty()),
            |t: &Teacher| t.email.as_deref().is_some_and(is_email),
        )
        .rule_when(
            "user_id",
            "User ID must be greater than zero.",
            |t: &Teacher| t.user_id.is_some(),
            |t: &Teacher| t.user_id.is_some_and(|id| id > 0),
        )
}

pub fn teacher_schedule_rules() -> RuleSet<TeacherSchedule> {
    RuleSet::new("TeacherSchedule")
        .rule(
            "teacher_schedule_id",
            "Teacher Schedule ID must be greater than zero.",
            |ts: &TeacherSchedule| ts.teacher_schedule_id > 0,
        )
        .rule(
            "teacher_id",
            "Teacher ID must be greater than zero.",
            |ts: &TeacherSchedule| ts.teacher_id > 0,
        )
        .rule(
            "subject_id",
            "Subject ID must be greater than zero.",
            |ts: &TeacherSchedule| ts.subject_id > 0,
        )
        .rule("class_name", "Class Name is required.", |ts: &TeacherSchedule| {
            not_blank(&ts.class_name)
        })
        .rule(
            "class_name",
            "Class Name must be between 2 and 50 characters.",
            |ts: &TeacherSchedule| len_between(&ts.class_name, 2, 50),
        )
        .rule(
            "end_time",
            "End Time must be greater than Start Time.",
            |ts: &TeacherSchedule| ts.end_time > ts.start_time,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::builders::{teacher, teacher_schedule};

    #[test]
    fn valid_teacher_passes() {
        assert!(teacher_rules().evaluate(&teacher(1)).is_valid());
    }

    #[test]
    fn optional_fields_unconstrained_when_absent() {
        let mut t = teacher(1);
        t.subject_specialization = None;
        t.email = None;
        t.user_id = None;
        assert!(teacher_rules().evaluate(&t).is_valid());
    }

    #[test]
    fn bad_optional_fields_are_reported_when_present() {
        let mut t = teacher(1);
        t.email = Some("nope".into());
        t.user_id = Some(0);
        let report = teacher_rules().evaluate(&t);
        let fields: Vec<_> = report.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["email", "user_id"]);
    }

    #[test]
    fn inverted_schedule_times_are_rejected() {
        let mut ts = teacher_schedule(1);
        std::mem::swap(&mut ts.start_time, &mut ts.end_time);
        let report = teacher_schedule_rules().evaluate(&ts);
        assert_eq!(report.violations()[0].field, "end_time");
    }
}
