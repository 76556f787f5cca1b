//! Subject and grade-level rule sets.

use crate::domain::{GradeLevel, Subject};

use super::{len_between, not_blank, RuleSet};

pub fn subject_rules() -> RuleSet<Subject> {
    RuleSet::new("Subject")
        .rule("subject_id", "Subject ID must be greater than zero.", |s: &Subject| {
            s.subject_id > 0
        })
        .rule("subject_name", "Subject Name is required.", |s: &Subject| {
            not_blank(&s.subject_name)
        })
        .rule(
            "subject_name",
            "Subject Name must be between 2 and 100 characters.",
            |s: &Subject| len_between(&s.subject_name, 2, 100),
        )
}

pub fn grade_level_rules() -> RuleSet<GradeLevel> {
    RuleSet::new("GradeLevel")
        .rule(
            "grade_level_id",
            "Grade Level ID must be greater than zero.",
            |g: &GradeLevel| g.grade_level_id > 0,
        )
        .rule("grade_name", "Grade name is required.", |g: &GradeLevel| {
            not_blank(&g.grade_name)
        })
        .rule(
            "grade_name",
            "Grade name must not exceed 100 characters.",
            |g: &GradeLevel| g.grade_name.chars().count() <= 100,
        )
}
