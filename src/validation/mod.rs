//! Declarative rule sets, one per entity.
//!
//! A [`RuleSet`] is pure data: an ordered list of (field, predicate,
//! message, optional apply-guard) tuples. Evaluation runs every rule and
//! collects every violation; callers never see only the first failure.
//!
//! Rule sets implement the [`Validate`](crate::port::Validate) port, so a
//! service takes them like any other validator.

mod engine;

mod attendance;
mod class;
mod exam;
mod parent;
mod rate;
mod session;
mod student;
mod subject;
mod teacher;
mod user;

pub use engine::RuleSet;

pub use attendance::attendance_rules;
pub use class::{class_rules, class_schedule_rules, class_subject_rules, class_teacher_rules};
pub use exam::{exam_result_rules, exam_rules};
pub use parent::parent_rules;
pub use rate::{general_rate_rules, trimester_rate_rules};
pub use session::session_rules;
pub use student::student_rules;
pub use subject::{grade_level_rules, subject_rules};
pub use teacher::{teacher_rules, teacher_schedule_rules};
pub use user::user_rules;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// `+`-prefixed or bare digit string, 10-15 digits.
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d{10,15}$").expect("phone pattern"));

/// Loose email shape check: one `@`, no whitespace, dotted domain.
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

pub(crate) fn is_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

pub(crate) fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

pub(crate) fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

pub(crate) fn len_between(value: &str, min: usize, max: usize) -> bool {
    let n = value.chars().count();
    n >= min && n <= max
}

/// Current date, used by the date-bounded rules.
pub(crate) fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_pattern() {
        assert!(is_phone("+12025550123"));
        assert!(is_phone("0612345678"));
        assert!(!is_phone("12345"));
        assert!(!is_phone("+1 202 555 0123"));
    }

    #[test]
    fn email_pattern() {
        assert!(is_email("teacher@school.edu"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("two@at@signs.com"));
    }

    #[test]
    fn blank_and_length_helpers() {
        assert!(!not_blank("   "));
        assert!(not_blank(" x "));
        assert!(len_between("abc", 2, 50));
        assert!(!len_between("a", 2, 50));
    }
}
