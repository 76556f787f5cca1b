//! Session rule set.

use crate::domain::Session;

use super::{today, RuleSet};

pub fn session_rules() -> RuleSet<Session> {
    RuleSet::new("Session")
        .rule("session_id", "Session ID must be greater than zero.", |s: &Session| {
            s.session_id > 0
        })
        .rule(
            "class_subject_id",
            "Class Subject ID must be greater than zero.",
            |s: &Session| s.class_subject_id > 0,
        )
        .rule("date", "Session date cannot be in the future.", |s: &Session| {
            s.date <= today()
        })
        .rule(
            "end_time",
            "End time must be later than start time.",
            |s: &Session| s.end_time > s.start_time,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::builders::session;

    #[test]
    fn valid_session_passes() {
        assert!(session_rules().evaluate(&session(1)).is_valid());
    }

    #[test]
    fn future_session_date_is_rejected() {
        let mut s = session(1);
        s.date = today() + chrono::Days::new(1);
        let report = session_rules().evaluate(&s);
        assert_eq!(report.violations()[0].field, "date");
    }
}
