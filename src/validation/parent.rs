//! Parent rule set.

use crate::domain::Parent;

use super::{is_email, is_phone, not_blank, RuleSet};

pub fn parent_rules() -> RuleSet<Parent> {
    RuleSet::new("Parent")
        .rule("parent_id", "Parent ID must be greater than zero.", |p: &Parent| {
            p.parent_id > 0
        })
        .rule("first_name", "First name is required.", |p: &Parent| {
            not_blank(&p.first_name)
        })
        .rule(
            "first_name",
            "First name must not exceed 50 characters.",
            |p: &Parent| p.first_name.chars().count() <= 50,
        )
        .rule("last_name", "Last name is required.", |p: &Parent| {
            not_blank(&p.last_name)
        })
        .rule(
            "last_name",
            "Last name must not exceed 50 characters.",
            |p: &Parent| p.last_name.chars().count() <= 50,
        )
        .rule(
            "phone_number",
            "Phone number must be between 10 and 15 digits and may start with a '+'.",
            |p: &Parent| is_phone(&p.phone_number),
        )
        .rule_when(
            "email",
            "Invalid email format.",
            |p: &Parent| p.email.as_deref().is_some_and(|e| !e.is_empty()),
            |p: &Parent| p.email.as_deref().is_some_and(is_email),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::builders::parent;

    #[test]
    fn valid_parent_passes() {
        assert!(parent_rules().evaluate(&parent(1)).is_valid());
    }

    #[test]
    fn short_phone_number_is_rejected() {
        let mut p = parent(1);
        p.phone_number = "12345".into();
        let report = parent_rules().evaluate(&p);
        assert_eq!(report.violations()[0].field, "phone_number");
    }
}
