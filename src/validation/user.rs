//! User rule set.
//!
//! The password rules apply to the plaintext credential: validation runs
//! before the user service's pre-persist transform replaces it with a
//! salted digest.

use chrono::Utc;

use crate::domain::User;

use super::{is_email, len_between, not_blank, RuleSet};

pub fn user_rules() -> RuleSet<User> {
    RuleSet::new("User")
        .rule("user_id", "User ID must be greater than zero.", |u: &User| {
            u.user_id > 0
        })
        .rule("username", "Username is required.", |u: &User| {
            not_blank(&u.username)
        })
        .rule(
            "username",
            "Username must be between 3 and 20 characters.",
            |u: &User| len_between(&u.username, 3, 20),
        )
        .rule("password_hash", "Password is required.", |u: &User| {
            not_blank(&u.password_hash)
        })
        .rule(
            "password_hash",
            "Password must be at least 6 characters long.",
            |u: &User| u.password_hash.chars().count() >= 6,
        )
        .rule("email", "Email is required.", |u: &User| not_blank(&u.email))
        .rule("email", "Email format is not valid.", |u: &User| {
            is_email(&u.email)
        })
        .rule("first_name", "First Name is required.", |u: &User| {
            not_blank(&u.first_name)
        })
        .rule(
            "first_name",
            "First Name must be between 2 and 50 characters.",
            |u: &User| len_between(&u.first_name, 2, 50),
        )
        .rule("last_name", "Last Name is required.", |u: &User| {
            not_blank(&u.last_name)
        })
        .rule(
            "last_name",
            "Last Name must be between 2 and 50 characters.",
            |u: &User| len_between(&u.last_name, 2, 50),
        )
        .rule(
            "created_at",
            "Created At date cannot be in the future.",
            |u: &User| u.created_at <= Utc::now(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::builders::user;

    #[test]
    fn valid_user_passes() {
        assert!(user_rules().evaluate(&user(1)).is_valid());
    }

    #[test]
    fn short_password_and_bad_email_both_reported() {
        let mut u = user(1);
        u.password_hash = "abc".into();
        u.email = "not-an-email".into();
        let report = user_rules().evaluate(&u);
        let fields: Vec<_> = report.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["password_hash", "email"]);
    }
}
