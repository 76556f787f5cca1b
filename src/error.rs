//! Error types for the crate.
//!
//! Every failure a service can produce before storage is reached is modeled
//! explicitly; storage-layer failures travel through [`Error::Database`] and
//! [`Error::Connection`] without translation.

use thiserror::Error;

use crate::port::Violation;

/// An entity failed one or more declarative rules.
///
/// Carries the complete ordered violation list, never just the first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed for {entity}: {}", summarize(violations))]
pub struct ValidationFailure {
    /// Entity type the rule set belongs to.
    pub entity: &'static str,
    /// Every violated rule, in rule-set order.
    pub violations: Vec<Violation>,
}

impl ValidationFailure {
    /// Fields named by the violations, in order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Top-level error type with structured variants.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied parameter failed a shape/range/non-empty guard
    /// before any storage call was issued.
    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A required entity argument was absent.
    #[error("missing required argument: {name}")]
    NullArgument { name: &'static str },

    /// An entity failed its rule set.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Mutation was attempted on a service wired read-only.
    #[error("mutation disabled for {entity}")]
    MutationDisabled { entity: &'static str },

    /// Credential transform failure.
    #[error("credential hashing failed: {0}")]
    Hash(String),

    /// Storage backend error, propagated unchanged.
    #[error("database error: {0}")]
    Database(String),

    /// Storage connectivity error, propagated unchanged.
    #[error("connection error: {0}")]
    Connection(String),
}

impl Error {
    /// Convenience constructor for guard failures.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// True if this is a pre-storage caller error (guard or null argument).
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. } | Error::NullArgument { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failure_lists_every_violation() {
        let failure = ValidationFailure {
            entity: "Student",
            violations: vec![
                Violation::new("first_name", "First name is required."),
                Violation::new("parent_id", "Parent ID must be greater than zero."),
            ],
        };
        let message = failure.to_string();
        assert!(message.contains("first_name"));
        assert!(message.contains("parent_id"));
        assert_eq!(failure.fields(), vec!["first_name", "parent_id"]);
    }

    #[test]
    fn invalid_argument_display() {
        let err = Error::invalid_argument("student_id", "must be a positive integer");
        assert_eq!(
            err.to_string(),
            "invalid argument student_id: must be a positive integer"
        );
        assert!(err.is_caller_error());
    }
}
