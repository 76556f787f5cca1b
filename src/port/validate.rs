//! Validation port.
//!
//! A validator is a pure function of an entity's current field values: no
//! I/O, no uniqueness checks, no foreign-key existence checks. Those require
//! storage and are deliberately not performed at this layer.

use serde::Serialize;

/// One violated rule: the field it names and the message for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Outcome of validating one entity: zero or more violations, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// True when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Pass/fail validation of one entity type.
///
/// Implementations must evaluate every rule and report every violation,
/// not just the first.
pub trait Validate<E>: Send + Sync {
    fn validate(&self, entity: &E) -> ValidationReport;
}
