//! The rule-set engine.

use crate::port::{Validate, ValidationReport, Violation};

type Predicate<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;

struct Rule<E> {
    field: &'static str,
    message: String,
    /// Evaluate the rule only when this returns true.
    applies: Option<Predicate<E>>,
    /// True means the rule is satisfied.
    check: Predicate<E>,
}

/// Ordered, declarative field constraints for one entity type.
///
/// Built once at wiring time with the builder methods, then evaluated
/// without I/O for every mutation. Violations come back in rule order.
pub struct RuleSet<E> {
    entity: &'static str,
    rules: Vec<Rule<E>>,
}

impl<E> RuleSet<E> {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            rules: Vec::new(),
        }
    }

    /// Entity type this rule set belongs to.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Add an unconditional rule. `check` returns true when satisfied.
    pub fn rule(
        mut self,
        field: &'static str,
        message: impl Into<String>,
        check: impl Fn(&E) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule {
            field,
            message: message.into(),
            applies: None,
            check: Box::new(check),
        });
        self
    }

    /// Add a rule evaluated only when `applies` returns true, e.g. for
    /// optional fields that are constrained only when present.
    pub fn rule_when(
        mut self,
        field: &'static str,
        message: impl Into<String>,
        applies: impl Fn(&E) -> bool + Send + Sync + 'static,
        check: impl Fn(&E) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule {
            field,
            message: message.into(),
            applies: Some(Box::new(applies)),
            check: Box::new(check),
        });
        self
    }

    /// Evaluate every rule, collecting every violation in rule order.
    pub fn evaluate(&self, entity: &E) -> ValidationReport {
        let violations: Vec<Violation> = self
            .rules
            .iter()
            .filter(|rule| rule.applies.as_ref().map_or(true, |applies| applies(entity)))
            .filter(|rule| !(rule.check)(entity))
            .map(|rule| Violation::new(rule.field, rule.message.clone()))
            .collect();
        ValidationReport::new(violations)
    }
}

impl<E> Validate<E> for RuleSet<E> {
    fn validate(&self, entity: &E) -> ValidationReport {
        self.evaluate(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        id: i32,
        name: String,
        factor: Option<i32>,
    }

    fn sample_rules() -> RuleSet<Sample> {
        RuleSet::new("Sample")
            .rule("id", "ID must be greater than zero.", |s: &Sample| s.id > 0)
            .rule("name", "Name is required.", |s: &Sample| {
                !s.name.trim().is_empty()
            })
            .rule_when(
                "factor",
                "Factor must be between 1 and 10.",
                |s: &Sample| s.factor.is_some(),
                |s: &Sample| s.factor.is_some_and(|f| (1..=10).contains(&f)),
            )
    }

    #[test]
    fn collects_every_violation_in_rule_order() {
        let report = sample_rules().evaluate(&Sample {
            id: 0,
            name: "  ".into(),
            factor: Some(11),
        });
        let fields: Vec<_> = report.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["id", "name", "factor"]);
    }

    #[test]
    fn conditional_rule_skipped_when_guard_fails() {
        let report = sample_rules().evaluate(&Sample {
            id: 1,
            name: "ok".into(),
            factor: None,
        });
        assert!(report.is_valid());
    }

    #[test]
    fn valid_entity_produces_empty_report() {
        let report = sample_rules().evaluate(&Sample {
            id: 3,
            name: "ok".into(),
            factor: Some(5),
        });
        assert!(report.is_valid());
        assert!(report.violations().is_empty());
    }
}
