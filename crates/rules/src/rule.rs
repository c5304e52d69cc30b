use serde::{Deserialize, Serialize};

use ruleval_core::ValueObject;

/// Value object: a single business condition (attribute, operator, threshold).
///
/// Equality is structural. Two rules are equal iff `rule_id`, `criteria`,
/// `operator` and `value` are pairwise equal, compared in that order.
/// Construction performs no validation: `rule_id` need not be unique and
/// `operator` is an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    rule_id: String,
    /// Name of the attribute the rule inspects.
    #[serde(alias = "column_name")]
    criteria: String,
    operator: String,
    value: i64,
}

impl ValueObject for Rule {}

impl Rule {
    pub fn new(
        rule_id: impl Into<String>,
        criteria: impl Into<String>,
        operator: impl Into<String>,
        value: i64,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            criteria: criteria.into(),
            operator: operator.into(),
            value,
        }
    }

    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    pub fn criteria(&self) -> &str {
        &self.criteria
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Field-by-field comparison; same result as `==`.
    pub fn equals(&self, other: &Rule) -> bool {
        self == other
    }

    /// Copy of this rule with a different threshold.
    pub fn with_value(self, value: i64) -> Self {
        Self { value, ..self }
    }

    pub fn with_operator(self, operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            ..self
        }
    }

    pub fn with_criteria(self, criteria: impl Into<String>) -> Self {
        Self {
            criteria: criteria.into(),
            ..self
        }
    }
}

impl core::fmt::Display for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {} {} {}",
            self.rule_id, self.criteria, self.operator, self.value
        )
    }
}
