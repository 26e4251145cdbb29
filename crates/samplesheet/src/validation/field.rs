//! Per-field validation with optional short-circuit.

use crate::error::FieldError;

use super::condition::{Condition, ConditionKind, Outcome, Presence};

/// Binds a column name to an ordered list of conditions.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    field_name: String,
    kinds: Vec<ConditionKind>,
    conditions: Vec<Condition>,
}

impl FieldValidator {
    /// Create a validator, instantiating one condition per kind.
    pub fn new(field_name: impl Into<String>, kinds: &[ConditionKind]) -> Self {
        Self {
            field_name: field_name.into(),
            kinds: kinds.to_vec(),
            conditions: kinds.iter().copied().map(Condition::from).collect(),
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// The condition kinds this validator was configured with.
    pub fn kinds(&self) -> &[ConditionKind] {
        &self.kinds
    }

    /// Whether the column must be present in the header.
    pub fn is_required(&self) -> bool {
        self.kinds.iter().any(ConditionKind::marks_required)
    }

    /// Validate one value.
    ///
    /// When an `Optional` condition is configured and the value is empty,
    /// the field is valid and no other condition runs. Otherwise every
    /// condition is evaluated in order and the first failure is returned.
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        let optional = self.conditions.iter().find(|c| **c == Condition::Optional);
        if let Some(condition) = optional {
            if condition.eval(value) == Outcome::Optional(Presence::Absent) {
                return Ok(());
            }
        }

        for condition in &self.conditions {
            let outcome = condition.eval(value);
            if !outcome.passed() {
                return Err(FieldError::new(&self.field_name, outcome.message()));
            }
        }

        Ok(())
    }
}
