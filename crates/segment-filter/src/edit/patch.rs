//! Partial condition updates.

use serde::{Deserialize, Serialize};

use crate::node::{Condition, FilterValue, Operator};

/// A shallow set of condition fields to overwrite.
///
/// Fields left as `None` keep their current value. The condition ID can never
/// be patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionPatch {
    /// New dimension key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
    /// New operator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    /// New value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FilterValue>,
    /// New negation flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negated: Option<bool>,
}

impl ConditionPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dimension.
    #[must_use]
    pub fn dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = Some(dimension.into());
        self
    }

    /// Sets the operator.
    #[must_use]
    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Sets the value.
    #[must_use]
    pub fn value(mut self, value: impl Into<FilterValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the negation flag.
    #[must_use]
    pub fn negated(mut self, negated: bool) -> Self {
        self.negated = Some(negated);
        self
    }

    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimension.is_none()
            && self.operator.is_none()
            && self.value.is_none()
            && self.negated.is_none()
    }

    /// Returns a copy of `condition` with the patched fields replaced.
    #[must_use]
    pub fn apply_to(&self, condition: &Condition) -> Condition {
        Condition {
            id: condition.id.clone(),
            dimension: self
                .dimension
                .clone()
                .unwrap_or_else(|| condition.dimension.clone()),
            operator: self.operator.or(condition.operator),
            value: self
                .value
                .clone()
                .unwrap_or_else(|| condition.value.clone()),
            negated: self.negated.unwrap_or(condition.negated),
        }
    }
}
