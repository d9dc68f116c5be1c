//! Leaf conditions.

use serde::{Deserialize, Serialize};

use super::{FilterValue, NodeId, Operator};

/// A leaf comparing one dimension against a value.
///
/// Conditions are created incomplete by the editor (empty dimension, no
/// operator) and filled in field by field; completeness is checked by the
/// [`Validator`](crate::Validator), not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Stable identifier.
    pub id: NodeId,
    /// Dimension key, empty until chosen.
    #[serde(default)]
    pub dimension: String,
    /// Comparison operator, unset until chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    /// Value compared against.
    #[serde(default)]
    pub value: FilterValue,
    /// Inverts the comparison.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub negated: bool,
}

impl Condition {
    /// Creates a blank condition with a fresh ID.
    pub fn empty() -> Self {
        Self {
            id: NodeId::new(),
            dimension: String::new(),
            operator: None,
            value: FilterValue::default(),
            negated: false,
        }
    }

    /// Creates a condition with a fresh ID.
    pub fn new(
        dimension: impl Into<String>,
        operator: Operator,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self {
            id: NodeId::new(),
            dimension: dimension.into(),
            operator: Some(operator),
            value: value.into(),
            negated: false,
        }
    }

    /// Sets the negation flag.
    #[must_use]
    pub fn with_negated(mut self, negated: bool) -> Self {
        self.negated = negated;
        self
    }

    /// Returns `true` if the value is required by the operator but missing.
    ///
    /// An unset operator always requires a value.
    #[must_use]
    pub fn is_missing_value(&self) -> bool {
        let needs_value = self.operator.is_none_or(|op| !op.is_no_value());
        needs_value && self.value.is_empty()
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::empty()
    }
}
