//! Wire format exchanged with the analytics backend and saved segments.
//!
//! Two JSON shapes are accepted:
//!
//! ```text
//! flat:    [["is", "country", ["US"]], ["is", "browser", ["Chrome"]]]
//! nested:  {"operator": "or", "children": [
//!             {"dimension": "country", "operator": "is", "value": ["US"]},
//!             {"operator": "and", "children": [...]}
//!          ]}
//! ```
//!
//! The flat shape can only express a single AND over plain conditions; any
//! other tree is always emitted in the nested shape.

mod codec;
mod error;

use serde::{Deserialize, Serialize};

pub use codec::{from_wire, to_wire, to_wire_flat, to_wire_nested};
pub use error::{WireError, WireResult};

/// One element of a wire value list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    /// Numeric value.
    Number(f64),
    /// String value.
    Text(String),
}

impl WireValue {
    /// Returns the value rendered as a string.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for WireValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A flat `[operator, dimension, values]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireTriple(pub String, pub String, pub Vec<WireValue>);

impl WireTriple {
    /// Wire operator name.
    #[must_use]
    pub fn operator(&self) -> &str {
        &self.0
    }

    /// Dimension key.
    #[must_use]
    pub fn dimension(&self) -> &str {
        &self.1
    }

    /// Value list.
    #[must_use]
    pub fn values(&self) -> &[WireValue] {
        &self.2
    }
}

/// A condition in the nested shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireCondition {
    /// Dimension key.
    pub dimension: String,
    /// Wire operator name.
    pub operator: String,
    /// Value list; empty for no-value operators.
    #[serde(default)]
    pub value: Vec<WireValue>,
    /// Inverts the comparison.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub negated: bool,
}

/// A group in the nested shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireGroup {
    /// `and` or `or`.
    pub operator: String,
    /// Ordered children.
    pub children: Vec<WireNode>,
}

/// A child of a nested group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireNode {
    /// Nested group; recognized by its `children` field.
    Group(WireGroup),
    /// Leaf condition.
    Condition(WireCondition),
}

impl WireNode {
    fn condition_count(&self) -> usize {
        match self {
            Self::Group(group) => group.condition_count(),
            Self::Condition(_) => 1,
        }
    }
}

impl WireGroup {
    /// Number of conditions in this group and its descendants.
    #[must_use]
    pub fn condition_count(&self) -> usize {
        self.children.iter().map(WireNode::condition_count).sum()
    }
}

/// A filter in either wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireFilter {
    /// List of AND-ed triples.
    Flat(Vec<WireTriple>),
    /// Recursive group form.
    Nested(WireGroup),
}

impl WireFilter {
    /// Parses either wire shape from JSON.
    pub fn from_json(json: &str) -> WireResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses either wire shape from a JSON value.
    pub fn from_value(value: serde_json::Value) -> WireResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Renders the filter as compact JSON.
    pub fn to_json(&self) -> WireResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders the filter as a JSON value.
    pub fn to_value(&self) -> WireResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Returns `true` for the flat triple shape.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        matches!(self, Self::Flat(_))
    }

    /// Number of conditions carried by the filter.
    #[must_use]
    pub fn condition_count(&self) -> usize {
        match self {
            Self::Flat(triples) => triples.len(),
            Self::Nested(group) => group.condition_count(),
        }
    }
}
