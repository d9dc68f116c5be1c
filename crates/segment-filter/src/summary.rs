//! Human-readable rendering of a filter tree.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::node::{Condition, Connector, FilterNode, Group, Operator, Tree};

/// Rendering of a tree without conditions.
pub const EMPTY_SUMMARY: &str = "No filters applied";

/// Display labels for operators.
///
/// Operators without an explicit entry fall back to the built-in label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorLabels(HashMap<Operator, String>);

impl OperatorLabels {
    /// Creates a table with only the built-in labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the label of one operator.
    pub fn with(mut self, operator: Operator, label: impl Into<String>) -> Self {
        self.0.insert(operator, label.into());
        self
    }

    /// Returns the label for `operator`.
    pub fn get(&self, operator: Operator) -> &str {
        self.0
            .get(&operator)
            .map_or_else(|| builtin_label(operator), String::as_str)
    }
}

const fn builtin_label(operator: Operator) -> &'static str {
    match operator {
        Operator::Equals => "=",
        Operator::DoesNotEqual => "!=",
        Operator::Contains => "contains",
        Operator::DoesNotContain => "does not contain",
        Operator::StartsWith => "starts with",
        Operator::EndsWith => "ends with",
        Operator::GreaterThan => ">",
        Operator::LessThan => "<",
        Operator::IsOneOf => "is one of",
        Operator::IsNotOneOf => "is not one of",
        Operator::IsSet => "is set",
        Operator::IsNotSet => "is not set",
    }
}

/// Renders trees as one-line text for previews.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    labels: OperatorLabels,
}

impl Summarizer {
    /// Creates a summarizer using the given labels.
    pub fn new(labels: OperatorLabels) -> Self {
        Self { labels }
    }

    /// Renders `tree`.
    ///
    /// Conditions read `{dimension} {label} {value}`, siblings are joined
    /// by their group's connector and nested groups are parenthesized.
    /// Nested groups without conditions are skipped.
    pub fn summarize(&self, tree: &Tree) -> String {
        self.group(&tree.root)
            .unwrap_or_else(|| EMPTY_SUMMARY.to_owned())
    }

    fn group(&self, group: &Group) -> Option<String> {
        let parts: Vec<String> = group
            .children
            .iter()
            .filter_map(|child| match child {
                FilterNode::Condition(condition) => Some(self.condition(condition)),
                FilterNode::Group(inner) => self.group(inner).map(|text| format!("({text})")),
            })
            .collect();

        if parts.is_empty() {
            return None;
        }

        let separator = match group.connector {
            Connector::And => " AND ",
            Connector::Or => " OR ",
        };
        Some(parts.join(separator))
    }

    fn condition(&self, condition: &Condition) -> String {
        let mut parts = Vec::with_capacity(3);
        if !condition.dimension.is_empty() {
            parts.push(condition.dimension.clone());
        }

        if let Some(operator) = condition.operator {
            parts.push(self.labels.get(operator).to_owned());
        }

        let value = condition.value.to_string();
        if !condition.operator.is_some_and(Operator::is_no_value) && !value.is_empty() {
            parts.push(value);
        }

        let text = parts.join(" ");
        if condition.negated {
            format!("NOT {text}")
        } else {
            text
        }
    }
}
