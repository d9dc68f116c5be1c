//! Comparison operators and connectors.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Comparison operator of a condition, in the editor's vocabulary.
///
/// The backend speaks a different vocabulary; see [`Operator::wire_name`] and
/// [`Operator::from_wire_name`] for the translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Value is exactly equal.
    Equals,
    /// Value is not equal.
    DoesNotEqual,
    /// Value contains the given substring.
    Contains,
    /// Value does not contain the given substring.
    DoesNotContain,
    /// Value starts with the given prefix.
    StartsWith,
    /// Value ends with the given suffix.
    EndsWith,
    /// Numeric value is greater than the given number.
    GreaterThan,
    /// Numeric value is less than the given number.
    LessThan,
    /// Value matches any entry of the list.
    IsOneOf,
    /// Value matches no entry of the list.
    IsNotOneOf,
    /// Dimension has a value.
    IsSet,
    /// Dimension has no value.
    IsNotSet,
}

/// How many values an operator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueArity {
    /// No value (`is_set`, `is_not_set`).
    None,
    /// Exactly one string or number.
    Single,
    /// A non-empty list of strings.
    Multi,
}

impl Operator {
    /// Returns the number of values this operator compares against.
    #[must_use]
    pub const fn arity(self) -> ValueArity {
        match self {
            Self::IsSet | Self::IsNotSet => ValueArity::None,
            Self::IsOneOf | Self::IsNotOneOf => ValueArity::Multi,
            _ => ValueArity::Single,
        }
    }

    /// Returns `true` if the operator does not take a value.
    #[must_use]
    pub const fn is_no_value(self) -> bool {
        matches!(self.arity(), ValueArity::None)
    }

    /// Returns `true` if the operator takes a list of values.
    #[must_use]
    pub const fn is_multi_value(self) -> bool {
        matches!(self.arity(), ValueArity::Multi)
    }

    /// Returns the name the backend uses for this operator.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Equals => "is",
            Self::DoesNotEqual => "is_not",
            Self::Contains => "contains",
            Self::DoesNotContain => "contains_not",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::GreaterThan => "gt",
            Self::LessThan => "lt",
            Self::IsOneOf => "is_any_of",
            Self::IsNotOneOf => "is_none_of",
            Self::IsSet => "is_set",
            Self::IsNotSet => "is_not_set",
        }
    }

    /// Resolves a backend operator name.
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        let operator = match name {
            "is" => Self::Equals,
            "is_not" => Self::DoesNotEqual,
            "contains" => Self::Contains,
            "contains_not" => Self::DoesNotContain,
            "starts_with" => Self::StartsWith,
            "ends_with" => Self::EndsWith,
            "gt" => Self::GreaterThan,
            "lt" => Self::LessThan,
            "is_any_of" => Self::IsOneOf,
            "is_none_of" => Self::IsNotOneOf,
            "is_set" => Self::IsSet,
            "is_not_set" => Self::IsNotSet,
            _ => return None,
        };
        Some(operator)
    }
}

/// Boolean combinator of a group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connector {
    /// Every child must match.
    #[default]
    And,
    /// At least one child must match.
    Or,
}

impl Connector {
    /// Returns the lowercase keyword used on the wire.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}
