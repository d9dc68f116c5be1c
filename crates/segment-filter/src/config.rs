//! Structural limits and editing policy.

#[cfg(feature = "config")]
use clap::Args;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Default maximum number of conditions in a tree.
pub const DEFAULT_MAX_CONDITIONS: usize = 20;

/// Default maximum group nesting depth below the root.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// What happens to a non-root group left empty by a deletion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmptyGroupPolicy {
    /// Keep the empty group for the user to fill or remove.
    #[default]
    Retain,
    /// Remove the group, and any ancestor left empty in turn.
    Prune,
}

/// Limits enforced by the validator and by limit-aware edits.
///
/// Depth counts group levels below the root: a group placed directly under
/// the root is depth one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "config", derive(Args))]
pub struct FilterLimits {
    /// Maximum number of conditions in a tree.
    #[builder(default = "DEFAULT_MAX_CONDITIONS")]
    #[cfg_attr(
        feature = "config",
        arg(long = "max-conditions", env = "FILTER_MAX_CONDITIONS", default_value = "20")
    )]
    #[serde(default = "default_max_conditions")]
    pub max_conditions: usize,

    /// Maximum group nesting depth below the root.
    #[builder(default = "DEFAULT_MAX_DEPTH")]
    #[cfg_attr(
        feature = "config",
        arg(long = "max-depth", env = "FILTER_MAX_DEPTH", default_value = "3")
    )]
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Treatment of groups emptied by a deletion. Only edits consult it.
    #[builder(default)]
    #[cfg_attr(feature = "config", arg(skip))]
    #[serde(default)]
    pub empty_groups: EmptyGroupPolicy,
}

fn default_max_conditions() -> usize {
    DEFAULT_MAX_CONDITIONS
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl FilterLimitsBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.max_conditions == Some(0) {
            return Err("max_conditions must be at least 1".into());
        }
        if self.max_depth == Some(0) {
            return Err("max_depth must be at least 1".into());
        }
        Ok(())
    }
}

impl FilterLimits {
    /// Returns a builder starting from the defaults.
    pub fn builder() -> FilterLimitsBuilder {
        FilterLimitsBuilder::default()
    }

    /// Set the maximum number of conditions.
    #[must_use]
    pub fn with_max_conditions(mut self, max: usize) -> Self {
        self.max_conditions = max;
        self
    }

    /// Set the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = max;
        self
    }

    /// Set the empty group policy.
    #[must_use]
    pub fn with_empty_groups(mut self, policy: EmptyGroupPolicy) -> Self {
        self.empty_groups = policy;
        self
    }

    /// Validate the configuration and return any issues.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_conditions == 0 {
            return Err("Maximum condition count cannot be zero".to_string());
        }
        if self.max_depth == 0 {
            return Err("Maximum nesting depth cannot be zero".to_string());
        }
        Ok(())
    }
}

impl Default for FilterLimits {
    fn default() -> Self {
        Self {
            max_conditions: DEFAULT_MAX_CONDITIONS,
            max_depth: DEFAULT_MAX_DEPTH,
            empty_groups: EmptyGroupPolicy::Retain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = FilterLimits::default();
        assert_eq!(limits.max_conditions, 20);
        assert_eq!(limits.max_depth, 3);
        assert_eq!(limits.empty_groups, EmptyGroupPolicy::Retain);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_builder_defaults_match() {
        let limits = FilterLimits::builder().build().unwrap();
        assert_eq!(limits, FilterLimits::default());
    }

    #[test]
    fn test_builder_rejects_zero() {
        assert!(FilterLimits::builder().max_depth(0usize).build().is_err());
        assert!(FilterLimits::builder().max_conditions(0usize).build().is_err());
        let limits = FilterLimits::builder()
            .max_depth(5usize)
            .empty_groups(EmptyGroupPolicy::Prune)
            .build()
            .unwrap();
        assert_eq!(limits.max_depth, 5);
        assert_eq!(limits.empty_groups, EmptyGroupPolicy::Prune);
    }

    #[test]
    fn test_with_methods() {
        let limits = FilterLimits::default().with_max_conditions(0);
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let limits: FilterLimits = serde_json::from_str("{\"max_depth\": 4}").unwrap();
        assert_eq!(limits.max_depth, 4);
        assert_eq!(limits.max_conditions, DEFAULT_MAX_CONDITIONS);
    }
}
