//! Tree validation.
//!
//! A single depth-first pass counts conditions, tracks the deepest group and
//! checks every condition for completeness. All problems are collected, so
//! one call reports everything the user has to fix.

use thiserror::Error;

use crate::TRACING_TARGET;
use crate::config::FilterLimits;
use crate::dimension::DimensionCatalog;
use crate::node::{Condition, FilterNode, FilterValue, Group, NodeId, Operator, Tree, ValueArity};

/// A single validation problem.
///
/// Condition positions are 1-based, in depth-first order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// The tree has no conditions at all.
    #[error("Filter must have at least one condition.")]
    NoConditions,

    /// Too many conditions.
    #[error("Filter cannot have more than {max} conditions.")]
    TooManyConditions {
        /// Configured limit.
        max: usize,
        /// Actual count.
        count: usize,
    },

    /// Groups are nested too deeply.
    #[error("Filter cannot nest more than {max} levels.")]
    TooDeep {
        /// Configured limit.
        max: usize,
        /// Actual depth.
        depth: usize,
    },

    /// No dimension chosen.
    #[error("Condition {position} is missing a dimension.")]
    MissingDimension {
        /// Position of the condition.
        position: usize,
        /// Offending condition.
        condition_id: NodeId,
    },

    /// The dimension is not in the catalog.
    #[error("Condition {position} uses unknown dimension \"{dimension}\".")]
    UnknownDimension {
        /// Position of the condition.
        position: usize,
        /// Offending condition.
        condition_id: NodeId,
        /// The unknown key.
        dimension: String,
    },

    /// No operator chosen.
    #[error("Condition {position} is missing an operator.")]
    MissingOperator {
        /// Position of the condition.
        position: usize,
        /// Offending condition.
        condition_id: NodeId,
    },

    /// The operator is not allowed for the dimension.
    #[error("Condition {position}: operator \"{operator}\" is not supported for dimension \"{dimension}\".")]
    UnsupportedOperator {
        /// Position of the condition.
        position: usize,
        /// Offending condition.
        condition_id: NodeId,
        /// Dimension key.
        dimension: String,
        /// Rejected operator.
        operator: Operator,
    },

    /// A value is required but missing.
    #[error("Condition {position} is missing a value.")]
    MissingValue {
        /// Position of the condition.
        position: usize,
        /// Offending condition.
        condition_id: NodeId,
    },

    /// A single-value operator was given a list of several values.
    #[error("Condition {position}: operator \"{operator}\" takes a single value.")]
    TooManyValues {
        /// Position of the condition.
        position: usize,
        /// Offending condition.
        condition_id: NodeId,
        /// Operator expecting one value.
        operator: Operator,
    },
}

impl ValidationIssue {
    /// The condition this issue is about, if any.
    #[must_use]
    pub fn condition_id(&self) -> Option<&NodeId> {
        match self {
            Self::NoConditions | Self::TooManyConditions { .. } | Self::TooDeep { .. } => None,
            Self::MissingDimension { condition_id, .. }
            | Self::UnknownDimension { condition_id, .. }
            | Self::MissingOperator { condition_id, .. }
            | Self::UnsupportedOperator { condition_id, .. }
            | Self::MissingValue { condition_id, .. }
            | Self::TooManyValues { condition_id, .. } => Some(condition_id),
        }
    }
}

/// Outcome of validating a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Every problem found, structural issues first.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns `true` if the tree may be applied, saved or previewed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Human readable messages, in report order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// Issues concerning one condition.
    pub fn for_condition<'a>(
        &'a self,
        id: &'a NodeId,
    ) -> impl Iterator<Item = &'a ValidationIssue> + 'a {
        self.issues
            .iter()
            .filter(move |issue| issue.condition_id() == Some(id))
    }
}

/// Checks trees against a dimension catalog and structural limits.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    catalog: &'a DimensionCatalog,
    limits: FilterLimits,
}

impl<'a> Validator<'a> {
    /// Creates a validator.
    pub fn new(catalog: &'a DimensionCatalog, limits: FilterLimits) -> Self {
        Self { catalog, limits }
    }

    /// Validates a tree.
    pub fn validate(&self, tree: &Tree) -> ValidationReport {
        let mut walk = Walk::default();
        self.walk_group(&tree.root, 0, &mut walk);

        let mut issues = Vec::with_capacity(walk.issues.len() + 1);
        if walk.conditions == 0 {
            issues.push(ValidationIssue::NoConditions);
        }
        if walk.conditions > self.limits.max_conditions {
            issues.push(ValidationIssue::TooManyConditions {
                max: self.limits.max_conditions,
                count: walk.conditions,
            });
        }
        if walk.max_depth > self.limits.max_depth {
            issues.push(ValidationIssue::TooDeep {
                max: self.limits.max_depth,
                depth: walk.max_depth,
            });
        }
        issues.append(&mut walk.issues);

        tracing::trace!(
            target: TRACING_TARGET,
            conditions = walk.conditions,
            depth = walk.max_depth,
            issues = issues.len(),
            "Validated filter tree"
        );

        ValidationReport { issues }
    }

    fn walk_group(&self, group: &Group, depth: usize, walk: &mut Walk) {
        walk.max_depth = walk.max_depth.max(depth);
        for child in &group.children {
            match child {
                FilterNode::Condition(condition) => {
                    walk.conditions += 1;
                    self.check_condition(condition, walk.conditions, &mut walk.issues);
                }
                FilterNode::Group(inner) => self.walk_group(inner, depth + 1, walk),
            }
        }
    }

    fn check_condition(
        &self,
        condition: &Condition,
        position: usize,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let condition_id = condition.id.clone();

        let dimension = if condition.dimension.is_empty() {
            issues.push(ValidationIssue::MissingDimension {
                position,
                condition_id: condition_id.clone(),
            });
            None
        } else {
            let spec = self.catalog.get(&condition.dimension);
            if spec.is_none() {
                issues.push(ValidationIssue::UnknownDimension {
                    position,
                    condition_id: condition_id.clone(),
                    dimension: condition.dimension.clone(),
                });
            }
            spec
        };

        match (condition.operator, dimension) {
            (None, _) => issues.push(ValidationIssue::MissingOperator {
                position,
                condition_id: condition_id.clone(),
            }),
            (Some(operator), Some(spec)) if !spec.supports(operator) => {
                issues.push(ValidationIssue::UnsupportedOperator {
                    position,
                    condition_id: condition_id.clone(),
                    dimension: spec.key.clone(),
                    operator,
                });
            }
            _ => {}
        }

        if condition.is_missing_value() {
            issues.push(ValidationIssue::MissingValue {
                position,
                condition_id,
            });
        } else if let (Some(operator), FilterValue::List(items)) =
            (condition.operator, &condition.value)
            && operator.arity() == ValueArity::Single
            && items.len() > 1
        {
            issues.push(ValidationIssue::TooManyValues {
                position,
                condition_id,
                operator,
            });
        }
    }
}

#[derive(Debug, Default)]
struct Walk {
    conditions: usize,
    max_depth: usize,
    issues: Vec<ValidationIssue>,
}
