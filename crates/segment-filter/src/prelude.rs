//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use segment_filter::prelude::*;
//! ```

pub use crate::config::{EmptyGroupPolicy, FilterLimits};
pub use crate::dimension::{DimensionCatalog, DimensionSpec};
pub use crate::edit::{ConditionPatch, EditCommand, EditOutcome};
pub use crate::editor::FilterEditor;
pub use crate::error::{EditError, EditResult};
pub use crate::node::{
    Condition, Connector, FilterNode, FilterValue, Group, NodeId, Operator, Tree, ValueArity,
};
pub use crate::summary::{OperatorLabels, Summarizer};
pub use crate::validate::{ValidationIssue, ValidationReport, Validator};
pub use crate::wire::{WireError, WireFilter, from_wire, to_wire};
