#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod dimension;
pub mod edit;
mod editor;
mod error;
pub mod node;
pub mod summary;
pub mod validate;
pub mod wire;

#[doc(hidden)]
pub mod prelude;

pub use config::{EmptyGroupPolicy, FilterLimits};
pub use dimension::{CatalogError, DimensionCatalog, DimensionSpec};
pub use edit::{ConditionPatch, EditCommand, EditOutcome};
pub use editor::FilterEditor;
pub use error::{EditError, EditResult};
pub use node::{Condition, Connector, FilterNode, FilterValue, Group, NodeId, Operator, Tree};
pub use summary::{OperatorLabels, Summarizer};
pub use validate::{ValidationIssue, ValidationReport, Validator};
pub use wire::{WireError, WireFilter, WireResult};

/// Tracing target for filter engine operations.
pub const TRACING_TARGET: &str = "segment_filter";
