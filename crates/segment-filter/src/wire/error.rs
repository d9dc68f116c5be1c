//! Wire format error types.

use thiserror::Error;

/// Result type for wire format conversions.
pub type WireResult<T> = Result<T, WireError>;

/// Malformed wire input.
///
/// Any malformed entry rejects the whole filter; nothing is skipped.
/// Condition positions are 1-based, in depth-first order.
#[derive(Debug, Error)]
pub enum WireError {
    /// The operator name is not in the translation table.
    #[error("condition {position}: unknown operator \"{operator}\"")]
    UnknownOperator {
        /// Position of the condition.
        position: usize,
        /// Unrecognized name.
        operator: String,
    },

    /// A group uses something other than `and` / `or`.
    #[error("unknown group operator \"{0}\"")]
    UnknownConnector(String),

    /// The value list does not fit the operator.
    #[error("condition {position}: operator \"{operator}\" expects {expected}, got {found}")]
    ValueCount {
        /// Position of the condition.
        position: usize,
        /// Wire operator name.
        operator: String,
        /// Expected number of values.
        expected: &'static str,
        /// Actual number of values.
        found: usize,
    },

    /// The dimension is empty.
    #[error("condition {position}: dimension cannot be empty")]
    EmptyDimension {
        /// Position of the condition.
        position: usize,
    },

    /// The input is not JSON of either wire shape.
    #[error("invalid wire format: {0}")]
    Json(#[from] serde_json::Error),
}
