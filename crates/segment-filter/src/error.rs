//! Edit error types.

use thiserror::Error;

use crate::node::NodeId;

/// Result type for limit-aware edits.
pub type EditResult<T> = Result<T, EditError>;

/// Reasons a structural edit was rejected.
///
/// The display strings match the validator's messages for the same limits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The edit would nest groups deeper than allowed.
    #[error("Filter cannot nest more than {max} levels.")]
    DepthExceeded {
        /// Configured maximum depth.
        max: usize,
        /// Depth the edit would have produced.
        depth: usize,
    },

    /// The edit would add more conditions than allowed.
    #[error("Filter cannot have more than {max} conditions.")]
    TooManyConditions {
        /// Configured maximum condition count.
        max: usize,
        /// Count the edit would have produced.
        count: usize,
    },

    /// The inserted subtree reuses an ID that is already taken, either by
    /// the tree, by the root, or by another node of the same subtree.
    #[error("Node ID \"{id}\" is already in use.")]
    DuplicateId {
        /// The clashing identifier.
        id: NodeId,
    },
}
