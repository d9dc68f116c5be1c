//! Mutation operations on filter trees.
//!
//! The operations themselves are inherent methods on [`Tree`]; this module
//! adds the payload and result types plus [`EditCommand`], a serializable
//! description of one user edit.

mod command;
mod ops;
mod patch;

pub use command::EditCommand;
pub use patch::ConditionPatch;

use crate::error::EditError;
use crate::node::Tree;

/// Result of an edit that may be rejected by the structural limits.
///
/// On rejection `tree` is the input tree, unchanged, and `error` says why.
#[derive(Debug, Clone)]
#[must_use]
pub struct EditOutcome {
    /// Tree after the edit, or the input tree if the edit was rejected.
    pub tree: Tree,
    /// Why the edit was rejected, if it was.
    pub error: Option<EditError>,
}

impl EditOutcome {
    pub(crate) fn applied(tree: Tree) -> Self {
        Self { tree, error: None }
    }

    pub(crate) fn rejected(tree: Tree, error: EditError) -> Self {
        Self {
            tree,
            error: Some(error),
        }
    }

    /// Returns `true` if the edit was rejected.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }

    /// Converts into a `Result`, discarding the unchanged tree on rejection.
    pub fn into_result(self) -> Result<Tree, EditError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.tree),
        }
    }
}
