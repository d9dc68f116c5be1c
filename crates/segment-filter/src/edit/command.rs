//! Serializable edit commands.

use serde::{Deserialize, Serialize};

use super::{ConditionPatch, EditOutcome};
use crate::config::FilterLimits;
use crate::node::{Connector, Group, NodeId, Tree};

/// One user edit, as dispatched by an editing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    /// Append a condition to a group.
    AddCondition {
        /// Target group.
        group_id: NodeId,
        /// Initial field values.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        patch: Option<ConditionPatch>,
    },
    /// Merge fields into a condition.
    UpdateCondition {
        /// Target condition.
        condition_id: NodeId,
        /// Fields to overwrite.
        patch: ConditionPatch,
    },
    /// Remove a condition.
    DeleteCondition {
        /// Target condition.
        condition_id: NodeId,
    },
    /// Append a nested group.
    AddNestedGroup {
        /// Group receiving the new group.
        parent_id: NodeId,
        /// Group to insert; an empty AND group when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        group: Option<Group>,
    },
    /// Remove a group and its subtree.
    DeleteNestedGroup {
        /// Target group.
        group_id: NodeId,
    },
    /// Change a group's connector.
    UpdateConnector {
        /// Target group.
        group_id: NodeId,
        /// New connector.
        connector: Connector,
    },
    /// Relocate a condition or group.
    MoveItem {
        /// Node to move.
        item_id: NodeId,
        /// Index within the target group.
        new_index: usize,
        /// Target group; the current parent when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_group_id: Option<NodeId>,
    },
    /// Reset to an empty tree.
    ClearAll,
}

impl EditCommand {
    /// Applies the command to `tree`.
    pub fn apply(&self, tree: &Tree, limits: &FilterLimits) -> EditOutcome {
        match self {
            Self::AddCondition { group_id, patch } => {
                EditOutcome::applied(tree.add_condition(group_id, patch.clone()))
            }
            Self::UpdateCondition {
                condition_id,
                patch,
            } => EditOutcome::applied(tree.update_condition(condition_id, patch)),
            Self::DeleteCondition { condition_id } => {
                EditOutcome::applied(tree.delete_condition(condition_id, limits.empty_groups))
            }
            Self::AddNestedGroup { parent_id, group } => {
                tree.add_nested_group(parent_id, group.clone(), limits)
            }
            Self::DeleteNestedGroup { group_id } => {
                EditOutcome::applied(tree.delete_nested_group(group_id, limits.empty_groups))
            }
            Self::UpdateConnector {
                group_id,
                connector,
            } => EditOutcome::applied(tree.update_connector(group_id, *connector)),
            Self::MoveItem {
                item_id,
                new_index,
                target_group_id,
            } => tree.move_item(item_id, *new_index, target_group_id.as_ref(), limits),
            Self::ClearAll => EditOutcome::applied(tree.clear_all()),
        }
    }

    /// Short name of the operation, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddCondition { .. } => "add_condition",
            Self::UpdateCondition { .. } => "update_condition",
            Self::DeleteCondition { .. } => "delete_condition",
            Self::AddNestedGroup { .. } => "add_nested_group",
            Self::DeleteNestedGroup { .. } => "delete_nested_group",
            Self::UpdateConnector { .. } => "update_connector",
            Self::MoveItem { .. } => "move_item",
            Self::ClearAll => "clear_all",
        }
    }
}
