//! Groups and the node sum type.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Condition, Connector, NodeId};

/// A node of the filter tree: either a leaf condition or a nested group.
///
/// Children are reference counted so that rebuilding one path of the tree
/// leaves every other subtree shared with the previous version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterNode {
    /// Leaf comparison.
    Condition(Arc<Condition>),
    /// Nested group.
    Group(Arc<Group>),
}

impl FilterNode {
    /// Returns the identifier of the node.
    #[must_use]
    pub fn id(&self) -> &NodeId {
        match self {
            Self::Condition(condition) => &condition.id,
            Self::Group(group) => &group.id,
        }
    }

    /// Returns the condition if this node is one.
    #[must_use]
    pub fn as_condition(&self) -> Option<&Arc<Condition>> {
        match self {
            Self::Condition(condition) => Some(condition),
            Self::Group(_) => None,
        }
    }

    /// Returns the group if this node is one.
    #[must_use]
    pub fn as_group(&self) -> Option<&Arc<Group>> {
        match self {
            Self::Condition(_) => None,
            Self::Group(group) => Some(group),
        }
    }

    /// Number of conditions in this node, including itself.
    #[must_use]
    pub fn condition_count(&self) -> usize {
        match self {
            Self::Condition(_) => 1,
            Self::Group(group) => group.condition_count(),
        }
    }

    /// Group levels contributed by this node: zero for a condition, one plus
    /// the group's own height for a group.
    #[must_use]
    pub fn group_levels(&self) -> usize {
        match self {
            Self::Condition(_) => 0,
            Self::Group(group) => 1 + group.height(),
        }
    }

    /// Returns `true` if both nodes are the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Condition(a), Self::Condition(b)) => Arc::ptr_eq(a, b),
            (Self::Group(a), Self::Group(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Condition> for FilterNode {
    fn from(condition: Condition) -> Self {
        Self::Condition(Arc::new(condition))
    }
}

impl From<Group> for FilterNode {
    fn from(group: Group) -> Self {
        Self::Group(Arc::new(group))
    }
}

/// An internal node combining its children with a connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Stable identifier.
    pub id: NodeId,
    /// How the children are combined.
    #[serde(default)]
    pub connector: Connector,
    /// Ordered children.
    #[serde(default)]
    pub children: Vec<FilterNode>,
}

impl Group {
    /// Creates a group with a fresh ID.
    pub fn new(connector: Connector, children: Vec<FilterNode>) -> Self {
        Self {
            id: NodeId::new(),
            connector,
            children,
        }
    }

    /// Creates an empty AND group with a fresh ID.
    pub fn empty() -> Self {
        Self::new(Connector::And, Vec::new())
    }

    /// Appends a child, builder style.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<FilterNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns `true` if the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of conditions in this subtree.
    #[must_use]
    pub fn condition_count(&self) -> usize {
        self.children.iter().map(FilterNode::condition_count).sum()
    }

    /// Number of group levels below this group.
    ///
    /// A group whose children are all conditions has height zero.
    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(FilterNode::group_levels)
            .max()
            .unwrap_or(0)
    }

    /// Returns `true` if any child is a group.
    #[must_use]
    pub fn has_nested_groups(&self) -> bool {
        self.children
            .iter()
            .any(|child| matches!(child, FilterNode::Group(_)))
    }

    /// Position of the direct child with the given ID.
    #[must_use]
    pub fn position(&self, id: &NodeId) -> Option<usize> {
        self.children.iter().position(|child| child.id() == id)
    }

    /// Finds a node anywhere in this subtree, excluding the group itself.
    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&FilterNode> {
        self.children.iter().find_map(|child| {
            if child.id() == id {
                return Some(child);
            }
            child.as_group().and_then(|group| group.find(id))
        })
    }

    /// Returns `true` if this group or any descendant has the given ID.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        &self.id == id || self.find(id).is_some()
    }

    /// Records every ID of this subtree, including the group's own, in
    /// `seen` and returns the first one that was already present.
    pub fn find_duplicate_id<'a>(
        &'a self,
        seen: &mut HashSet<&'a NodeId>,
    ) -> Option<&'a NodeId> {
        if !seen.insert(&self.id) {
            return Some(&self.id);
        }
        self.children.iter().find_map(|child| match child {
            FilterNode::Condition(condition) => {
                (!seen.insert(&condition.id)).then_some(&condition.id)
            }
            FilterNode::Group(group) => group.find_duplicate_id(seen),
        })
    }

    /// Depth of the group with the given ID relative to this group.
    ///
    /// This group is depth zero, its direct child groups depth one.
    #[must_use]
    pub fn depth_of(&self, id: &NodeId) -> Option<usize> {
        if &self.id == id {
            return Some(0);
        }
        self.children.iter().find_map(|child| {
            child
                .as_group()
                .and_then(|group| group.depth_of(id))
                .map(|depth| depth + 1)
        })
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::empty()
    }
}
