//! The filter tree value.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use super::{Condition, FilterNode, Group, NodeId};

/// Current version of the tree layout.
pub const TREE_VERSION: u32 = 1;

/// A complete filter expression.
///
/// Trees are immutable values: every edit produces a new tree that shares
/// untouched subtrees with the previous one, so cloning is cheap and a tree
/// may be handed to another thread by value.
///
/// Deserialized snapshots must use [`NodeId::root`] for the root group and
/// may not repeat an ID anywhere in the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tree {
    /// Layout version.
    pub version: u32,
    /// Root group, always identified by [`NodeId::root`].
    pub root: Arc<Group>,
}

impl Tree {
    /// Creates a tree with an empty AND root group.
    pub fn new() -> Self {
        Self::from_root(Group::empty())
    }

    /// Wraps a group as the root of a tree, assigning it the root ID.
    pub fn from_root(mut root: Group) -> Self {
        root.id = NodeId::root();
        Self {
            version: TREE_VERSION,
            root: Arc::new(root),
        }
    }

    pub(crate) fn with_root(&self, root: Arc<Group>) -> Self {
        Self {
            version: self.version,
            root,
        }
    }

    /// Returns `true` if the root group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Total number of conditions in the tree.
    #[must_use]
    pub fn count_conditions(&self) -> usize {
        self.root.condition_count()
    }

    /// Deepest group nesting; a tree without nested groups has depth zero.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.root.height()
    }

    /// Finds a node by ID. The root group itself is not a [`FilterNode`].
    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&FilterNode> {
        self.root.find(id)
    }

    /// Finds a group by ID, including the root.
    #[must_use]
    pub fn find_group(&self, id: &NodeId) -> Option<&Arc<Group>> {
        if &self.root.id == id {
            return Some(&self.root);
        }
        self.find(id).and_then(FilterNode::as_group)
    }

    /// Finds a condition by ID.
    #[must_use]
    pub fn find_condition(&self, id: &NodeId) -> Option<&Arc<Condition>> {
        self.find(id).and_then(FilterNode::as_condition)
    }

    /// Returns `true` if any node, including the root, has this ID.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.root.contains(id)
    }

    /// Nesting depth of a group; the root is depth zero.
    #[must_use]
    pub fn depth_of(&self, id: &NodeId) -> Option<usize> {
        self.root.depth_of(id)
    }

    /// Iterates over all conditions in depth-first order.
    pub fn conditions(&self) -> Conditions<'_> {
        Conditions {
            stack: vec![self.root.children.iter()],
        }
    }

    /// Returns `true` if both trees share the same root allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    root: Arc<Group>,
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Snapshot { version, root } = Snapshot::deserialize(deserializer)?;
        if !root.id.is_root() {
            return Err(serde::de::Error::custom(format!(
                "root group must have ID \"{}\", found \"{}\"",
                NodeId::root(),
                root.id
            )));
        }
        if let Some(id) = root.find_duplicate_id(&mut HashSet::new()) {
            return Err(serde::de::Error::custom(format!("duplicate node ID \"{id}\"")));
        }
        Ok(Self { version, root })
    }
}

/// Depth-first iterator over the conditions of a tree.
pub struct Conditions<'a> {
    stack: Vec<std::slice::Iter<'a, FilterNode>>,
}

impl<'a> Iterator for Conditions<'a> {
    type Item = &'a Arc<Condition>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(FilterNode::Condition(condition)) => return Some(condition),
                Some(FilterNode::Group(group)) => self.stack.push(group.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
