//! ID-addressed tree transforms.
//!
//! Every operation takes the current [`Tree`] by reference and returns a new
//! one. Groups on the path from the root to the target are rebuilt; all other
//! subtrees are shared with the input. Unknown IDs leave the tree untouched
//! and return a clone sharing the same root.

use std::collections::HashSet;
use std::sync::Arc;

use super::{ConditionPatch, EditOutcome};
use crate::TRACING_TARGET;
use crate::config::{EmptyGroupPolicy, FilterLimits};
use crate::error::EditError;
use crate::node::{Condition, Connector, FilterNode, Group, NodeId, Tree};

impl Tree {
    /// Appends a new condition to a group.
    ///
    /// The condition starts blank and is filled from `patch`.
    #[must_use]
    pub fn add_condition(&self, group_id: &NodeId, patch: Option<ConditionPatch>) -> Self {
        let condition = match patch {
            Some(patch) => patch.apply_to(&Condition::empty()),
            None => Condition::empty(),
        };
        self.add_node(group_id, FilterNode::from(condition))
    }

    /// Shallow-merges `patch` into the condition with the given ID.
    #[must_use]
    pub fn update_condition(&self, condition_id: &NodeId, patch: &ConditionPatch) -> Self {
        let root = map_parent(&self.root, condition_id, &mut |group, index| {
            let FilterNode::Condition(condition) = &group.children[index] else {
                return None;
            };
            let updated = FilterNode::from(patch.apply_to(condition));
            Some(replace_child(group, index, updated))
        });
        self.rebuilt(root, condition_id, "update_condition")
    }

    /// Removes a condition from its parent group.
    #[must_use]
    pub fn delete_condition(&self, condition_id: &NodeId, policy: EmptyGroupPolicy) -> Self {
        if self.find_condition(condition_id).is_none() {
            return self.unchanged(condition_id, "delete_condition");
        }
        self.remove(condition_id, policy, "delete_condition")
    }

    /// Appends a nested group to a parent group.
    ///
    /// `group` defaults to an empty AND group. The insertion is rejected when
    /// the new group, including any groups it already contains, would sit
    /// deeper than `limits.max_depth`, or when its conditions would exceed
    /// `limits.max_conditions`. A supplied group is also rejected when any
    /// of its IDs is the root ID, already in the tree, or repeated within the
    /// group itself.
    pub fn add_nested_group(
        &self,
        parent_id: &NodeId,
        group: Option<Group>,
        limits: &FilterLimits,
    ) -> EditOutcome {
        let Some(parent_depth) = self.depth_of(parent_id) else {
            return EditOutcome::applied(self.unchanged(parent_id, "add_nested_group"));
        };

        let group = group.unwrap_or_else(Group::empty);
        if let Err(error) = self.check_ids(&group) {
            return self.rejected(error, parent_id, "add_nested_group");
        }

        let node = FilterNode::from(group);
        if let Err(error) = self.check_insert(parent_depth, &node, 0, limits) {
            return self.rejected(error, parent_id, "add_nested_group");
        }

        EditOutcome::applied(self.add_node(parent_id, node))
    }

    /// Removes a group and its entire subtree. The root cannot be removed.
    #[must_use]
    pub fn delete_nested_group(&self, group_id: &NodeId, policy: EmptyGroupPolicy) -> Self {
        if group_id.is_root() || self.find_group(group_id).is_none() {
            return self.unchanged(group_id, "delete_nested_group");
        }
        self.remove(group_id, policy, "delete_nested_group")
    }

    /// Sets the connector of a group, leaving its children untouched.
    #[must_use]
    pub fn update_connector(&self, group_id: &NodeId, connector: Connector) -> Self {
        let root = map_group(&self.root, group_id, &mut |group| Group {
            id: group.id.clone(),
            connector,
            children: group.children.clone(),
        });
        self.rebuilt(root, group_id, "update_connector")
    }

    /// Moves a condition or group to `new_index`, optionally into another group.
    ///
    /// The index addresses the target's children after the item has been
    /// taken out, and is clamped to the end of the list. Moving the root, or a
    /// group into its own subtree, is ignored. Moves that would exceed the
    /// depth or count limits are rejected.
    pub fn move_item(
        &self,
        item_id: &NodeId,
        new_index: usize,
        target_group_id: Option<&NodeId>,
        limits: &FilterLimits,
    ) -> EditOutcome {
        let Some((parent, item)) = find_with_parent(&self.root, item_id) else {
            return EditOutcome::applied(self.unchanged(item_id, "move_item"));
        };
        let target_id = target_group_id.unwrap_or(&parent.id);
        let Some(target_depth) = self.depth_of(target_id) else {
            return EditOutcome::applied(self.unchanged(target_id, "move_item"));
        };

        if let FilterNode::Group(group) = item
            && group.contains(target_id)
        {
            tracing::debug!(
                target: TRACING_TARGET,
                node_id = %item_id,
                target_id = %target_id,
                "Ignoring move of a group into its own subtree"
            );
            return EditOutcome::applied(self.clone());
        }

        let moved_count = item.condition_count();
        if let Err(error) = self.check_insert(target_depth, item, moved_count, limits) {
            return self.rejected(error, item_id, "move_item");
        }

        if &parent.id == target_id {
            let last = parent.children.len() - 1;
            if parent.position(item_id) == Some(new_index.min(last)) {
                return EditOutcome::applied(self.clone());
            }
        }

        let item = item.clone();
        let Some(detached) = remove_node(&self.root, item_id, false) else {
            return EditOutcome::applied(self.clone());
        };
        let detached = self.with_root(detached.into_group(&self.root));
        let root = map_group(&detached.root, target_id, &mut |group| {
            let mut children = group.children.clone();
            let index = new_index.min(children.len());
            children.insert(index, item.clone());
            Group {
                id: group.id.clone(),
                connector: group.connector,
                children,
            }
        });

        tracing::debug!(
            target: TRACING_TARGET,
            node_id = %item_id,
            target_id = %target_id,
            index = new_index,
            "Moved filter node"
        );
        EditOutcome::applied(detached.rebuilt(root, target_id, "move_item"))
    }

    /// Discards all state, returning a fresh empty tree.
    #[must_use]
    pub fn clear_all(&self) -> Self {
        Self::new()
    }

    fn add_node(&self, group_id: &NodeId, node: FilterNode) -> Self {
        let root = map_group(&self.root, group_id, &mut |group| {
            let mut children = group.children.clone();
            children.push(node.clone());
            Group {
                id: group.id.clone(),
                connector: group.connector,
                children,
            }
        });
        self.rebuilt(root, group_id, "add_node")
    }

    fn remove(&self, id: &NodeId, policy: EmptyGroupPolicy, operation: &'static str) -> Self {
        let prune = policy == EmptyGroupPolicy::Prune;
        match remove_node(&self.root, id, prune) {
            Some(removal) => self.with_root(removal.into_group(&self.root)),
            None => self.unchanged(id, operation),
        }
    }

    /// Checks that no ID of `group` clashes with the tree or with itself.
    ///
    /// The first clash in depth-first order is reported.
    fn check_ids(&self, group: &Group) -> Result<(), EditError> {
        let mut seen = HashSet::new();
        self.root.find_duplicate_id(&mut seen);
        match group.find_duplicate_id(&mut seen) {
            Some(id) => Err(EditError::DuplicateId { id: id.clone() }),
            None => Ok(()),
        }
    }

    /// Checks that `node` may be placed under a group at `parent_depth`.
    ///
    /// `already_counted` is the number of the node's conditions that are
    /// already part of the tree, as for a move.
    fn check_insert(
        &self,
        parent_depth: usize,
        node: &FilterNode,
        already_counted: usize,
        limits: &FilterLimits,
    ) -> Result<(), EditError> {
        let depth = parent_depth + node.group_levels();
        if depth > limits.max_depth {
            return Err(EditError::DepthExceeded {
                max: limits.max_depth,
                depth,
            });
        }

        let added = node.condition_count() - already_counted;
        let count = self.count_conditions() + added;
        if added > 0 && count > limits.max_conditions {
            return Err(EditError::TooManyConditions {
                max: limits.max_conditions,
                count,
            });
        }

        Ok(())
    }

    fn rebuilt(&self, root: Option<Arc<Group>>, id: &NodeId, operation: &'static str) -> Self {
        match root {
            Some(root) => self.with_root(root),
            None => self.unchanged(id, operation),
        }
    }

    fn unchanged(&self, id: &NodeId, operation: &'static str) -> Self {
        tracing::debug!(
            target: TRACING_TARGET,
            node_id = %id,
            operation,
            "Edit target not found, tree unchanged"
        );
        self.clone()
    }

    fn rejected(&self, error: EditError, id: &NodeId, operation: &'static str) -> EditOutcome {
        tracing::debug!(
            target: TRACING_TARGET,
            node_id = %id,
            operation,
            error = %error,
            "Edit rejected"
        );
        EditOutcome::rejected(self.clone(), error)
    }
}

/// Result of removing a node from a subtree.
enum Removal {
    /// The subtree was rebuilt without the node.
    Rebuilt(Arc<Group>),
    /// The group was left empty and should itself be pruned.
    Emptied,
}

impl Removal {
    /// Resolves the removal at the root, which is never pruned.
    fn into_group(self, root: &Group) -> Arc<Group> {
        match self {
            Self::Rebuilt(group) => group,
            Self::Emptied => Arc::new(Group {
                id: root.id.clone(),
                connector: root.connector,
                children: Vec::new(),
            }),
        }
    }
}

fn replace_child(group: &Group, index: usize, child: FilterNode) -> Group {
    let mut children = group.children.clone();
    children[index] = child;
    Group {
        id: group.id.clone(),
        connector: group.connector,
        children,
    }
}

fn without_child(group: &Group, index: usize, prune: bool) -> Removal {
    let mut children = group.children.clone();
    children.remove(index);
    if prune && children.is_empty() {
        return Removal::Emptied;
    }
    Removal::Rebuilt(Arc::new(Group {
        id: group.id.clone(),
        connector: group.connector,
        children,
    }))
}

/// Rebuilds the path to the group `id`, replacing it with `edit(group)`.
fn map_group<F>(group: &Arc<Group>, id: &NodeId, edit: &mut F) -> Option<Arc<Group>>
where
    F: FnMut(&Group) -> Group,
{
    if &group.id == id {
        return Some(Arc::new(edit(&**group)));
    }
    group.children.iter().enumerate().find_map(|(index, child)| {
        let inner = child.as_group()?;
        let updated = map_group(inner, id, edit)?;
        Some(Arc::new(replace_child(group, index, FilterNode::Group(updated))))
    })
}

/// Rebuilds the path to the group holding `child_id`.
///
/// `edit` receives the parent and the child's index; returning `None` aborts
/// the edit.
fn map_parent<F>(group: &Arc<Group>, child_id: &NodeId, edit: &mut F) -> Option<Arc<Group>>
where
    F: FnMut(&Group, usize) -> Option<Group>,
{
    if let Some(index) = group.position(child_id) {
        return edit(&**group, index).map(Arc::new);
    }
    group.children.iter().enumerate().find_map(|(index, child)| {
        let inner = child.as_group()?;
        let updated = map_parent(inner, child_id, edit)?;
        Some(Arc::new(replace_child(group, index, FilterNode::Group(updated))))
    })
}

fn remove_node(group: &Arc<Group>, id: &NodeId, prune: bool) -> Option<Removal> {
    if let Some(index) = group.position(id) {
        return Some(without_child(group, index, prune));
    }
    group.children.iter().enumerate().find_map(|(index, child)| {
        let inner = child.as_group()?;
        match remove_node(inner, id, prune)? {
            Removal::Rebuilt(updated) => Some(Removal::Rebuilt(Arc::new(replace_child(
                group,
                index,
                FilterNode::Group(updated),
            )))),
            Removal::Emptied => Some(without_child(group, index, prune)),
        }
    })
}

fn find_with_parent<'a>(group: &'a Group, id: &NodeId) -> Option<(&'a Group, &'a FilterNode)> {
    group.children.iter().find_map(|child| {
        if child.id() == id {
            return Some((group, child));
        }
        child
            .as_group()
            .and_then(|inner| find_with_parent(inner, id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{FilterValue, Operator};

    fn limits() -> FilterLimits {
        FilterLimits::default()
    }

    fn two_conditions() -> Tree {
        Tree::from_root(
            Group::empty()
                .with_child(Condition::new("country", Operator::Equals, "US"))
                .with_child(Condition::new("browser", Operator::Equals, "Chrome")),
        )
    }

    fn child_id(tree: &Tree, index: usize) -> NodeId {
        tree.root.children[index].id().clone()
    }

    /// Builds a chain of nested groups `depth` levels deep and returns the
    /// tree with the ID of the deepest group.
    fn chain(depth: usize) -> (Tree, NodeId) {
        let unbounded = FilterLimits::default().with_max_depth(usize::MAX);
        let mut tree = Tree::new();
        let mut parent = NodeId::root();
        for _ in 0..depth {
            let group = Group::empty();
            let id = group.id.clone();
            tree = tree
                .add_nested_group(&parent, Some(group), &unbounded)
                .tree;
            parent = id;
        }
        (tree, parent)
    }

    #[test]
    fn test_add_condition_appends_with_defaults() {
        let tree = two_conditions();
        let ids: Vec<_> = tree.conditions().map(|c| c.id.clone()).collect();

        let updated = tree.add_condition(&NodeId::root(), None);
        assert_eq!(updated.count_conditions(), 3);
        let added = updated.root.children[2].as_condition().unwrap();
        assert!(added.dimension.is_empty());
        assert!(added.operator.is_none());

        let kept: Vec<_> = updated.conditions().take(2).map(|c| c.id.clone()).collect();
        assert_eq!(kept, ids);
        assert!(!updated.ptr_eq(&tree));
        assert!(updated.root.children[0].ptr_eq(&tree.root.children[0]));
    }

    #[test]
    fn test_add_condition_with_patch() {
        let patch = ConditionPatch::new().dimension("page").operator(Operator::Contains).value("/blog");
        let tree = Tree::new().add_condition(&NodeId::root(), Some(patch));
        let condition = tree.conditions().next().unwrap();
        assert_eq!(condition.dimension, "page");
        assert_eq!(condition.operator, Some(Operator::Contains));
        assert_eq!(condition.value, FilterValue::from("/blog"));
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let tree = two_conditions();
        let missing = NodeId::from("missing");

        assert!(tree.add_condition(&missing, None).ptr_eq(&tree));
        assert!(tree.update_condition(&missing, &ConditionPatch::new().value("x")).ptr_eq(&tree));
        assert!(tree.delete_condition(&missing, EmptyGroupPolicy::Prune).ptr_eq(&tree));
        assert!(tree.delete_nested_group(&missing, EmptyGroupPolicy::Retain).ptr_eq(&tree));
        assert!(tree.update_connector(&missing, Connector::Or).ptr_eq(&tree));

        let outcome = tree.add_nested_group(&missing, None, &limits());
        assert!(outcome.error.is_none());
        assert!(outcome.tree.ptr_eq(&tree));

        let outcome = tree.move_item(&missing, 0, None, &limits());
        assert!(outcome.error.is_none());
        assert!(outcome.tree.ptr_eq(&tree));
    }

    #[test]
    fn test_update_condition_merges() {
        let tree = two_conditions();
        let id = child_id(&tree, 1);
        let updated = tree.update_condition(&id, &ConditionPatch::new().value("Firefox").negated(true));

        let condition = updated.find_condition(&id).unwrap();
        assert_eq!(condition.dimension, "browser");
        assert_eq!(condition.value, FilterValue::from("Firefox"));
        assert!(condition.negated);
        assert!(updated.root.children[0].ptr_eq(&tree.root.children[0]));
        // Input is untouched.
        assert_eq!(
            tree.find_condition(&id).unwrap().value,
            FilterValue::from("Chrome")
        );
    }

    #[test]
    fn test_update_condition_ignores_groups() {
        let outcome = Tree::new().add_nested_group(&NodeId::root(), None, &limits());
        let group_id = child_id(&outcome.tree, 0);
        let updated = outcome.tree.update_condition(&group_id, &ConditionPatch::new().value("x"));
        assert!(updated.ptr_eq(&outcome.tree));
    }

    #[test]
    fn test_delete_condition() {
        let tree = two_conditions();
        let id = child_id(&tree, 0);
        let updated = tree.delete_condition(&id, EmptyGroupPolicy::Retain);
        assert_eq!(updated.count_conditions(), 1);
        assert!(updated.find(&id).is_none());
        assert_eq!(tree.count_conditions(), 2);
    }

    #[test]
    fn test_delete_last_condition_retains_group() {
        let group = Group::empty().with_child(Condition::new("country", Operator::Equals, "US"));
        let group_id = group.id.clone();
        let tree = Tree::new()
            .add_nested_group(&NodeId::root(), Some(group), &limits())
            .tree;
        let condition_id = tree.conditions().next().unwrap().id.clone();

        let retained = tree.delete_condition(&condition_id, EmptyGroupPolicy::Retain);
        assert!(retained.find_group(&group_id).unwrap().is_empty());

        let pruned = tree.delete_condition(&condition_id, EmptyGroupPolicy::Prune);
        assert!(pruned.find_group(&group_id).is_none());
        assert!(pruned.is_empty());
        assert!(pruned.root.id.is_root());
    }

    #[test]
    fn test_prune_cascades_but_keeps_siblings() {
        let inner = Group::empty().with_child(Condition::new("page", Operator::Contains, "/a"));
        let outer = Group::empty().with_child(inner);
        let outer_id = outer.id.clone();
        let tree = Tree::from_root(
            Group::empty()
                .with_child(Condition::new("country", Operator::Equals, "US"))
                .with_child(outer),
        );
        let page_id = tree.conditions().nth(1).unwrap().id.clone();

        let pruned = tree.delete_condition(&page_id, EmptyGroupPolicy::Prune);
        assert!(pruned.find_group(&outer_id).is_none());
        assert_eq!(pruned.root.children.len(), 1);
        assert!(pruned.root.children[0].ptr_eq(&tree.root.children[0]));
    }

    #[test]
    fn test_add_nested_group_depth_limit() {
        let limits = FilterLimits::default().with_max_depth(3);

        let (tree, deepest) = chain(2);
        let outcome = tree.add_nested_group(&deepest, None, &limits);
        assert!(outcome.error.is_none());
        assert_eq!(outcome.tree.max_depth(), 3);

        let (tree, deepest) = chain(3);
        let outcome = tree.add_nested_group(&deepest, None, &limits);
        assert_eq!(
            outcome.error,
            Some(EditError::DepthExceeded { max: 3, depth: 4 })
        );
        assert!(outcome.tree.ptr_eq(&tree));
    }

    #[test]
    fn test_add_nested_group_counts_supplied_subtree() {
        let limits = FilterLimits::default().with_max_depth(2);
        let supplied = Group::empty().with_child(Group::empty()).with_child(Group::empty());
        let (tree, deepest) = chain(1);

        let outcome = tree.add_nested_group(&deepest, Some(supplied), &limits);
        assert!(matches!(outcome.error, Some(EditError::DepthExceeded { depth: 3, .. })));
    }

    #[test]
    fn test_add_nested_group_condition_limit() {
        let limits = FilterLimits::default().with_max_conditions(2);
        let supplied = Group::empty().with_child(Condition::new("page", Operator::Equals, "/"));
        let outcome = two_conditions().add_nested_group(&NodeId::root(), Some(supplied), &limits);
        assert_eq!(
            outcome.error,
            Some(EditError::TooManyConditions { max: 2, count: 3 })
        );
    }

    #[test]
    fn test_add_nested_group_rejects_reused_ids() {
        let group = Group::empty().with_child(Condition::new("page", Operator::Equals, "/"));
        let group_id = group.id.clone();
        let tree = Tree::new()
            .add_nested_group(&NodeId::root(), Some(group.clone()), &limits())
            .tree;

        let outcome = tree.add_nested_group(&NodeId::root(), Some(group), &limits());
        assert_eq!(
            outcome.error,
            Some(EditError::DuplicateId { id: group_id.clone() })
        );
        assert!(outcome.tree.ptr_eq(&tree));

        let deleted = outcome.tree.delete_nested_group(&group_id, EmptyGroupPolicy::Retain);
        assert!(!deleted.contains(&group_id));
        assert!(deleted.is_empty());
    }

    #[test]
    fn test_add_nested_group_rejects_root_id() {
        let impostor = Group {
            id: NodeId::root(),
            connector: Connector::Or,
            children: Vec::new(),
        };
        let tree = two_conditions();
        let outcome = tree.add_nested_group(&NodeId::root(), Some(impostor), &limits());
        assert_eq!(
            outcome.error,
            Some(EditError::DuplicateId { id: NodeId::root() })
        );
        assert!(outcome.tree.ptr_eq(&tree));
    }

    #[test]
    fn test_add_nested_group_rejects_repeated_ids_within_group() {
        let condition = Condition::new("page", Operator::Equals, "/");
        let condition_id = condition.id.clone();
        let group = Group::empty()
            .with_child(condition.clone())
            .with_child(condition);

        let outcome = Tree::new().add_nested_group(&NodeId::root(), Some(group), &limits());
        assert_eq!(
            outcome.error,
            Some(EditError::DuplicateId { id: condition_id })
        );
        assert!(outcome.tree.is_empty());
    }

    #[test]
    fn test_delete_nested_group_removes_subtree() {
        let group = Group::empty().with_child(Condition::new("page", Operator::Equals, "/"));
        let group_id = group.id.clone();
        let tree = two_conditions()
            .add_nested_group(&NodeId::root(), Some(group), &limits())
            .tree;
        assert_eq!(tree.count_conditions(), 3);

        let updated = tree.delete_nested_group(&group_id, EmptyGroupPolicy::Retain);
        assert_eq!(updated.count_conditions(), 2);
        assert!(!updated.contains(&group_id));
    }

    #[test]
    fn test_delete_root_is_noop() {
        let tree = two_conditions();
        assert!(tree.delete_nested_group(&NodeId::root(), EmptyGroupPolicy::Prune).ptr_eq(&tree));
    }

    #[test]
    fn test_update_connector() {
        let tree = two_conditions();
        let updated = tree.update_connector(&NodeId::root(), Connector::Or);
        assert_eq!(updated.root.connector, Connector::Or);
        assert_eq!(updated.root.children, tree.root.children);
        assert_eq!(tree.root.connector, Connector::And);
    }

    #[test]
    fn test_move_within_group() {
        let tree = two_conditions().add_condition(&NodeId::root(), None);
        let first = child_id(&tree, 0);

        let outcome = tree.move_item(&first, 2, None, &limits());
        assert!(outcome.error.is_none());
        assert_eq!(child_id(&outcome.tree, 2), first);
        assert_eq!(outcome.tree.count_conditions(), 3);
    }

    #[test]
    fn test_move_clamps_index() {
        let tree = two_conditions();
        let first = child_id(&tree, 0);
        let outcome = tree.move_item(&first, 99, None, &limits());
        assert_eq!(child_id(&outcome.tree, 1), first);
    }

    #[test]
    fn test_move_to_same_position_is_noop() {
        let tree = two_conditions();
        let second = child_id(&tree, 1);
        let outcome = tree.move_item(&second, 5, None, &limits());
        assert!(outcome.tree.ptr_eq(&tree));
    }

    #[test]
    fn test_move_into_other_group() {
        let group = Group::new(Connector::Or, vec![]);
        let group_id = group.id.clone();
        let tree = two_conditions()
            .add_nested_group(&NodeId::root(), Some(group), &limits())
            .tree;
        let country = child_id(&tree, 0);

        let outcome = tree.move_item(&country, 0, Some(&group_id), &limits());
        assert!(outcome.error.is_none());
        let group = outcome.tree.find_group(&group_id).unwrap();
        assert_eq!(group.children.len(), 1);
        assert_eq!(group.children[0].id(), &country);
        assert_eq!(outcome.tree.root.children.len(), 2);
        assert_eq!(outcome.tree.count_conditions(), 2);
    }

    #[test]
    fn test_move_group_into_itself_is_ignored() {
        let (tree, deepest) = chain(2);
        let top = child_id(&tree, 0);
        let outcome = tree.move_item(&top, 0, Some(&deepest), &limits());
        assert!(outcome.error.is_none());
        assert!(outcome.tree.ptr_eq(&tree));

        let outcome = tree.move_item(&top, 0, Some(&top), &limits());
        assert!(outcome.tree.ptr_eq(&tree));
    }

    #[test]
    fn test_move_rejected_by_depth() {
        let limits = FilterLimits::default().with_max_depth(3);
        let (tree, deepest) = chain(3);
        let extra = Group::empty();
        let extra_id = extra.id.clone();
        let tree = tree.add_nested_group(&NodeId::root(), Some(extra), &limits).tree;

        let outcome = tree.move_item(&extra_id, 0, Some(&deepest), &limits);
        assert_eq!(
            outcome.error,
            Some(EditError::DepthExceeded { max: 3, depth: 4 })
        );
        assert!(outcome.tree.ptr_eq(&tree));
    }

    #[test]
    fn test_move_root_is_noop() {
        let tree = two_conditions();
        let outcome = tree.move_item(&NodeId::root(), 0, None, &limits());
        assert!(outcome.tree.ptr_eq(&tree));
    }

    #[test]
    fn test_clear_all() {
        let tree = two_conditions().clear_all();
        assert!(tree.is_empty());
        assert!(tree.root.id.is_root());
    }
}
