//! Editing session state around a filter tree.

use std::sync::Arc;

use crate::TRACING_TARGET;
use crate::config::FilterLimits;
use crate::dimension::DimensionCatalog;
use crate::edit::EditCommand;
use crate::error::EditResult;
use crate::node::Tree;
use crate::validate::{ValidationReport, Validator};
use crate::wire::{self, WireFilter, WireResult};

/// One editing session: the current tree plus its dirty and validity flags.
///
/// Every edit replaces the tree with a new value and re-runs the validator,
/// so [`FilterEditor::report`] always describes [`FilterEditor::tree`].
#[derive(Debug, Clone)]
pub struct FilterEditor {
    tree: Tree,
    catalog: Arc<DimensionCatalog>,
    limits: FilterLimits,
    dirty: bool,
    report: ValidationReport,
}

impl FilterEditor {
    /// Starts a session with an empty tree.
    pub fn new(catalog: Arc<DimensionCatalog>, limits: FilterLimits) -> Self {
        let tree = Tree::new();
        let report = Validator::new(&catalog, limits).validate(&tree);
        Self {
            tree,
            catalog,
            limits,
            dirty: false,
            report,
        }
    }

    /// Current tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Dimension catalog used for validation.
    pub fn catalog(&self) -> &DimensionCatalog {
        &self.catalog
    }

    /// Structural limits of this session.
    pub fn limits(&self) -> &FilterLimits {
        &self.limits
    }

    /// Returns `true` if the tree changed since it was loaded or saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns `true` if the current tree passes validation.
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }

    /// Latest validation report.
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Applies one edit.
    ///
    /// A rejected edit leaves the session untouched and returns the reason.
    pub fn apply(&mut self, command: &EditCommand) -> EditResult<()> {
        let outcome = command.apply(&self.tree, &self.limits);
        if let Some(error) = outcome.error {
            tracing::debug!(
                target: TRACING_TARGET,
                op = command.name(),
                error = %error,
                "Edit rejected"
            );
            return Err(error);
        }

        if outcome.tree.ptr_eq(&self.tree) {
            return Ok(());
        }

        self.replace(outcome.tree);
        self.dirty = true;
        tracing::debug!(
            target: TRACING_TARGET,
            op = command.name(),
            conditions = self.tree.count_conditions(),
            valid = self.is_valid(),
            "Edit applied"
        );
        Ok(())
    }

    /// Replaces the session with a tree hydrated from the wire format.
    ///
    /// On error the session is left as it was.
    pub fn load(&mut self, filter: &WireFilter) -> WireResult<()> {
        let tree = wire::from_wire(filter)?;
        self.replace(tree);
        self.dirty = false;
        Ok(())
    }

    /// Clears the dirty flag after the tree has been persisted.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Wire format of the current tree, or `None` while it is invalid.
    pub fn wire(&self) -> Option<WireFilter> {
        self.is_valid().then(|| wire::to_wire(&self.tree))
    }

    fn replace(&mut self, tree: Tree) {
        self.report = Validator::new(&self.catalog, self.limits).validate(&tree);
        self.tree = tree;
    }
}
