//! Segment service wrapper with validation and observability.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use segment_filter::{FilterEditor, Tree, wire};

use super::{
    Error, ErrorKind, NewSegment, Result, SavedSegment, SegmentId, SegmentStore, TRACING_TARGET,
    Visibility,
};

/// Segment service wrapper.
///
/// Saves only trees that pass validation and loads stored filters back into
/// editor sessions. The inner store is wrapped in `Arc` for cheap cloning.
#[derive(Clone)]
pub struct SegmentService {
    inner: Arc<dyn SegmentStore>,
}

impl fmt::Debug for SegmentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentService").finish_non_exhaustive()
    }
}

impl SegmentService {
    /// Create a new segment service wrapper.
    pub fn new<S>(store: S) -> Self
    where
        S: SegmentStore + 'static,
    {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Saves the editor's tree as a new segment and clears its dirty flag.
    pub async fn create(
        &self,
        name: &str,
        visibility: Visibility,
        editor: &mut FilterEditor,
    ) -> Result<SavedSegment> {
        let segment = Self::prepare(name, visibility, editor)?;
        let started_at = Instant::now();

        let result = self.inner.create(segment).await;
        if let Ok(saved) = &result {
            editor.mark_saved();
            tracing::info!(
                target: TRACING_TARGET,
                segment_id = %saved.id,
                visibility = %saved.visibility,
                conditions = saved.filter.condition_count(),
                elapsed_ms = started_at.elapsed().as_millis(),
                "Segment created"
            );
        }
        Self::log_failure(&result, "create");
        result
    }

    /// Overwrites an existing segment with the editor's tree.
    pub async fn update(
        &self,
        id: SegmentId,
        name: &str,
        visibility: Visibility,
        editor: &mut FilterEditor,
    ) -> Result<SavedSegment> {
        let segment = Self::prepare(name, visibility, editor)?;
        let started_at = Instant::now();

        let result = self.inner.update(id, segment).await;
        if let Ok(saved) = &result {
            editor.mark_saved();
            tracing::info!(
                target: TRACING_TARGET,
                segment_id = %saved.id,
                conditions = saved.filter.condition_count(),
                elapsed_ms = started_at.elapsed().as_millis(),
                "Segment updated"
            );
        }
        Self::log_failure(&result, "update");
        result
    }

    /// Loads a stored segment into `editor`, replacing its tree.
    pub async fn open(&self, id: SegmentId, editor: &mut FilterEditor) -> Result<SavedSegment> {
        let saved = self.inner.get(id).await?;
        editor.load(&saved.filter).map_err(|error| {
            tracing::warn!(
                target: TRACING_TARGET,
                segment_id = %id,
                error = %error,
                "Stored segment has a malformed filter"
            );
            Error::from(error).with_context(format!("segment {id}"))
        })?;

        tracing::debug!(
            target: TRACING_TARGET,
            segment_id = %id,
            valid = editor.is_valid(),
            "Segment opened"
        );
        Ok(saved)
    }

    /// Rebuilds the tree of a stored segment.
    pub fn hydrate(segment: &SavedSegment) -> Result<Tree> {
        wire::from_wire(&segment.filter)
            .map_err(|error| Error::from(error).with_context(format!("segment {}", segment.id)))
    }

    /// Fetches one segment.
    pub async fn get(&self, id: SegmentId) -> Result<SavedSegment> {
        self.inner.get(id).await
    }

    /// Deletes one segment.
    pub async fn delete(&self, id: SegmentId) -> Result<()> {
        let result = self.inner.delete(id).await;
        if result.is_ok() {
            tracing::info!(target: TRACING_TARGET, segment_id = %id, "Segment deleted");
        }
        Self::log_failure(&result, "delete");
        result
    }

    /// Lists stored segments.
    pub async fn list(&self) -> Result<Vec<SavedSegment>> {
        self.inner.list().await
    }

    fn prepare(name: &str, visibility: Visibility, editor: &FilterEditor) -> Result<NewSegment> {
        let Some(filter) = editor.wire() else {
            let errors = editor.report().errors();
            tracing::debug!(
                target: TRACING_TARGET,
                issues = errors.len(),
                "Refusing to save invalid filter"
            );
            return Err(Error::new(ErrorKind::InvalidInput).with_message(errors.join(" ")));
        };
        NewSegment::new(name, visibility, filter)
    }

    fn log_failure<T>(result: &Result<T>, operation: &'static str) {
        if let Err(error) = result {
            tracing::error!(
                target: TRACING_TARGET,
                operation,
                error = %error,
                "Segment store operation failed"
            );
        }
    }
}
