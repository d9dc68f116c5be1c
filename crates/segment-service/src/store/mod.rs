//! Saved segment persistence.
//!
//! Storage is pluggable through [`SegmentStore`]. [`SegmentService`] is the
//! entry point for editing surfaces: it refuses to save invalid filters and
//! hydrates stored filters back into editor sessions.

mod memory;
mod segment;
mod service;

pub use memory::MemorySegmentStore;
pub use segment::{NewSegment, SavedSegment, SegmentId, Visibility};
pub use service::SegmentService;

use crate::{Error, ErrorKind, Result};

/// Tracing target for segment persistence operations.
pub const TRACING_TARGET: &str = "segment_service::store";

/// Core trait for segment storage backends.
#[async_trait::async_trait]
pub trait SegmentStore: Send + Sync {
    /// Stores a new segment and returns it with its assigned ID.
    async fn create(&self, segment: NewSegment) -> Result<SavedSegment>;

    /// Replaces the name, visibility and filter of an existing segment.
    async fn update(&self, id: SegmentId, segment: NewSegment) -> Result<SavedSegment>;

    /// Fetches one segment.
    async fn get(&self, id: SegmentId) -> Result<SavedSegment>;

    /// Removes one segment.
    async fn delete(&self, id: SegmentId) -> Result<()>;

    /// Lists all segments, oldest first.
    async fn list(&self) -> Result<Vec<SavedSegment>>;
}
