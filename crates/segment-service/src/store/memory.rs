//! In-process segment store.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::{Error, ErrorKind, NewSegment, Result, SavedSegment, SegmentId, SegmentStore};

/// Segment store backed by a vector in memory, in creation order.
///
/// Cloning shares the underlying storage. Useful for tests and local tooling.
#[derive(Debug, Clone, Default)]
pub struct MemorySegmentStore {
    segments: Arc<RwLock<Vec<SavedSegment>>>,
}

impl MemorySegmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored segments.
    pub async fn len(&self) -> usize {
        self.segments.read().await.len()
    }

    /// Returns `true` if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.segments.read().await.is_empty()
    }
}

fn not_found(id: SegmentId) -> Error {
    Error::new(ErrorKind::NotFound).with_message(format!("segment {id} not found"))
}

#[async_trait::async_trait]
impl SegmentStore for MemorySegmentStore {
    async fn create(&self, segment: NewSegment) -> Result<SavedSegment> {
        let saved = SavedSegment::create(segment);
        self.segments.write().await.push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, id: SegmentId, segment: NewSegment) -> Result<SavedSegment> {
        let mut segments = self.segments.write().await;
        let saved = segments
            .iter_mut()
            .find(|saved| saved.id == id)
            .ok_or_else(|| not_found(id))?;
        saved.update(segment);
        Ok(saved.clone())
    }

    async fn get(&self, id: SegmentId) -> Result<SavedSegment> {
        self.segments
            .read()
            .await
            .iter()
            .find(|saved| saved.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: SegmentId) -> Result<()> {
        let mut segments = self.segments.write().await;
        let index = segments
            .iter()
            .position(|saved| saved.id == id)
            .ok_or_else(|| not_found(id))?;
        segments.remove(index);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SavedSegment>> {
        Ok(self.segments.read().await.clone())
    }
}
