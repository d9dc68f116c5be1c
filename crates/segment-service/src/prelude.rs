//! Convenient re-exports for common use.

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::preview::{
    DateRange, PreviewConfig, PreviewProvider, PreviewRequest, PreviewResponse, PreviewScheduler,
    PreviewService, PreviewState,
};
pub use crate::store::{
    MemorySegmentStore, NewSegment, SavedSegment, SegmentId, SegmentService, SegmentStore,
    Visibility,
};
