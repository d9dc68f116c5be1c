#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
pub mod preview;
pub mod store;

#[doc(hidden)]
pub mod prelude;

pub use error::{BoxedError, Error, ErrorKind, Result};
pub use preview::{
    DateRange, PreviewConfig, PreviewProvider, PreviewRequest, PreviewResponse, PreviewScheduler,
    PreviewService, PreviewState,
};
pub use store::{
    MemorySegmentStore, NewSegment, SavedSegment, SegmentId, SegmentService, SegmentStore,
    Visibility,
};
