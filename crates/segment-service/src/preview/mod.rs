//! Visitor-count preview for the filter being edited.
//!
//! The engine never performs network calls. A [`PreviewProvider`] performs
//! the backend query, [`PreviewService`] adds structured logging around it,
//! and [`PreviewScheduler`] debounces and supersedes requests as edits arrive.

mod config;
mod request;
mod response;
mod scheduler;
mod service;

pub use config::PreviewConfig;
pub use request::{DateRange, PreviewRequest};
pub use response::PreviewResponse;
pub use scheduler::{PreviewScheduler, PreviewState};
pub use service::PreviewService;

use crate::{Error, ErrorKind, Result};

/// Tracing target for preview operations.
pub const TRACING_TARGET: &str = "segment_service::preview";

/// Core trait for counting visitors matched by a filter.
///
/// Implement this trait to connect a preview to an analytics backend.
#[async_trait::async_trait]
pub trait PreviewProvider: Send + Sync {
    /// Counts the visitors matching `request.filter` within its date range.
    async fn count(&self, request: &PreviewRequest) -> Result<PreviewResponse>;
}
