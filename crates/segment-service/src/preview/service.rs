//! Preview service wrapper with observability.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::{PreviewProvider, PreviewRequest, PreviewResponse, Result, TRACING_TARGET};

/// Preview service wrapper with observability.
///
/// This wrapper adds structured logging to any preview provider.
/// The inner provider is wrapped in `Arc` for cheap cloning.
#[derive(Clone)]
pub struct PreviewService {
    inner: Arc<dyn PreviewProvider>,
}

impl fmt::Debug for PreviewService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewService").finish_non_exhaustive()
    }
}

impl PreviewService {
    /// Create a new preview service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: PreviewProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Counts the visitors matching the request's filter.
    pub async fn count(&self, request: &PreviewRequest) -> Result<PreviewResponse> {
        let started_at = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            conditions = request.filter.condition_count(),
            flat = request.filter.is_flat(),
            start = %request.date_range.start,
            end = %request.date_range.end,
            "Requesting preview"
        );

        let result = self.inner.count(request).await;
        let elapsed = started_at.elapsed();

        match &result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    matching_count = response.matching_count,
                    elapsed_ms = elapsed.as_millis(),
                    "Preview completed"
                );
            }
            Err(error) if error.is_retryable() => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Preview failed, retryable"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Preview error"
                );
            }
        }

        result
    }
}
