//! Preview response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of visitors matched by a preview request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Identifier of the request this answers.
    pub request_id: Uuid,
    /// Visitors matching the filter.
    pub matching_count: u64,
}

impl PreviewResponse {
    /// Creates a response for the given request.
    pub fn new(request_id: Uuid, matching_count: u64) -> Self {
        Self {
            request_id,
            matching_count,
        }
    }
}
