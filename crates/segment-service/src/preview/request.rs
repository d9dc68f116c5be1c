//! Preview request types.

use jiff::civil::Date;
use segment_filter::WireFilter;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Error, ErrorKind, Result};

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: Date,
    /// Last day of the range.
    pub end: Date,
}

impl DateRange {
    /// Creates a range, rejecting one that ends before it starts.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if end < start {
            return Err(Error::new(ErrorKind::InvalidInput)
                .with_message(format!("date range ends ({end}) before it starts ({start})")));
        }
        Ok(Self { start, end })
    }

    /// A single-day range.
    pub fn day(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns `true` if `date` falls within the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A request for the number of visitors matching a filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// Filter in wire format.
    pub filter: WireFilter,
    /// Period to count over.
    pub date_range: DateRange,
}

impl PreviewRequest {
    /// Creates a new preview request.
    pub fn new(filter: WireFilter, date_range: DateRange) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            filter,
            date_range,
        }
    }
}
