//! Saved segment types.

use derive_more::{Display, From, Into};
use jiff::Timestamp;
use segment_filter::WireFilter;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use uuid::Uuid;

use super::{Error, ErrorKind, Result};

/// Unique identifier of a saved segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(Uuid);

impl SegmentId {
    /// Generates a new time-ordered identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SegmentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Who can see a saved segment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, EnumString, strum::Display)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Only the author.
    #[default]
    Personal,
    /// Everyone with access to the site.
    Site,
}

/// A segment about to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSegment {
    /// Display name.
    pub name: String,
    /// Who can see the segment.
    #[serde(default)]
    pub visibility: Visibility,
    /// Filter in wire format.
    pub filter: WireFilter,
}

impl NewSegment {
    /// Creates a segment payload, trimming the name.
    pub fn new(name: impl AsRef<str>, visibility: Visibility, filter: WireFilter) -> Result<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput).with_message("segment name cannot be empty"));
        }
        Ok(Self {
            name: name.to_owned(),
            visibility,
            filter,
        })
    }
}

/// A stored segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSegment {
    /// Unique identifier.
    pub id: SegmentId,
    /// Display name.
    pub name: String,
    /// Who can see the segment.
    pub visibility: Visibility,
    /// Filter in wire format.
    pub filter: WireFilter,
    /// When the segment was first saved.
    pub created_at: Timestamp,
    /// When the segment was last saved.
    pub updated_at: Timestamp,
}

impl SavedSegment {
    /// Stamps a new segment with an ID and creation time.
    pub fn create(segment: NewSegment) -> Self {
        let now = Timestamp::now();
        Self {
            id: SegmentId::new(),
            name: segment.name,
            visibility: segment.visibility,
            filter: segment.filter,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies an update, keeping the ID and creation time.
    pub fn update(&mut self, segment: NewSegment) {
        self.name = segment.name;
        self.visibility = segment.visibility;
        self.filter = segment.filter;
        self.updated_at = Timestamp::now();
    }
}
