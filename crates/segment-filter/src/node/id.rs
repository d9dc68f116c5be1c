//! Node identifier type.

use std::borrow::Borrow;

use derive_more::{Debug, Display, From, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Well-known identifier of the root group.
pub const ROOT_ID: &str = "root";

/// Unique identifier for a condition or group in a filter tree.
///
/// Identifiers are opaque strings assigned once at creation time. Fresh
/// identifiers are time-ordered UUIDs, the root group always uses [`ROOT_ID`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Debug, Display, From, Into)]
#[debug("{_0}")]
#[display("{_0}")]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a new time-ordered node ID.
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Returns the identifier of the root group.
    #[inline]
    pub fn root() -> Self {
        Self(ROOT_ID.to_owned())
    }

    /// Returns `true` if this is the root group identifier.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0 == ROOT_ID
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
