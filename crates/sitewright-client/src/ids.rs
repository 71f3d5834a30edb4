//! Client ID types
//!
//! Newtype wrappers for type-safe identifiers of remote site objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier assigned to a list by the remote site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(Uuid);

impl ListId {
    /// Create a new random ListId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a ListId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID value.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Parse from a string representation.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for ListId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for ListId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ListId> for Uuid {
    fn from(id: ListId) -> Self {
        id.0
    }
}

/// Unique identifier of a field on a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Uuid);

impl FieldId {
    /// Create a new random FieldId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a FieldId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID value.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Parse from a string representation.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FieldId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for FieldId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<FieldId> for Uuid {
    fn from(id: FieldId) -> Self {
        id.0
    }
}

/// Unique identifier of a view on a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(Uuid);

impl ViewId {
    /// Create a new random ViewId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a ViewId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID value.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Parse from a string representation.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ViewId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for ViewId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ViewId> for Uuid {
    fn from(id: ViewId) -> Self {
        id.0
    }
}

/// Identifier of a navigation node within a navigation menu.
///
/// The remote service assigns small integer ids to navigation nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationNodeId(i64);

impl NavigationNodeId {
    /// Wrap a raw node id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw node id.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for NavigationNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Prefix of the built-in folder content-type hierarchy.
///
/// Content types under this hierarchy are part of the platform itself and
/// must never be removed from a list.
const FOLDER_HIERARCHY_PREFIX: &str = "0x0120";

/// Hierarchical content-type identifier.
///
/// Content-type ids encode their inheritance chain as a hex string prefix
/// (`0x0101` is a child of `0x01`), so prefix comparison answers "is this
/// type in that family".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTypeId(String);

impl ContentTypeId {
    /// Create a content-type id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id is in the family rooted at `ancestor`.
    ///
    /// An id is always in its own family.
    pub fn is_in_family_of(&self, ancestor: &ContentTypeId) -> bool {
        self.0.starts_with(&ancestor.0)
    }

    /// Whether this id belongs to the built-in folder hierarchy (`0x0120...`).
    pub fn is_folder_kind(&self) -> bool {
        self.0.starts_with(FOLDER_HIERARCHY_PREFIX)
    }
}

impl fmt::Display for ContentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentTypeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContentTypeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
