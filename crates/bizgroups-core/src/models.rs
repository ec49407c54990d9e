// Rust guideline compliant 2026-10-17

//! Data models for business groups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of remote resource, used when rendering resolution errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// A named grouping of users and resources.
    BusinessGroup,
}

impl ResourceType {
    /// Returns the human-readable name of the resource type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::BusinessGroup => "business group",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource addressable by a hierarchical, path-like ID.
///
/// Implementors only need to expose the full ID; the short ID is the final
/// path segment.
pub trait Identifiable {
    /// Returns the full ID, e.g. `/tenants/qe/groups/a1b2c3`.
    fn full_id(&self) -> &str;

    /// Returns the final path segment of the full ID.
    fn short_id(&self) -> &str {
        short_id_of(self.full_id())
    }
}

/// A resource carrying a display label.
pub trait Labelled {
    /// Returns the display label.
    fn label(&self) -> &str;
}

/// Returns the final `/`-separated segment of `full_id`.
///
/// An ID without separators is returned unchanged. A trailing separator
/// yields an empty short ID.
#[must_use]
pub fn short_id_of(full_id: &str) -> &str {
    full_id.rsplit('/').next().unwrap_or(full_id)
}

/// A business group as returned by the groups endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessGroup {
    /// Full hierarchical ID.
    pub id: String,

    /// Human-readable label. Not required to be unique.
    #[serde(default)]
    pub label: String,
}

impl BusinessGroup {
    /// Creates a new business group.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl Identifiable for BusinessGroup {
    fn full_id(&self) -> &str {
        &self.id
    }
}

impl Labelled for BusinessGroup {
    fn label(&self) -> &str {
        &self.label
    }
}
