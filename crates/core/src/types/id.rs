//! Newtype ID for type-safe figurine references.
//!
//! Catalog identifiers come from the backing document store and are opaque
//! strings; wrapping them prevents accidentally mixing them with other
//! string-typed fields such as names or image URLs.

use serde::{Deserialize, Serialize};

/// Identifier of a figurine in the catalog.
///
/// Unique within a cart: the cart holds at most one line item per ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FigurineId(String);

impl FigurineId {
    /// Create a new ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FigurineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FigurineId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FigurineId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<FigurineId> for String {
    fn from(id: FigurineId) -> Self {
        id.0
    }
}
