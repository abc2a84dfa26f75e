//! # Identity Value Objects
//!
//! Type-safe identity wrapper for the stock aggregate.
//!
//! The newtype prevents accidental mixing with other UUID-valued fields
//! and keeps identity generation in one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stock aggregate identifier.
///
/// A UUID-based identifier uniquely identifying a stock within the
/// system. Freshly generated at use-case execution time; persisted and
/// surfaced unchanged by the repository.
///
/// # Examples
///
/// ```
/// use stock_registry::domain::value_objects::StockId;
///
/// let id = StockId::new_v4();
/// assert!(!id.is_nil());
/// println!("stock: {}", id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockId(Uuid);

impl StockId {
    /// Creates a stock ID from an existing UUID.
    #[inline]
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generates a new random stock ID using UUID v4.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Uuid {
        self.0
    }

    /// Returns true if this is the nil UUID.
    ///
    /// Nil IDs are rejected by the aggregate's persistence-boundary
    /// constructor.
    #[inline]
    #[must_use]
    pub fn is_nil(self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for StockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for StockId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<StockId> for Uuid {
    #[inline]
    fn from(id: StockId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_v4_generates_unique_ids() {
        let a = StockId::new_v4();
        let b = StockId::new_v4();
        assert_ne!(a, b);
    }

    #[test]
    fn nil_detection() {
        let nil = StockId::new(Uuid::nil());
        assert!(nil.is_nil());
        assert!(!StockId::new_v4().is_nil());
    }

    #[test]
    fn display_is_hyphenated_uuid() {
        let id = StockId::new_v4();
        let shown = id.to_string();
        assert_eq!(shown.len(), 36);
        assert_eq!(shown, id.get().hyphenated().to_string());
    }

    #[test]
    fn serde_is_transparent() {
        let id = StockId::new_v4();
        let json = serde_json::to_string(&id).unwrap();
        let uuid_json = serde_json::to_string(&id.get()).unwrap();
        assert_eq!(json, uuid_json);
    }
}
