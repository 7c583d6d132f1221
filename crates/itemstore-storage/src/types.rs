//! Record types for stored items.
//!
//! [`ItemId`] is an opaque string key. IDs minted by the store are the decimal
//! rendering of its counter, but lookups accept any string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored item.
///
/// Serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    /// Renders a counter value as an ID.
    pub fn from_counter(n: u64) -> Self {
        ItemId(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}

/// A stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier, immutable after creation.
    pub id: ItemId,
    /// Caller-supplied name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_with_string_id() {
        let item = Item {
            id: ItemId::from_counter(1),
            name: "pen".into(),
        };
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"id":"1","name":"pen"}"#
        );
    }

    #[test]
    fn counter_ids_are_decimal() {
        assert_eq!(ItemId::from_counter(42).as_str(), "42");
        assert_eq!(ItemId::from_counter(u64::MAX).to_string(), u64::MAX.to_string());
    }
}
