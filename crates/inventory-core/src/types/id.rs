//! Opaque identifier for inventory items.
//!
//! Store variants allocate identifiers differently (the PostgreSQL store
//! hands out auto-increment integers, the in-memory store timestamp
//! strings), so the rest of the service treats an id as an opaque string.
//! On the wire it is always a JSON string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the identifier as a serial (auto-increment) key.
    ///
    /// Returns `None` if the identifier is not a decimal integer, which for
    /// a serial-keyed store simply means "no such item".
    pub fn as_serial(&self) -> Option<i64> {
        self.0.trim().parse::<i64>().ok()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<i64> for ItemId {
    fn from(serial: i64) -> Self {
        Self(serial.to_string())
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> String {
        id.0
    }
}
