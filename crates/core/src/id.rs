//! Identifiers assigned by a record store.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a stored record.
///
/// Ids are minted by the owning store from a monotonically increasing
/// counter starting at 1 and carried as the decimal string form
/// ("1", "2", ...). Lookups compare the raw string exactly: no trimming,
/// no normalization, so "01" and " 1" never match "1".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Id for position `n` in a store's assignment sequence.
    pub fn from_sequence(n: u64) -> Self {
        Self(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
