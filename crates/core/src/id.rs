//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one polling sequence (first `pending` to a terminal outcome).
///
/// A fresh id is minted every time a sequence is rearmed, so log lines of
/// consecutive simulated jobs can be told apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceId(Uuid);

impl SequenceId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered), so later sequences sort after earlier ones.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SequenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SequenceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
