//! Alternative - one candidate option being ranked.

use serde::{Deserialize, Serialize};

/// A candidate option: an opaque identifier plus a display label.
///
/// Identifier uniqueness is an invariant of the containing matrix, not of
/// this value itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub label: String,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
