//! A single named character pool.

use serde::{Deserialize, Serialize};

/// A named pool of characters, optionally mandatory in the output.
///
/// Pools are used byte by byte and are never deduplicated; a repeated
/// character is proportionally more likely to be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharGroup {
    /// Diagnostic name, used in error messages and reports.
    pub name: String,
    /// The group's character pool.
    pub chars: String,
    /// Whether at least one character of this group must appear.
    #[serde(default)]
    pub required: bool,
}

impl CharGroup {
    /// Creates a group.
    pub fn new(name: impl Into<String>, chars: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            chars: chars.into(),
            required,
        }
    }

    /// Creates a group that must be represented in the output.
    pub fn required(name: impl Into<String>, chars: impl Into<String>) -> Self {
        Self::new(name, chars, true)
    }

    /// Creates a group that only contributes to the filler pool.
    pub fn optional(name: impl Into<String>, chars: impl Into<String>) -> Self {
        Self::new(name, chars, false)
    }

    /// Returns the pool as bytes, the unit selection works in.
    #[inline]
    pub fn pool(&self) -> &[u8] {
        self.chars.as_bytes()
    }

    /// Returns the pool size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the pool is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns true if `byte` is in this group's pool.
    pub fn contains(&self, byte: u8) -> bool {
        self.pool().contains(&byte)
    }
}
