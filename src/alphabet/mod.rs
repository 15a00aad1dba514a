//! Character groups and the alphabet they form.
//!
//! A [`CharSet`] is an ordered list of [`CharGroup`]s. Group order matters:
//! it fixes the order of the required draws and the layout of the union
//! pool used for filler draws.

mod charset;
mod group;

pub use charset::CharSet;
pub use group::CharGroup;

use thiserror::Error;

/// Alphabet validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// A required group has an empty pool.
    #[error("required group {name:?} has no characters")]
    EmptyRequiredGroup {
        /// Name of the offending group.
        name: String,
    },

    /// No group contributes any character.
    #[error("no characters available: union of all groups is empty")]
    EmptyUnion,

    /// The union pool is larger than a 32-bit draw can index.
    #[error("union of all groups has {len} characters; at most {max} are supported")]
    UnionTooLarge {
        /// Union size in bytes.
        len: usize,
        /// Largest supported union size.
        max: usize,
    },
}
