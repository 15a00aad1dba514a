//! Group-aware character selection and the final shuffle.
//!
//! Selection draws one character per required group, then fills the rest
//! of the output from the union pool. The shuffle then permutes the result
//! with the same generator, continuing its stream.

mod selector;
mod shuffle;

pub use selector::select;
pub use shuffle::shuffle;

use crate::alphabet::AlphabetError;
use thiserror::Error;

/// Errors that can occur during selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The char set failed validation.
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),

    /// Fewer positions than required groups.
    #[error("output length {requested} is too short; must be at least {minimum}")]
    LengthTooShort {
        /// Requested output length.
        requested: usize,
        /// Number of required groups.
        minimum: usize,
    },
}
