//! SHA-256 based seed derivation.
//!
//! The seed is the first four bytes of the SHA-256 digest of the input,
//! read as a big-endian `u32`. Other implementations reproduce the same
//! seed from the same bytes, which is what keeps outputs portable.

use sha2::{Digest, Sha256};

/// Number of digest bytes folded into the seed.
const SEED_BYTES: usize = 4;

/// A 32-bit generator seed derived from input bytes.
///
/// The raw value is deliberately kept out of `Debug` output so seeds do
/// not end up in logs next to the strings derived from them.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Seed(u32);

impl Seed {
    /// Derives the seed for the given input.
    pub fn from_input(input: &[u8]) -> Self {
        let digest = Sha256::digest(input);

        let mut prefix = [0u8; SEED_BYTES];
        prefix.copy_from_slice(&digest[..SEED_BYTES]);

        Self(u32::from_be_bytes(prefix))
    }

    /// Returns the raw seed value.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seed").finish_non_exhaustive()
    }
}

/// Maps input bytes to a 32-bit seed.
///
/// Pure and infallible for every input, including the empty slice.
pub fn derive_seed(input: &[u8]) -> u32 {
    Seed::from_input(input).as_u32()
}
