//! Platform-independent xorshift32 generator.
//!
//! Uses the 13/17/5 shift triple with wrapping `u32` arithmetic, so every
//! implementation seeded with the same value produces the same stream.
//!
//! # Bias
//!
//! Bounded draws reduce the raw output modulo the bound. For bounds that
//! are not powers of two, lower values are very slightly favoured. This is
//! part of the output contract: changing the reduction would change every
//! derived string.

use super::Draw;
use crate::seed::Seed;
use rand_core::{impls, RngCore};

/// Deterministic xorshift32 generator.
///
/// Not cryptographically secure. It exists for bit-exact reproducibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Creates a generator from a raw seed.
    ///
    /// A zero seed is remapped to 1, since xorshift never leaves the all-zero
    /// state.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Creates a generator from a derived [`Seed`].
    pub fn from_seed(seed: Seed) -> Self {
        Self::new(seed.as_u32())
    }

    /// Advances the generator and returns the new state.
    #[inline]
    pub fn step(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns `step() % bound`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero or does not fit in a `u32`.
    pub fn bounded(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bounded draw from an empty range");
        let bound = u32::try_from(bound).unwrap_or_else(|_| {
            panic!("bounded draw range {bound} exceeds u32::MAX");
        });

        (self.step() % bound) as usize
    }

    /// Returns the current internal state.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Draw for Xorshift32 {
    #[inline]
    fn draw(&mut self, bound: usize) -> usize {
        self.bounded(bound)
    }
}

impl RngCore for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
