//! Seed derivation from input bytes.
//!
//! This module maps arbitrary seed material onto the 32-bit value that
//! initializes the deterministic generator. SHA-256 is used only to spread
//! the input uniformly over the seed space, not for secrecy.

mod hash;

pub use hash::{derive_seed, Seed};
