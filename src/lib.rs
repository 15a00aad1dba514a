//! Deterministic String Derivation Library
//!
//! Derives a fixed-length string over a configurable alphabet from
//! arbitrary input bytes. The same input and configuration always give
//! the same output, on every platform, and every required character group
//! is represented.
//!
//! # Architecture
//!
//! The pipeline runs in one direction, with a single generator threaded
//! through the last two stages:
//!
//! ```text
//! input → seed (SHA-256) → generator (xorshift32)
//!                              ↓
//!             alphabet → selection → shuffle → output
//! ```
//!
//! # Design Principles
//!
//! - **Reproducible**: bit-exact arithmetic and a fixed draw order
//! - **Fail early**: invalid configurations are rejected before any draw
//! - **No hidden state**: nothing persists between calls
//! - **Not a CSPRNG**: outputs are only as unpredictable as the input
//!
//! # Example
//!
//! ```
//! use dgen::{encode, CharGroup, CharSet, Configuration};
//!
//! let config = Configuration::new(
//!     CharSet::new(vec![
//!         CharGroup::required("vowels", "aeiou"),
//!         CharGroup::required("consonants", "bcdfghjklmnpqrstvwxyz"),
//!         CharGroup::optional("numbers", "0123456789"),
//!     ]),
//!     10,
//! );
//!
//! let output = encode(b"custom-test", &config).unwrap();
//! assert_eq!(output.len(), 10);
//! assert_eq!(output, encode(b"custom-test", &config).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod alphabet;
pub mod analysis;
pub mod config;
pub mod encoder;
pub mod generator;
pub mod seed;
pub mod selection;

// Re-export commonly used types at crate root
pub use alphabet::{AlphabetError, CharGroup, CharSet};
pub use analysis::CoverageReport;
pub use config::{ConfigError, Configuration};
pub use encoder::{encode, EncodeError, Encoder};
pub use generator::{Draw, Xorshift32};
pub use seed::{derive_seed, Seed};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
