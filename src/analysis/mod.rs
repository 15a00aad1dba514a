//! Output inspection.
//!
//! Reports how a derived string covers the configured groups. These are
//! descriptive checks on one output, not statements about the generator.

mod coverage;

pub use coverage::{CoverageReport, GroupCoverage};
