//! Per-group coverage of a derived string.

use crate::alphabet::CharSet;
use std::fmt;

/// How many output bytes fall in one group's pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCoverage {
    /// Group name.
    pub name: String,
    /// Whether the group is required.
    pub required: bool,
    /// Output bytes found in the group's pool.
    pub hits: usize,
}

/// Coverage of an output against a char set.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Per-group results, in configuration order.
    pub groups: Vec<GroupCoverage>,
    /// Output length in bytes.
    pub length: usize,
    /// Union pool size in bytes.
    pub union_len: usize,
}

impl CoverageReport {
    /// Analyzes `output` against `charset`.
    ///
    /// A byte that appears in several pools counts toward each of them.
    pub fn analyze(charset: &CharSet, output: &[u8]) -> Self {
        let groups = charset
            .groups
            .iter()
            .map(|group| GroupCoverage {
                name: group.name.clone(),
                required: group.required,
                hits: output.iter().filter(|&&b| group.contains(b)).count(),
            })
            .collect();

        Self {
            groups,
            length: output.len(),
            union_len: charset.union_len(),
        }
    }

    /// Required groups with no character in the output.
    pub fn missing_required(&self) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|g| g.required && g.hits == 0)
            .map(|g| g.name.as_str())
            .collect()
    }

    /// Returns true if every required group is represented.
    pub fn covers_required(&self) -> bool {
        self.groups.iter().all(|g| !g.required || g.hits > 0)
    }

    /// Upper bound on output strength: `length * log2(union_len)`.
    ///
    /// The real figure is lower: outputs are limited to the 2^32 seeds,
    /// and modulo reduction is slightly biased.
    pub fn estimated_bits(&self) -> f64 {
        if self.union_len < 2 {
            return 0.0;
        }
        self.length as f64 * (self.union_len as f64).log2()
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "length {} over {} characters (~{:.1} bits max)",
            self.length,
            self.union_len,
            self.estimated_bits()
        )?;
        for group in &self.groups {
            let marker = if group.required { "*" } else { " " };
            writeln!(f, "  {} {:<16} {}", marker, group.name, group.hits)?;
        }
        Ok(())
    }
}
