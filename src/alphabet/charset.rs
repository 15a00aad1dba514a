//! Ordered collection of character groups.

use super::{AlphabetError, CharGroup};
use serde::{Deserialize, Serialize};

const LOWERCASE: &str = "abcdefghijkmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
const DIGITS: &str = "123456789";
const SPECIAL: &str = "!@#$%^&*()-_=+[]{};:,.<>/?";

/// Largest union a bounded draw can index.
const MAX_UNION_LEN: usize = u32::MAX as usize;

/// An ordered set of character groups.
///
/// `Default` yields [`CharSet::standard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharSet {
    /// Groups in draw order.
    pub groups: Vec<CharGroup>,
}

impl CharSet {
    /// Creates a char set from groups, in the given order.
    pub fn new(groups: Vec<CharGroup>) -> Self {
        Self { groups }
    }

    /// The standard alphabet: four required groups with visually
    /// ambiguous characters (`l`, `I`, `O`, `0`) left out.
    pub fn standard() -> Self {
        Self::new(vec![
            CharGroup::required("lowercase", LOWERCASE),
            CharGroup::required("uppercase", UPPERCASE),
            CharGroup::required("digits", DIGITS),
            CharGroup::required("special", SPECIAL),
        ])
    }

    /// Checks that every required group has characters and that the
    /// union is non-empty and indexable by a 32-bit draw.
    ///
    /// The first offending required group, in configuration order, is
    /// reported.
    pub fn validate(&self) -> Result<(), AlphabetError> {
        if let Some(group) = self.groups.iter().find(|g| g.required && g.is_empty()) {
            return Err(AlphabetError::EmptyRequiredGroup {
                name: group.name.clone(),
            });
        }

        check_union_len(self.union_len())
    }

    /// Iterates over the required groups in order.
    pub fn required_groups(&self) -> impl Iterator<Item = &CharGroup> {
        self.groups.iter().filter(|g| g.required)
    }

    /// Number of required groups, which is also the minimum output length.
    pub fn required_count(&self) -> usize {
        self.required_groups().count()
    }

    /// Concatenates every group's pool in configuration order.
    pub fn union(&self) -> Vec<u8> {
        let mut union = Vec::with_capacity(self.union_len());
        for group in &self.groups {
            union.extend_from_slice(group.pool());
        }
        union
    }

    /// Size of the union pool in bytes.
    pub fn union_len(&self) -> usize {
        self.groups.iter().map(CharGroup::len).sum()
    }

    /// Looks up a group by name.
    pub fn group(&self, name: &str) -> Option<&CharGroup> {
        self.groups.iter().find(|g| g.name == name)
    }
}

/// Group pools are never larger than the union, so bounding the union
/// keeps every draw within `u32`.
fn check_union_len(len: usize) -> Result<(), AlphabetError> {
    if len == 0 {
        return Err(AlphabetError::EmptyUnion);
    }
    if len > MAX_UNION_LEN {
        return Err(AlphabetError::UnionTooLarge {
            len,
            max: MAX_UNION_LEN,
        });
    }
    Ok(())
}

impl Default for CharSet {
    fn default() -> Self {
        Self::standard()
    }
}
