//! Letter multiset matching
//!
//! Decides whether a candidate can be spelled from the letters of a source
//! word, where each letter of the source may be used at most once.

use rustc_hash::FxHashMap;

/// Check whether `candidate` can be formed from the letters of `source`
///
/// Every character of the candidate consumes one matching occurrence from a
/// working copy of the source. A letter appearing twice in the candidate
/// therefore needs at least two occurrences in the source. Both inputs are
/// expected to be normalized already; matching is exact per `char`.
///
/// # Examples
/// ```
/// use word_scramble::core::can_form;
///
/// assert!(can_form("silent", "listen"));
/// assert!(can_form("", "anything"));
/// assert!(!can_form("sees", "rest"));
/// ```
#[must_use]
pub fn can_form(candidate: &str, source: &str) -> bool {
    let mut available: Vec<char> = source.chars().collect();

    for letter in candidate.chars() {
        match available.iter().position(|&c| c == letter) {
            Some(pos) => {
                available.swap_remove(pos);
            }
            None => return false,
        }
    }

    true
}

/// Per-character letter counts of a word
///
/// Used for bulk checks (such as scanning a whole dictionary against one
/// root word) where the source counts are built once and reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, u32>,
}

impl LetterCounts {
    /// Count the letters of a word
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many times `letter` occurs
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters counted
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().map(|&n| n as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True if every letter of `other` is available here with enough multiplicity
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other
            .counts
            .iter()
            .all(|(&letter, &needed)| self.count(letter) >= needed)
    }

    /// Check a candidate word directly against these counts
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        self.contains(&Self::of(candidate))
    }
}
