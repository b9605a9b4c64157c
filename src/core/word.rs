//! Word normalization and the root word type
//!
//! Player input and word-list entries are compared only after normalization:
//! surrounding whitespace is trimmed and the text is lowercased.

use std::fmt;
use thiserror::Error;

/// Normalize raw text into the form used for every comparison
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silent\n"), "silent");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RootWordError {
    #[error("Root word must contain at least one letter")]
    Empty,
}

/// The word whose letters bound every valid submission in a session
///
/// Always normalized and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord(String);

impl RootWord {
    /// Create a root word from raw text
    ///
    /// # Errors
    /// Returns `RootWordError::Empty` if nothing is left after normalization.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new(" SilkWorm ").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("\n").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, RootWordError> {
        let text = normalize(raw);
        if text.is_empty() {
            return Err(RootWordError::Empty);
        }
        Ok(Self(text))
    }

    /// Get the root word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Number of letters in the root word
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
