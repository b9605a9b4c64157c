//! Dictionary capability
//!
//! The game never decides on its own whether a string is a real word; it
//! asks a `Dictionary`. Hosts can plug in any spell-checker, and tests use
//! small in-memory word lists.

use crate::core::normalize;
use crate::wordlists::loader::{WordListError, load_from_file};
use rustc_hash::FxHashSet;
use std::path::Path;

/// A spell-check oracle
pub trait Dictionary {
    /// Report whether `word` is a recognized word in `language`
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized(word, language)
    }
}

/// Dictionary backed by an in-memory word list for a single language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from a list of words
    ///
    /// Entries are normalized; blank entries are skipped.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// Dictionary built from the word list compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use word_scramble::rules::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::embedded("en");
    /// assert!(dictionary.is_recognized("silent", "en"));
    /// assert!(!dictionary.is_recognized("xyzzy", "en"));
    /// ```
    #[must_use]
    pub fn embedded(language: impl Into<String>) -> Self {
        Self::new(language, crate::wordlists::DICTIONARY.iter().copied())
    }

    /// Load a newline-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns `WordListError::ResourceUnavailable` if the file cannot be read.
    pub fn from_file(
        language: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, WordListError> {
        let words = load_from_file(path)?;
        Ok(Self::new(language, words))
    }

    /// Language this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of distinct words known
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every known word (unordered)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordListDictionary {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        // Region subtags ("en-GB") fall back to the primary language
        let primary = language.split(['-', '_']).next().unwrap_or(language);
        let ours = self.language.split(['-', '_']).next().unwrap_or(self.language.as_str());

        primary.eq_ignore_ascii_case(ours) && self.words.contains(word)
    }
}
