//! Word list loading utilities
//!
//! Word lists are newline-delimited text. Entries are normalized, blank
//! lines are skipped and repeated entries are kept only once.

use crate::core::normalize;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word list sources
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list {} is unavailable: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::ResourceUnavailable` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse newline-delimited text into normalized, de-duplicated words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Listen\n\nsilent\r\nlisten\n");
/// assert_eq!(words, vec!["listen", "silent"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();

    content
        .lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|&s| normalize(s))
        .filter(|word| !word.is_empty())
        .collect()
}
