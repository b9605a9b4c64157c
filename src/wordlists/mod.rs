//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, plus loading of
//! replacement lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_not_empty() {
        // A game cannot begin without at least one root word
        assert!(!START_WORDS.is_empty());
    }

    #[test]
    fn lists_are_normalized() {
        for &word in START_WORDS.iter().chain(DICTIONARY) {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for word in START_WORDS {
            assert!(
                dictionary.contains(word),
                "Start word '{word}' not in dictionary"
            );
        }
    }
}
