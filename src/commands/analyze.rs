//! Root word analysis command
//!
//! Finds every dictionary word that would be accepted for a root word and
//! the best total score reachable with them.

use crate::core::RootWord;
use crate::rules::{Rules, Verdict, WordListDictionary, validate};
use crate::scoring::best_total;
use rayon::prelude::*;

/// Result of analyzing a root word
pub struct AnalysisResult {
    pub root: String,
    /// Acceptable words, longest first then alphabetical
    pub words: Vec<String>,
    pub best_total: u64,
    pub dictionary_size: usize,
}

/// Analyze a root word against the dictionary
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn analyze_root(
    root: &str,
    dictionary: &WordListDictionary,
    rules: &Rules,
) -> Result<AnalysisResult, String> {
    let root = RootWord::new(root).map_err(|e| format!("Invalid root word: {e}"))?;
    let no_history: &[&str] = &[];

    let candidates: Vec<&str> = dictionary.words().collect();
    let mut words: Vec<String> = candidates
        .par_iter()
        .filter(|&&word| {
            validate(word, root.text(), no_history, dictionary, rules) == Verdict::Accepted
        })
        .map(|&word| word.to_string())
        .collect();

    words.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let lengths: Vec<usize> = words.iter().map(|w| w.chars().count()).collect();

    Ok(AnalysisResult {
        root: root.text().to_string(),
        best_total: best_total(&lengths),
        words,
        dictionary_size: dictionary.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new(
            "en",
            ["listen", "silent", "tinsel", "nest", "lit", "is", "dog", "lisle"],
        )
    }

    #[test]
    fn finds_acceptable_words() {
        let result = analyze_root("listen", &dictionary(), &Rules::default()).unwrap();

        assert_eq!(result.root, "listen");
        assert_eq!(result.words, vec!["silent", "tinsel", "nest", "lit"]);
        assert_eq!(result.dictionary_size, 8);
    }

    #[test]
    fn best_total_uses_all_words() {
        let result = analyze_root("listen", &dictionary(), &Rules::default()).unwrap();

        // 6 -> 6, 6 -> 24, 4 -> 60, 3 -> 132
        assert_eq!(result.best_total, 132);
    }

    #[test]
    fn root_is_normalized() {
        let result = analyze_root("  LISTEN ", &dictionary(), &Rules::default()).unwrap();
        assert_eq!(result.root, "listen");
    }

    #[test]
    fn blank_root_is_an_error() {
        assert!(analyze_root(" ", &dictionary(), &Rules::default()).is_err());
    }

    #[test]
    fn rules_limit_results() {
        let rules = Rules::default().with_min_length(4);
        let result = analyze_root("listen", &dictionary(), &rules).unwrap();
        assert_eq!(result.words, vec!["silent", "tinsel"]);
    }

    #[test]
    fn embedded_start_words_have_answers() {
        let dictionary = WordListDictionary::embedded("en");

        for &root in crate::wordlists::START_WORDS {
            let result = analyze_root(root, &dictionary, &Rules::default()).unwrap();
            assert!(!result.words.is_empty(), "No words can be made from '{root}'");
        }
    }
}
