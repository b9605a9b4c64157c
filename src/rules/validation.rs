//! Validation pipeline
//!
//! Runs the acceptance checks in a fixed order and reports the first one
//! that fails:
//!
//! 1. empty input (ignored silently)
//! 2. originality (not already submitted)
//! 3. feasibility (formable from the root's letters)
//! 4. recognition (dictionary says it is a word)
//! 5. minimum length
//! 6. non-identity with the root word
//!
//! The order decides which message the player sees and must not change.

use super::{Dictionary, Rules};
use crate::core::can_form;
use thiserror::Error;

/// Why a submission was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("word has already been submitted")]
    DuplicateSubmission,
    #[error("word cannot be spelled from the root word's letters")]
    NotFormable,
    #[error("word is not recognized by the dictionary")]
    NotAWord,
    #[error("word is too short")]
    TooShort,
    #[error("word is the root word itself")]
    IsRootWord,
}

impl Rejection {
    /// Alert title shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::DuplicateSubmission => "Word used already",
            Self::NotFormable => "Word not possible",
            Self::NotAWord => "Word not recognised",
            Self::TooShort => "Word too small",
            Self::IsRootWord => "Duplicate",
        }
    }

    /// Alert body shown to the player
    #[must_use]
    pub fn message(self, root: &str) -> String {
        match self {
            Self::DuplicateSubmission => "Be more original".to_string(),
            Self::NotFormable => format!("You can't spell that word from {root}!"),
            Self::NotAWord => "You can't just make them up".to_string(),
            Self::TooShort => "You can't just add small words".to_string(),
            Self::IsRootWord => "This is the word you were given".to_string(),
        }
    }
}

/// Result of running a candidate through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Passed every check
    Accepted,
    /// Nothing was entered; no feedback needed
    Empty,
    /// Failed the given check
    Rejected(Rejection),
}

impl Verdict {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Validate an already-normalized candidate
///
/// `history` holds the words accepted so far in the session. The function is
/// pure: the dictionary is only queried, never modified.
///
/// # Examples
/// ```
/// use word_scramble::rules::{Rejection, Rules, Verdict, WordListDictionary, validate};
///
/// let dictionary = WordListDictionary::new("en", ["silent", "listen", "dog"]);
/// let rules = Rules::default();
/// let history = ["tinsel"];
///
/// assert_eq!(validate("silent", "listen", &history, &dictionary, &rules), Verdict::Accepted);
/// assert_eq!(
///     validate("dog", "listen", &history, &dictionary, &rules),
///     Verdict::Rejected(Rejection::NotFormable)
/// );
/// ```
pub fn validate<S, D>(
    candidate: &str,
    root: &str,
    history: &[S],
    dictionary: &D,
    rules: &Rules,
) -> Verdict
where
    S: AsRef<str>,
    D: Dictionary + ?Sized,
{
    if candidate.is_empty() {
        return Verdict::Empty;
    }

    if history.iter().any(|used| used.as_ref() == candidate) {
        return Verdict::Rejected(Rejection::DuplicateSubmission);
    }

    if !can_form(candidate, root) {
        return Verdict::Rejected(Rejection::NotFormable);
    }

    if !dictionary.is_recognized(candidate, &rules.language) {
        return Verdict::Rejected(Rejection::NotAWord);
    }

    if candidate.chars().count() <= rules.min_length {
        return Verdict::Rejected(Rejection::TooShort);
    }

    if candidate == root {
        return Verdict::Rejected(Rejection::IsRootWord);
    }

    Verdict::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::WordListDictionary;
    use std::cell::Cell;

    const NO_HISTORY: &[&str] = &[];

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new(
            "en",
            ["listen", "silent", "tinsel", "lit", "is", "cat", "dog", "act"],
        )
    }

    /// Accepts everything and counts lookups
    struct CountingDictionary {
        lookups: Cell<usize>,
    }

    impl Dictionary for CountingDictionary {
        fn is_recognized(&self, _word: &str, _language: &str) -> bool {
            self.lookups.set(self.lookups.get() + 1);
            true
        }
    }

    #[test]
    fn anagram_is_accepted() {
        let verdict = validate("silent", "listen", NO_HISTORY, &dictionary(), &Rules::default());
        assert_eq!(verdict, Verdict::Accepted);
        assert!(verdict.is_accepted());
    }

    #[test]
    fn empty_is_ignored() {
        let verdict = validate("", "listen", NO_HISTORY, &dictionary(), &Rules::default());
        assert_eq!(verdict, Verdict::Empty);
    }

    #[test]
    fn duplicate_is_rejected() {
        let verdict = validate("silent", "listen", &["silent"], &dictionary(), &Rules::default());
        assert_eq!(verdict, Verdict::Rejected(Rejection::DuplicateSubmission));
    }

    #[test]
    fn originality_is_checked_before_feasibility() {
        // "dog" cannot be spelled from "cat" but was somehow recorded already
        let verdict = validate("dog", "cat", &["dog"], &dictionary(), &Rules::default());
        assert_eq!(verdict, Verdict::Rejected(Rejection::DuplicateSubmission));
    }

    #[test]
    fn unformable_is_rejected() {
        let verdict = validate("dog", "cat", NO_HISTORY, &dictionary(), &Rules::default());
        assert_eq!(verdict, Verdict::Rejected(Rejection::NotFormable));
    }

    #[test]
    fn feasibility_is_checked_before_dictionary() {
        let counting = CountingDictionary {
            lookups: Cell::new(0),
        };
        let verdict = validate("dog", "cat", NO_HISTORY, &counting, &Rules::default());
        assert_eq!(verdict, Verdict::Rejected(Rejection::NotFormable));
        assert_eq!(counting.lookups.get(), 0);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let verdict = validate("enlist", "listen", NO_HISTORY, &dictionary(), &Rules::default());
        assert_eq!(verdict, Verdict::Rejected(Rejection::NotAWord));
    }

    #[test]
    fn dictionary_is_checked_before_length() {
        // "ts" is formable and short, but unknown words report NotAWord first
        let verdict = validate("ts", "listen", NO_HISTORY, &dictionary(), &Rules::default());
        assert_eq!(verdict, Verdict::Rejected(Rejection::NotAWord));
    }

    #[test]
    fn short_word_is_rejected() {
        let verdict = validate("is", "listen", NO_HISTORY, &dictionary(), &Rules::default());
        assert_eq!(verdict, Verdict::Rejected(Rejection::TooShort));
    }

    #[test]
    fn length_threshold_is_strict() {
        // Three letters clears the default threshold of two
        let rules = Rules::default();
        assert_eq!(validate("lit", "listen", NO_HISTORY, &dictionary(), &rules), Verdict::Accepted);

        let rules = Rules::default().with_min_length(3);
        assert_eq!(
            validate("lit", "listen", NO_HISTORY, &dictionary(), &rules),
            Verdict::Rejected(Rejection::TooShort)
        );
    }

    #[test]
    fn root_word_is_rejected() {
        let verdict = validate("listen", "listen", NO_HISTORY, &dictionary(), &Rules::default());
        assert_eq!(verdict, Verdict::Rejected(Rejection::IsRootWord));
    }

    #[test]
    fn length_is_checked_before_root_identity() {
        let dictionary = WordListDictionary::new("en", ["at"]);
        let verdict = validate("at", "at", NO_HISTORY, &dictionary, &Rules::default());
        assert_eq!(verdict, Verdict::Rejected(Rejection::TooShort));
    }

    #[test]
    fn dictionary_is_checked_before_root_identity() {
        // "xyzzyx" is the root but not a word the dictionary knows
        let verdict = validate("xyzzyx", "xyzzyx", NO_HISTORY, &dictionary(), &Rules::default());
        assert_eq!(verdict, Verdict::Rejected(Rejection::NotAWord));
    }

    #[test]
    fn language_is_passed_to_dictionary() {
        let rules = Rules::default().with_language("fr");
        let verdict = validate("silent", "listen", NO_HISTORY, &dictionary(), &rules);
        assert_eq!(verdict, Verdict::Rejected(Rejection::NotAWord));
    }

    #[test]
    fn history_accepts_owned_strings() {
        let history = vec!["tinsel".to_string()];
        let verdict = validate("tinsel", "listen", history.as_slice(), &dictionary(), &Rules::default());
        assert_eq!(verdict, Verdict::Rejected(Rejection::DuplicateSubmission));
    }

    #[test]
    fn rejection_titles_and_messages() {
        assert_eq!(Rejection::DuplicateSubmission.title(), "Word used already");
        assert_eq!(Rejection::NotAWord.title(), "Word not recognised");
        assert_eq!(
            Rejection::NotFormable.message("cat"),
            "You can't spell that word from cat!"
        );
        assert_eq!(Rejection::IsRootWord.message("cat"), "This is the word you were given");
    }
}
