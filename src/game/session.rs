//! Game session state
//!
//! A session holds one root word, the words accepted so far (most recent
//! first) and the two score counters. Submitting a word never mutates a
//! session in place; it returns the session that follows.

use crate::core::{RootWord, normalize};
use crate::rules::{Dictionary, Rejection, Rules, Verdict, validate};
use crate::scoring;

/// What happened to a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The word was accepted and scored
    Accepted {
        word: String,
        /// Points the word contributed before doubling
        points: u64,
        /// Total score after accepting the word
        total: u64,
    },
    /// Blank input; nothing to report
    Ignored,
    /// The word failed a check; the session is unchanged
    Rejected(Rejection),
}

impl Outcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// A submission's outcome together with the session that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub session: GameSession,
    pub outcome: Outcome,
}

/// Snapshot of a game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    root: RootWord,
    used_words: Vec<String>,
    word_score: u32,
    total_score: u64,
}

impl GameSession {
    /// Start a fresh session with empty history and zero scores
    #[must_use]
    pub const fn new(root: RootWord) -> Self {
        Self {
            root,
            used_words: Vec::new(),
            word_score: 0,
            total_score: 0,
        }
    }

    /// The root word bounding this session
    #[must_use]
    pub const fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Number of words accepted so far (the scoring ordinal)
    #[must_use]
    pub const fn word_score(&self) -> u32 {
        self.word_score
    }

    /// Cumulative points
    #[must_use]
    pub const fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Submit raw player input
    ///
    /// The text is normalized, validated against this session and, when
    /// accepted, scored and prepended to the history of the returned session.
    /// Rejected and blank input leave the returned session equal to `self`.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    /// use word_scramble::game::{GameSession, Outcome};
    /// use word_scramble::rules::{Rules, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::new("en", ["silent", "listen"]);
    /// let session = GameSession::new(RootWord::new("listen").unwrap());
    ///
    /// let next = session.submit(" Silent ", &dictionary, &Rules::default());
    /// assert!(next.outcome.is_accepted());
    /// assert_eq!(next.session.used_words(), ["silent"]);
    /// assert_eq!(next.session.total_score(), 6);
    /// ```
    #[must_use]
    pub fn submit<D>(&self, raw: &str, dictionary: &D, rules: &Rules) -> Submission
    where
        D: Dictionary + ?Sized,
    {
        let answer = normalize(raw);
        let verdict = validate(
            &answer,
            self.root.text(),
            self.used_words(),
            dictionary,
            rules,
        );
        tracing::debug!(word = %answer, root = %self.root, ?verdict, "validated submission");

        match verdict {
            Verdict::Accepted => self.accept(answer),
            Verdict::Empty => self.unchanged(Outcome::Ignored),
            Verdict::Rejected(reason) => self.unchanged(Outcome::Rejected(reason)),
        }
    }

    fn accept(&self, word: String) -> Submission {
        let letters = word.chars().count();
        let word_score = self.word_score.saturating_add(1);
        let points = scoring::word_points(letters, word_score);
        let total_score = scoring::score(letters, word_score, self.total_score);

        let mut used_words = Vec::with_capacity(self.used_words.len() + 1);
        used_words.push(word.clone());
        used_words.extend(self.used_words.iter().cloned());

        Submission {
            session: Self {
                root: self.root.clone(),
                used_words,
                word_score,
                total_score,
            },
            outcome: Outcome::Accepted {
                word,
                points,
                total: total_score,
            },
        }
    }

    fn unchanged(&self, outcome: Outcome) -> Submission {
        Submission {
            session: self.clone(),
            outcome,
        }
    }
}
