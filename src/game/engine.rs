//! Main game interface

use super::session::{GameSession, Outcome};
use crate::core::{RootWord, RootWordError};
use crate::rules::{Dictionary, Rules};
use crate::wordlists::loader::WordListError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Root word used when the word pool is empty
pub const DEFAULT_FALLBACK_ROOT: &str = "silkworm";

/// Errors that stop a game from starting
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no root word available: word list is empty and no fallback is configured")]
    ResourceUnavailable,
    #[error(transparent)]
    WordList(#[from] WordListError),
    #[error("invalid root word: {0}")]
    InvalidRoot(#[from] RootWordError),
}

/// Main game engine
///
/// Owns the dictionary, the pool of root words, the rules and the random
/// source used to pick a root word. Submissions are processed one at a time
/// through `&mut self`.
pub struct Game<D: Dictionary, R: Rng> {
    dictionary: D,
    start_words: Vec<RootWord>,
    fallback_root: Option<String>,
    rules: Rules,
    rng: R,
    session: GameSession,
}

impl<D: Dictionary, R: Rng> Game<D, R> {
    /// Create a game and start its first session
    ///
    /// # Parameters
    /// - `dictionary`: Spell-check oracle used by the recognition check
    /// - `start_words`: Pool the root word is drawn from; blank entries are dropped
    /// - `rules`: Minimum length and dictionary language
    /// - `rng`: Random source for root selection
    ///
    /// # Errors
    ///
    /// Returns `GameError::ResourceUnavailable` if the pool is empty and no
    /// fallback root is configured.
    pub fn new(
        dictionary: D,
        start_words: Vec<String>,
        rules: Rules,
        rng: R,
    ) -> Result<Self, GameError> {
        Self::with_fallback(
            dictionary,
            start_words,
            Some(DEFAULT_FALLBACK_ROOT.to_string()),
            rules,
            rng,
        )
    }

    /// Like `new`, with an explicit fallback root (or none)
    ///
    /// # Errors
    ///
    /// Returns `GameError::ResourceUnavailable` if no root word can be chosen,
    /// or `GameError::InvalidRoot` if the fallback is blank.
    pub fn with_fallback(
        dictionary: D,
        start_words: Vec<String>,
        fallback_root: Option<String>,
        rules: Rules,
        mut rng: R,
    ) -> Result<Self, GameError> {
        let start_words: Vec<RootWord> = start_words
            .into_iter()
            .filter_map(|word| RootWord::new(&word).ok())
            .collect();

        let root = choose_root(&start_words, fallback_root.as_deref(), &mut rng)?;
        tracing::info!(root = %root, pool = start_words.len(), "new game");

        Ok(Self {
            dictionary,
            start_words,
            fallback_root,
            rules,
            rng,
            session: GameSession::new(root),
        })
    }

    /// Discard the current session and start a new one with a fresh root word
    ///
    /// # Errors
    ///
    /// Returns `GameError::ResourceUnavailable` if no root word can be chosen.
    /// The current session is kept in that case.
    pub fn start_game(&mut self) -> Result<&GameSession, GameError> {
        let root = choose_root(
            &self.start_words,
            self.fallback_root.as_deref(),
            &mut self.rng,
        )?;
        tracing::info!(root = %root, "new game");

        self.session = GameSession::new(root);
        Ok(&self.session)
    }

    /// Submit raw player input to the current session
    pub fn submit(&mut self, raw: &str) -> Outcome {
        let submission = self.session.submit(raw, &self.dictionary, &self.rules);

        if let Outcome::Accepted { word, total, .. } = &submission.outcome {
            tracing::info!(%word, total, "word accepted");
        }

        self.session = submission.session;
        submission.outcome
    }

    /// Current session state
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Pool of root words new sessions are drawn from
    pub fn start_words(&self) -> &[RootWord] {
        &self.start_words
    }
}

/// Pick a root word uniformly from the pool, or the fallback if the pool is empty
fn choose_root<R: Rng>(
    start_words: &[RootWord],
    fallback: Option<&str>,
    rng: &mut R,
) -> Result<RootWord, GameError> {
    if let Some(word) = start_words.choose(rng) {
        return Ok(word.clone());
    }

    match fallback {
        Some(word) => {
            tracing::warn!(fallback = word, "word list is empty, using fallback root word");
            Ok(RootWord::new(word)?)
        }
        None => Err(GameError::ResourceUnavailable),
    }
}
