//! Word Scramble
//!
//! An anagram word game: spell as many words as you can from the letters of
//! a root word. Words must be real, longer than two letters, new, and not the
//! root word itself.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use word_scramble::game::{Game, Outcome};
//! use word_scramble::rules::{Rejection, Rules, WordListDictionary};
//!
//! let dictionary = WordListDictionary::new("en", ["listen", "silent", "tinsel"]);
//! let mut game = Game::new(
//!     dictionary,
//!     vec!["listen".to_string()],
//!     Rules::default(),
//!     StdRng::seed_from_u64(1),
//! )
//! .unwrap();
//!
//! assert!(game.submit("silent").is_accepted());
//! assert_eq!(game.submit("silent"), Outcome::Rejected(Rejection::DuplicateSubmission));
//! assert_eq!(game.session().total_score(), 6);
//! ```

// Core domain types
pub mod core;

// Dictionary capability and validation pipeline
pub mod rules;

// Score calculation
pub mod scoring;

// Game session and engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
