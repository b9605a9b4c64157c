//! Core domain types for the word game
//!
//! Pure letter arithmetic and normalization with no knowledge of dictionaries
//! or game state.

mod letters;
mod word;

pub use letters::{LetterCounts, can_form};
pub use word::{RootWord, RootWordError, normalize};
