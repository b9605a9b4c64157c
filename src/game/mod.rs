//! Game state and the engine that drives it
//!
//! `GameSession` is an immutable value; every submission produces the next
//! value. `Game` owns the collaborators (dictionary, word pool, rules) and
//! the current session.

mod engine;
mod session;

pub use engine::{DEFAULT_FALLBACK_ROOT, Game, GameError};
pub use session::{GameSession, Outcome, Submission};
