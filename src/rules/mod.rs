//! Word acceptance rules
//!
//! The dictionary capability and the ordered validation pipeline that
//! decides whether a submission is accepted.

mod config;
pub mod dictionary;
mod validation;

pub use config::{DEFAULT_LANGUAGE, DEFAULT_MIN_LENGTH, Rules};
pub use dictionary::{Dictionary, WordListDictionary};
pub use validation::{Rejection, Verdict, validate};
