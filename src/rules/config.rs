//! Tunable rule settings

/// Words must be strictly longer than this many letters
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Locale tag passed to the dictionary
pub const DEFAULT_LANGUAGE: &str = "en";

/// Settings shared by every check in the validation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Submissions need strictly more letters than this
    pub min_length: usize,
    /// Language the dictionary is asked about
    pub language: String,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Rules {
    /// Override the minimum length threshold
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Override the dictionary language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
