//! Formatting utilities for terminal output

/// Circled number badge for a word length (①..⑳), `(n)` beyond that
#[must_use]
pub fn length_badge(len: usize) -> String {
    match u32::try_from(len) {
        Ok(n @ 1..=20) => {
            char::from_u32(0x2460 + n - 1).map_or_else(|| format!("({len})"), String::from)
        }
        _ => format!("({len})"),
    }
}

/// A word with its length badge
#[must_use]
pub fn badged_word(word: &str) -> String {
    format!("{} {word}", length_badge(word.chars().count()))
}

/// Spread the letters of a word out for display as a title
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
