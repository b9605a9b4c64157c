//! Score calculation
//!
//! Each accepted word is worth `letters × ordinal`, where the ordinal is the
//! 1-based count of words accepted so far. The running total is doubled
//! before the new points are added:
//!
//! ```text
//! new_total = current_total + current_total + letters × ordinal
//! ```
//!
//! The doubling makes totals escalate quickly. It is long-standing game
//! behavior and is kept as is. Arithmetic saturates at `u64::MAX`.

/// Points a single word contributes before the running total is doubled
///
/// # Examples
/// ```
/// use word_scramble::scoring::word_points;
///
/// assert_eq!(word_points(5, 1), 5);
/// assert_eq!(word_points(3, 2), 6);
/// ```
#[inline]
#[must_use]
pub const fn word_points(letter_count: usize, word_ordinal: u32) -> u64 {
    (letter_count as u64).saturating_mul(word_ordinal as u64)
}

/// New total score after accepting a word
///
/// `word_ordinal` must already include the word being scored (1 for the
/// first accepted word of a session).
///
/// # Examples
/// ```
/// use word_scramble::scoring::score;
///
/// let first = score(5, 1, 0);
/// assert_eq!(first, 5);
///
/// let second = score(3, 2, first);
/// assert_eq!(second, 16);
/// ```
#[inline]
#[must_use]
pub const fn score(letter_count: usize, word_ordinal: u32, current_total: u64) -> u64 {
    current_total
        .saturating_add(current_total)
        .saturating_add(word_points(letter_count, word_ordinal))
}

/// Highest total reachable by accepting every word in `lengths`
///
/// Early words are doubled by every later acceptance, which outweighs the
/// larger ordinal of later words, so the total is maximized by submitting
/// the longest words first.
#[must_use]
pub fn best_total(lengths: &[usize]) -> u64 {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    sorted
        .iter()
        .zip(1u32..)
        .fold(0, |total, (&letters, ordinal)| score(letters, ordinal, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_word_scores_its_length() {
        assert_eq!(score(5, 1, 0), 5);
        assert_eq!(score(3, 1, 0), 3);
    }

    #[test]
    fn total_is_doubled_before_adding() {
        assert_eq!(score(3, 2, 5), 16);
        assert_eq!(score(4, 3, 16), 44);
    }

    #[test]
    fn word_points_multiplies_by_ordinal() {
        assert_eq!(word_points(6, 4), 24);
        assert_eq!(word_points(0, 9), 0);
    }

    #[test]
    fn score_saturates_instead_of_overflowing() {
        assert_eq!(score(8, 70, u64::MAX / 2 + 1), u64::MAX);
        assert_eq!(score(usize::MAX, u32::MAX, 0), u64::MAX);
    }

    #[test]
    fn best_total_submits_longest_first() {
        // 5 -> 5, 4 -> 10 + 8 = 18, 3 -> 36 + 9 = 45
        assert_eq!(best_total(&[3, 4, 5]), 45);
        assert_eq!(best_total(&[5, 3, 4]), 45);
        assert_eq!(best_total(&[]), 0);
    }

    #[test]
    fn descending_beats_ascending() {
        let ascending = score(5, 3, score(4, 2, score(3, 1, 0)));
        assert_eq!(ascending, 43);
        assert!(best_total(&[3, 4, 5]) > ascending);
    }
}
