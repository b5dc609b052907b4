//! Scoring policies: turn a word's corpus frequency into the weight the search ranks by.
//!
//! The search engine only ever sums scores, so every length or rarity bonus has
//! to be baked in here. Policies are plain values handed to the dictionary
//! loader, which keeps them swappable and testable without running a search.
//!
//! Two policies are provided:
//! - [`LengthCubed`] (default): `frequency × length³`, which strongly favors
//!   longer words.
//! - [`LogOdds`]: how much more often a word shows up in a "signal" corpus than
//!   in a "background" corpus, as a scaled natural log.

use crate::frequency_table::FrequencyTable;

/// Fixed-point scale applied to log-odds scores before rounding.
pub const LOG_ODDS_SCALE: f64 = 1_000_000.0;

/// A pure function from `(frequency, word)` to a score.
pub trait ScoringPolicy {
    fn score(&self, frequency: u64, word: &str) -> i64;
}

/// `frequency × len³`, saturating at `i64::MAX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthCubed;

impl ScoringPolicy for LengthCubed {
    fn score(&self, frequency: u64, word: &str) -> i64 {
        let len = i64::try_from(word.chars().count()).unwrap_or(i64::MAX);
        let frequency = i64::try_from(frequency).unwrap_or(i64::MAX);
        frequency
            .saturating_mul(len)
            .saturating_mul(len)
            .saturating_mul(len)
    }
}

/// Log-odds of a word in a signal corpus against a background corpus.
///
/// With `f_s`/`N_s` the word's count and total in the signal corpus and
/// `f_b`/`N_b` the same for the background corpus:
///
/// - word in background: `round(1e6 × ln((f_s / N_s) / (f_b / N_b)))`
/// - word not in background: `round(1e6 × ln((f_s / N_s) × N_b))`
///
/// The frequency passed to [`score`](ScoringPolicy::score) is `f_s`; only the
/// signal total is kept from the signal table.
#[derive(Debug, Clone)]
pub struct LogOdds {
    signal_total: u64,
    background: FrequencyTable,
}

impl LogOdds {
    pub fn new(signal: &FrequencyTable, background: FrequencyTable) -> Self {
        Self { signal_total: signal.total(), background }
    }

    /// Build directly from a signal-corpus total.
    pub fn with_signal_total(signal_total: u64, background: FrequencyTable) -> Self {
        Self { signal_total, background }
    }

    fn log_odds(&self, frequency: u64, word: &str) -> f64 {
        let signal_rate = frequency as f64 / self.signal_total.max(1) as f64;
        let background_total = self.background.total() as f64;

        match self.background.get(word) {
            Some(background_count) => {
                let background_rate = background_count as f64 / background_total;
                (signal_rate / background_rate).ln()
            }
            None => (signal_rate * background_total).ln(),
        }
    }
}

impl ScoringPolicy for LogOdds {
    fn score(&self, frequency: u64, word: &str) -> i64 {
        let scaled = (LOG_ODDS_SCALE * self.log_odds(frequency, word)).round();
        // `as` saturates for out-of-range floats; ln(0) = -inf lands on i64::MIN
        scaled as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_cubed() {
        assert_eq!(LengthCubed.score(1, "cat"), 27);
        assert_eq!(LengthCubed.score(10, "cat"), 270);
        assert_eq!(LengthCubed.score(2, "dogs"), 128);
    }

    #[test]
    fn test_length_cubed_favors_longer_words() {
        assert!(LengthCubed.score(1, "anagram") > LengthCubed.score(10, "cat"));
    }

    #[test]
    fn test_length_cubed_saturates() {
        assert_eq!(LengthCubed.score(u64::MAX, "cat"), i64::MAX);
    }

    fn tables() -> (FrequencyTable, FrequencyTable) {
        let signal = FrequencyTable::parse_from_str("cat:10\ndog:30\nyeet:60");
        let background = FrequencyTable::parse_from_str("cat:50\ndog:50\nthe:900");
        (signal, background)
    }

    #[test]
    fn test_log_odds_word_in_background() {
        let (signal, background) = tables();
        let policy = LogOdds::new(&signal, background);

        // (10/100) / (50/1000) = 2
        let expected = (LOG_ODDS_SCALE * 2f64.ln()).round() as i64;
        assert_eq!(policy.score(10, "cat"), expected);
        assert_eq!(policy.score(10, "cat"), 693_147);
    }

    #[test]
    fn test_log_odds_word_absent_from_background() {
        let (signal, background) = tables();
        let policy = LogOdds::new(&signal, background);

        // (60/100) * 1000 = 600
        let expected = (LOG_ODDS_SCALE * 600f64.ln()).round() as i64;
        assert_eq!(policy.score(60, "yeet"), expected);
    }

    #[test]
    fn test_log_odds_rarer_in_signal_is_negative() {
        let signal = FrequencyTable::parse_from_str("the:1\ncat:99");
        let background = FrequencyTable::parse_from_str("the:900\ncat:100");
        let policy = LogOdds::new(&signal, background);

        assert!(policy.score(1, "the") < 0);
        assert!(policy.score(99, "cat") > 0);
    }

    #[test]
    fn test_log_odds_with_signal_total() {
        let (signal, background) = tables();
        let a = LogOdds::new(&signal, background.clone());
        let b = LogOdds::with_signal_total(100, background);
        assert_eq!(a.score(30, "dog"), b.score(30, "dog"));
    }

    #[test]
    fn test_policies_are_interchangeable() {
        let (signal, background) = tables();
        let policies: Vec<Box<dyn ScoringPolicy>> =
            vec![Box::new(LengthCubed), Box::new(LogOdds::new(&signal, background))];
        for policy in &policies {
            // more signal frequency never lowers the score
            assert!(policy.score(20, "dog") >= policy.score(10, "dog"));
        }
    }
}
