//! `frequency_table` — corpus word counts read from a `word:count` table.
//!
//! Used by the log-odds scoring policy, which needs both per-word counts and the
//! corpus total for a "signal" and a "background" corpus.
//!
//! The parsing logic:
//! - Each line is expected to be `word:count`.
//! - Empty lines are skipped silently.
//! - Lines without a `:`, with an unparseable or non-positive count, or with a
//!   word outside a-z are skipped and logged at `warn`.
//! - Words are lower-cased; repeated words accumulate their counts.
//! - The total is the sum of every accepted count.

use std::collections::HashMap;

use log::{debug, warn};

use crate::alphabet::first_non_letter;
use crate::errors::DictionaryError;

#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Parse a table from an in-memory string.
    pub fn parse_from_str(contents: &str) -> FrequencyTable {
        let mut table = FrequencyTable::default();
        let mut skipped = 0usize;

        for (line_no, raw_line) in contents.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_table_line(line) {
                Ok((word, count)) => table.add(word, count),
                Err(e) => {
                    skipped += 1;
                    warn!("frequency table line {}: {} ({})", line_no + 1, e, e.code());
                }
            }
        }

        debug!(
            "frequency table: {} words, total {}, {} lines skipped",
            table.len(),
            table.total,
            skipped
        );
        table
    }

    /// Read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<FrequencyTable> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read frequency table from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// Add `count` occurrences of `word`.
    pub fn add(&mut self, word: String, count: u64) {
        *self.counts.entry(word).or_insert(0) += count;
        self.total += count;
    }

    /// Count for `word`, if it occurs in the corpus.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Sum of all counts (the corpus size `N`).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

fn parse_table_line(line: &str) -> Result<(String, u64), DictionaryError> {
    let Some((word_raw, count_raw)) = line.split_once(':') else {
        return Err(DictionaryError::MissingSeparator { line: line.to_string() });
    };

    let word = word_raw.trim().to_lowercase();
    if word.is_empty() {
        return Err(DictionaryError::EmptyWord);
    }
    if let Some(invalid_char) = first_non_letter(&word) {
        return Err(DictionaryError::InvalidCharacter { word, invalid_char });
    }

    let count_raw = count_raw.trim();
    let count: i64 = count_raw
        .parse()
        .map_err(|_| DictionaryError::InvalidFrequency { value: count_raw.to_string() })?;
    if count <= 0 {
        return Err(DictionaryError::NonPositiveFrequency { word, frequency: count });
    }

    Ok((word, count.unsigned_abs()))
}
