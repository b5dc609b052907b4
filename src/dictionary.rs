//! `dictionary` — Module to load the scored word list the anagram search runs against
//!
//! This module reads a dictionary either from a file or from an in-memory string and
//! produces a [`Dictionary`]: a flat list of [`ScoredWord`]s sorted by descending score.
//!
//! The parsing logic:
//! - Only the first `max_entries` lines are read (skipped lines count too).
//! - Each line is either `word:frequency` or a bare `word` (frequency 1).
//! - Empty lines are skipped silently.
//! - The frequency must be a positive integer; otherwise the line is rejected.
//! - Words are lower-cased and must then be made of a-z only; otherwise the line is rejected.
//! - Words shorter than `min_word_len` are dropped.
//! - The configured [`ScoringPolicy`] turns `(frequency, word)` into the score.
//! - Repeated words keep their first occurrence.
//! - The final list is stably sorted by descending score.
//!
//! Rejected lines are load-time data errors: each one is logged with its line number and
//! error code, counted in [`Dictionary::rejected`], and loading carries on.

use std::collections::HashSet;
use std::fmt;

use log::{debug, info, warn};

use crate::alphabet::first_non_letter;
use crate::errors::DictionaryError;
use crate::frequency_table::FrequencyTable;
use crate::scoring::ScoringPolicy;

/// Default number of lines read from a dictionary file.
pub const DEFAULT_MAX_ENTRIES: usize = 4000;
/// Default minimum word length; shorter words are dropped on load.
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// A dictionary entry: lowercase word text plus its precomputed score.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoredWord {
    text: String,
    score: i64,
}

impl ScoredWord {
    /// Validate `text` and pair it with `score`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::EmptyWord`] for empty text and
    /// [`DictionaryError::InvalidCharacter`] if any character is outside a-z.
    pub fn new(text: impl Into<String>, score: i64) -> Result<Self, DictionaryError> {
        let text = text.into();
        if text.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }
        if let Some(invalid_char) = first_non_letter(&text) {
            return Err(DictionaryError::InvalidCharacter { word: text, invalid_char });
        }
        Ok(Self { text, score })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        // a-z only, so bytes == chars
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.text, self.score)
    }
}

/// Loader settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Maximum number of lines read from the input.
    pub max_entries: usize,
    /// Words shorter than this are dropped.
    pub min_word_len: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self { max_entries: DEFAULT_MAX_ENTRIES, min_word_len: DEFAULT_MIN_WORD_LEN }
    }
}

/// A loaded dictionary, sorted by descending score.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<ScoredWord>,
    /// Number of lines rejected as malformed.
    pub rejected: usize,
}

/// Lines of a dictionary file that survive validation, the length filter and
/// first-occurrence dedup, in file order.
struct AcceptedEntries {
    entries: Vec<(String, u64)>,
    rejected: usize,
    too_short: usize,
}

impl AcceptedEntries {
    fn parse(contents: &str, config: &DictionaryConfig) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut accepted = AcceptedEntries { entries: Vec::new(), rejected: 0, too_short: 0 };

        for (line_no, raw_line) in contents.lines().take(config.max_entries).enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let (word, frequency) = match parse_dictionary_line(line) {
                Ok(parsed) => parsed,
                Err(e) => {
                    accepted.rejected += 1;
                    warn!("dictionary line {}: {} ({})", line_no + 1, e, e.code());
                    continue;
                }
            };

            if word.len() < config.min_word_len {
                accepted.too_short += 1;
                continue;
            }

            if !seen.insert(word.clone()) {
                debug!("dictionary line {}: duplicate word \"{}\" ignored", line_no + 1, word);
                continue;
            }

            accepted.entries.push((word, frequency));
        }

        accepted
    }
}

impl Dictionary {
    /// Build a dictionary from already-scored words, sorting them by descending score.
    ///
    /// A word that appears more than once keeps its first occurrence. Ties keep their
    /// input order.
    pub fn from_words(words: Vec<ScoredWord>) -> Self {
        let mut seen: HashSet<String> = HashSet::with_capacity(words.len());
        let mut words: Vec<ScoredWord> = words
            .into_iter()
            .filter(|w| {
                let first = seen.insert(w.text.clone());
                if !first {
                    debug!("duplicate word \"{}\" ignored", w.text);
                }
                first
            })
            .collect();
        words.sort_by_key(|w| std::cmp::Reverse(w.score));
        Self { words, rejected: 0 }
    }

    /// Parse a dictionary from an in-memory string.
    ///
    /// # Arguments
    /// * `contents` — The raw file contents. Each line should be `word:frequency` or `word`.
    /// * `config`   — Line cap and minimum word length.
    /// * `policy`   — Converts `(frequency, word)` into a score.
    pub fn parse_from_str(
        contents: &str,
        config: &DictionaryConfig,
        policy: &dyn ScoringPolicy,
    ) -> Dictionary {
        let accepted = AcceptedEntries::parse(contents, config);

        let words = accepted
            .entries
            .into_iter()
            .map(|(text, frequency)| {
                let score = policy.score(frequency, &text);
                ScoredWord { text, score }
            })
            .collect();

        let mut dictionary = Dictionary::from_words(words);
        dictionary.rejected = accepted.rejected;

        info!(
            "Loaded {} dictionary words ({} lines rejected, {} too short)",
            dictionary.len(),
            accepted.rejected,
            accepted.too_short
        );
        dictionary
    }

    /// Read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`. Malformed lines
    /// inside the file are not errors.
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        config: &DictionaryConfig,
        policy: &dyn ScoringPolicy,
    ) -> std::io::Result<Dictionary> {
        let data = read_dictionary_file(path.as_ref())?;
        Ok(Self::parse_from_str(&data, config, policy))
    }

    /// The frequency table of exactly the entries [`parse_from_str`](Self::parse_from_str)
    /// would keep from `contents`: bare words count 1 and repeated words keep their first
    /// frequency. This is the signal corpus for log-odds scoring of the same file.
    pub fn signal_table_from_str(contents: &str, config: &DictionaryConfig) -> FrequencyTable {
        let mut table = FrequencyTable::default();
        for (word, frequency) in AcceptedEntries::parse(contents, config).entries {
            table.add(word, frequency);
        }
        table
    }

    /// Read from a file path and build the signal table.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_signal_table<P: AsRef<std::path::Path>>(
        path: P,
        config: &DictionaryConfig,
    ) -> std::io::Result<FrequencyTable> {
        let data = read_dictionary_file(path.as_ref())?;
        Ok(Self::signal_table_from_str(&data, config))
    }

    /// The words, highest score first.
    pub fn words(&self) -> &[ScoredWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn read_dictionary_file(path: &std::path::Path) -> std::io::Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("failed to read dictionary from '{}': {}", path.display(), e),
        )
    })
}

/// Split one trimmed, non-empty line into a validated lowercase word and its frequency.
fn parse_dictionary_line(line: &str) -> Result<(String, u64), DictionaryError> {
    let (word_raw, frequency) = match line.split_once(':') {
        Some((word_raw, frequency_raw)) => {
            let frequency_raw = frequency_raw.trim();
            let frequency: i64 = frequency_raw.parse().map_err(|_| {
                DictionaryError::InvalidFrequency { value: frequency_raw.to_string() }
            })?;
            (word_raw, frequency)
        }
        // bare entry
        None => (line, 1),
    };

    let word = word_raw.trim().to_lowercase();
    if word.is_empty() {
        return Err(DictionaryError::EmptyWord);
    }
    if let Some(invalid_char) = first_non_letter(&word) {
        return Err(DictionaryError::InvalidCharacter { word, invalid_char });
    }
    if frequency <= 0 {
        return Err(DictionaryError::NonPositiveFrequency { word, frequency });
    }

    Ok((word, frequency.unsigned_abs()))
}
