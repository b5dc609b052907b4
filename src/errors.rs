//! Error types for dictionary loading and letter bookkeeping, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - D001: `EmptyWord` (Dictionary line has no word)
//! - D002: `InvalidCharacter` (Word contains a character outside a-z)
//! - D003: `InvalidFrequency` (Frequency field is not an integer)
//! - D004: `NonPositiveFrequency` (Frequency is zero or negative)
//! - D005: `MissingSeparator` (Frequency-table line has no ':' separator)
//! - L001: `InvalidStateError` (Letter removed from a bag that does not hold it)
//!
//! Search-level errors (S-codes) live next to the engine in [`crate::search`].
//!
//! # Examples
//!
//! ```
//! use anagrammer::errors::DictionaryError;
//!
//! let err = DictionaryError::InvalidFrequency { value: "lots".to_string() };
//! assert_eq!(err.code(), "D003");
//! println!("{}", err.display_detailed());
//! ```

/// A dictionary or frequency-table line that cannot become an entry.
///
/// These are load-time data errors: the loader logs them, drops the line and
/// keeps going. They never reach the search engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error("Empty word in dictionary line")]
    EmptyWord,

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only a-z allowed)")]
    InvalidCharacter { word: String, invalid_char: char },

    #[error("Invalid frequency \"{value}\"")]
    InvalidFrequency { value: String },

    #[error("Non-positive frequency {frequency} for word \"{word}\"")]
    NonPositiveFrequency { word: String, frequency: i64 },

    #[error("Missing ':' separator in \"{line}\"")]
    MissingSeparator { line: String },
}

impl DictionaryError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryError::EmptyWord => "D001",
            DictionaryError::InvalidCharacter { .. } => "D002",
            DictionaryError::InvalidFrequency { .. } => "D003",
            DictionaryError::NonPositiveFrequency { .. } => "D004",
            DictionaryError::MissingSeparator { .. } => "D005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryError::EmptyWord => "Dictionary line has no word",
            DictionaryError::InvalidCharacter { .. } => "Word contains a character outside a-z",
            DictionaryError::InvalidFrequency { .. } => "Frequency field is not an integer",
            DictionaryError::NonPositiveFrequency { .. } => "Frequency is zero or negative",
            DictionaryError::MissingSeparator { .. } => "Frequency-table line has no ':' separator",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            DictionaryError::EmptyWord => "A line of the form `:123` was found. The line is skipped and loading continues.",
            DictionaryError::InvalidCharacter { .. } => "Words are lower-cased on load and must then consist only of the letters a-z. Digits, punctuation and accented letters cannot be matched against a phrase, so the line is skipped.",
            DictionaryError::InvalidFrequency { .. } => "The text after the ':' separator could not be parsed as an integer. The line is skipped.",
            DictionaryError::NonPositiveFrequency { .. } => "Frequencies count occurrences in a corpus and must be at least 1. The line is skipped.",
            DictionaryError::MissingSeparator { .. } => "Corpus frequency tables require a count on every line. (Dictionaries accept bare words with an implied frequency of 1; frequency tables do not.) The line is skipped.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            DictionaryError::EmptyWord => Some("Each line should look like 'word:frequency' or just 'word'"),
            DictionaryError::InvalidCharacter { .. } => Some("Remove or respell entries that contain digits, punctuation or accents"),
            DictionaryError::InvalidFrequency { .. } => Some("Expected format: word:frequency (e.g., 'cat:42')"),
            DictionaryError::NonPositiveFrequency { .. } => Some("Use a frequency of 1 or more, or drop the entry"),
            DictionaryError::MissingSeparator { .. } => Some("Expected format: word:count (e.g., 'cat:42')"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// A letter was removed from a [`LetterBag`](crate::letter_bag::LetterBag) that does not hold it.
///
/// Every call site checks membership first, so this signals a bug rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot remove '{letter}' from letter bag \"{remaining}\"")]
pub struct InvalidStateError {
    pub letter: char,
    /// Remaining letters (sorted) at the time of the failed removal
    pub remaining: String,
}

impl InvalidStateError {
    /// Returns the error code for this error
    #[must_use]
    pub fn code(&self) -> &'static str {
        "L001"
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        "Letter removed from a bag that does not hold it"
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        "The search engine only removes letters it has already checked for. Seeing this error means that check and the removal disagree, which is a bug in the engine."
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        Some("This is an internal error. Please report the phrase and dictionary that triggered it.")
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
