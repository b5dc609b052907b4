//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `DictionaryError`, `InvalidStateError` and `SearchError` via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use anagrammer::errors::{DictionaryError, InvalidStateError};
use anagrammer::search::SearchError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn example_invalid_state() -> InvalidStateError {
    InvalidStateError { letter: 'q', remaining: "acdgot".to_string() }
}

/// One of each `DictionaryError` variant
fn all_dictionary_error_variants() -> Vec<DictionaryError> {
    vec![
        DictionaryError::EmptyWord,
        DictionaryError::InvalidCharacter { word: "don't".to_string(), invalid_char: '\'' },
        DictionaryError::InvalidFrequency { value: "lots".to_string() },
        DictionaryError::NonPositiveFrequency { word: "cat".to_string(), frequency: 0 },
        DictionaryError::MissingSeparator { line: "cat".to_string() },
    ]
}

fn all_search_error_variants() -> Vec<SearchError> {
    vec![SearchError::InvalidState(example_invalid_state())]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Search Errors (S001)](#search-errors)");
    println!("- [Letter Bag Errors (L001)](#letter-bag-errors)");
    println!("- [Dictionary Errors (D001–D005)](#dictionary-errors)\n");

    println!("## Search Errors\n");
    println!("Errors that abort a search. These indicate a bug in the engine, not bad input.\n");
    generate_error_docs!(all_search_error_variants());

    println!("## Letter Bag Errors\n");
    println!("Low-level bookkeeping errors, usually seen wrapped in a search error.\n");
    generate_error_docs!([example_invalid_state()]);

    println!("## Dictionary Errors\n");
    println!("Problems with individual dictionary or frequency-table lines. These are logged as warnings and the line is skipped; loading continues.\n");
    generate_error_docs!(all_dictionary_error_variants());

    println!("## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}
