//! The fixed lowercase alphabet the search operates on, and phrase normalization.

use std::ops::RangeInclusive;

pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';
#[cfg(test)]
pub(crate) const ALPHABET_SIZE: usize = 26;

/// Whether `c` belongs to the search alphabet (`a`–`z`).
pub fn is_letter(c: char) -> bool {
    LOWERCASE_ALPHABET.contains(&c)
}

/// Lower-case `phrase` and drop every whitespace character.
///
/// Anything else (digits, punctuation) is kept as-is; such characters can never
/// be consumed by a dictionary word, so a phrase containing them has no anagrams.
///
/// ```
/// use anagrammer::alphabet::normalize_phrase;
///
/// assert_eq!(normalize_phrase("Dog  Cat"), "dogcat");
/// ```
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Return the first character of `word` outside the alphabet, if any.
pub(crate) fn first_non_letter(word: &str) -> Option<char> {
    word.chars().find(|&c| !is_letter(c))
}
