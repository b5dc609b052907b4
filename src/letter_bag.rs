//! `letter_bag` — counted multiset of the letters still available to a search branch.
//!
//! A `LetterBag` maps each letter to how many copies remain and caches the total
//! number of letters (duplicates included). The total is what every length check
//! in the search compares against, so it must never be confused with the number
//! of *distinct* letters.
//!
//! Invariants:
//! - every stored count is > 0 (a letter that runs out is removed from the map)
//! - `size()` always equals the sum of the stored counts
//! - removing a letter the bag does not hold is an [`InvalidStateError`]
//!
//! Forking is a plain `clone()`: each search branch owns its own bag, so
//! sibling branches never observe each other's removals.

use std::collections::HashMap;
use std::fmt;

use crate::alphabet::normalize_phrase;
use crate::errors::InvalidStateError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: HashMap<char, usize>,
    total: usize,
}

impl LetterBag {
    /// An empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the bag for a phrase: lower-case it, strip whitespace, count what's left.
    ///
    /// ```
    /// use anagrammer::letter_bag::LetterBag;
    ///
    /// let bag = LetterBag::from_phrase("Dog Cat");
    /// assert_eq!(bag.size(), 6);
    /// assert!(bag.contains('d'));
    /// assert!(!bag.contains(' '));
    /// ```
    pub fn from_phrase(phrase: &str) -> Self {
        let mut bag = Self::new();
        for c in normalize_phrase(phrase).chars() {
            bag.increment(c);
        }
        bag
    }

    /// Add one copy of `letter`.
    pub fn increment(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
        self.total += 1;
    }

    /// Remove one copy of `letter`, dropping the key when its count reaches zero.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if `letter` is not in the bag. When the search
    /// removes a word it has already filtered as viable, an error here means its
    /// bookkeeping is wrong.
    pub fn decrement(&mut self, letter: char) -> Result<(), InvalidStateError> {
        let Some(count) = self.counts.get_mut(&letter) else {
            return Err(InvalidStateError { letter, remaining: self.to_string() });
        };

        debug_assert!(*count > 0, "letter bag stored a zero count for '{letter}'");
        *count -= 1;
        if *count == 0 {
            self.counts.remove(&letter);
        }
        self.total -= 1;

        debug_assert_eq!(
            self.total,
            self.counts.values().sum::<usize>(),
            "cached total must equal the sum of counts"
        );
        Ok(())
    }

    /// Whether at least one copy of `letter` remains.
    pub fn contains(&self, letter: char) -> bool {
        self.counts.contains_key(&letter)
    }

    /// How many copies of `letter` remain (0 if none).
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters remaining, counting duplicates.
    pub fn size(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Independent copy of this bag; mutating the fork never affects `self`.
    #[must_use]
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Remove every letter of `word`, one at a time.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] at the first letter the bag runs out of.
    /// Letters removed before that point stay removed, so only call this on a
    /// bag you own (normally a fresh fork).
    pub fn remove_word(&mut self, word: &str) -> Result<(), InvalidStateError> {
        for c in word.chars() {
            self.decrement(c)?;
        }
        Ok(())
    }

    /// The bag left over after spelling `word`, or `None` if `word` cannot be
    /// spelled from this bag. `self` is never modified.
    ///
    /// Words longer than the bag are rejected before any letter is checked.
    pub fn without_word(&self, word: &str) -> Option<Self> {
        if word.chars().count() > self.total {
            return None;
        }

        let mut fork = self.fork();
        for c in word.chars() {
            // on the fork, a missing letter only means `word` is not spellable
            if let Err(missing) = fork.decrement(c) {
                log::trace!("\"{word}\" not spellable: {missing}");
                return None;
            }
        }
        Some(fork)
    }

    /// Whether `word` can be spelled from the letters in this bag.
    pub fn can_spell(&self, word: &str) -> bool {
        self.without_word(word).is_some()
    }
}

impl FromIterator<char> for LetterBag {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut bag = Self::new();
        for c in iter {
            bag.increment(c);
        }
        bag
    }
}

/// Renders the remaining letters in sorted order, duplicates repeated (e.g. `acdgot`).
impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(char, usize)> = self.counts.iter().map(|(&c, &n)| (c, n)).collect();
        letters.sort_unstable_by_key(|&(c, _)| c);
        for (c, n) in letters {
            for _ in 0..n {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
