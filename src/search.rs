//! The anagram search engine: every way to spell a phrase's letters as dictionary words.
//!
//! # Algorithm
//!
//! Depth-first branch-and-bound over the dictionary:
//!
//! 1. **Filter.** From the eligible window, keep the words that can be spelled from
//!    the remaining letters (multiplicity included). Words longer than the remaining
//!    letter count are skipped before their letters are checked.
//! 2. **Branch.** For each surviving word `w` at position `i` of the filtered list:
//!    - if `w` uses up exactly the remaining letters, `chosen + [w]` is a solution;
//!    - otherwise remove `w` from a fork of the letters and recurse with the window
//!      `filtered[i..]`.
//! 3. **Rank.** Once enumeration is done, stable-sort solutions by total score, highest first.
//!
//! Restricting each recursion to `filtered[i..]` means a combination of words is only
//! ever built in one order (ascending filtered index), so `dog cat` and `cat dog` can't
//! both show up. Starting at `i` rather than `i + 1` lets a word be reused when the
//! phrase holds its letters twice.
//!
//! Every branch owns its own [`LetterBag`] fork and its own [`Candidate`], so siblings
//! never observe each other's choices.
//!
//! # Error Handling
//!
//! The solver uses [`SearchError`] with one variant:
//!
//! - S001: `InvalidState` (Letter bookkeeping broke during the search (wraps [`InvalidStateError`]))
//!
//! Finding no anagrams is not an error: the result is an empty [`SolutionSet`].
//!
//! # Examples
//!
//! ```
//! use anagrammer::dictionary::ScoredWord;
//! use anagrammer::letter_bag::LetterBag;
//! use anagrammer::search;
//!
//! let words = vec![
//!     ScoredWord::new("dog", 5)?,
//!     ScoredWord::new("cat", 5)?,
//!     ScoredWord::new("tag", 4)?,
//! ];
//! let solutions = search::search(&words, &LetterBag::from_phrase("Dog Cat"))?;
//!
//! assert_eq!(solutions.len(), 1);
//! assert_eq!(solutions.iter().next().unwrap().to_string(), "dog cat");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::cmp::Reverse;
use std::fmt;

use log::{debug, info};

use crate::dictionary::ScoredWord;
use crate::errors::InvalidStateError;
use crate::letter_bag::LetterBag;

/// Unified error type for the search.
///
/// There is nothing unreliable on the search path (all inputs are in memory), so the
/// only failure is the engine contradicting itself.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A letter was removed from a branch's bag after the filter said it was there.
    #[error("invalid search state: {0}")]
    InvalidState(#[from] InvalidStateError),
}

impl SearchError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::InvalidState(_) => "S001",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SearchError::InvalidState(_) => "Letter bookkeeping broke during the search",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SearchError::InvalidState(_) => "A word that passed the availability filter could not be removed from the remaining letters. The search is aborted because its results can no longer be trusted. This wraps an InvalidStateError (L001).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SearchError::InvalidState(_) => None, // InvalidStateError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SearchError::InvalidState(e) => {
                format!("{}\n  caused by: {}", self.code(), e.display_detailed())
            }
        }
    }
}

/// An ordered sequence of words chosen so far, with their summed score.
///
/// Words appear in discovery order. A candidate handed to a deeper call is never
/// mutated; extending it makes a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    words: Vec<&'a ScoredWord>,
    score: i64,
}

impl<'a> Candidate<'a> {
    fn empty() -> Self {
        Self { words: Vec::new(), score: 0 }
    }

    /// A new candidate: this one plus `word` at the end.
    #[must_use]
    fn extended(&self, word: &'a ScoredWord) -> Self {
        let mut words = Vec::with_capacity(self.words.len() + 1);
        words.extend_from_slice(&self.words);
        words.push(word);
        Self { words, score: self.score.saturating_add(word.score()) }
    }

    pub fn words(&self) -> &[&'a ScoredWord] {
        &self.words
    }

    /// The word texts, in discovery order.
    pub fn texts(&self) -> Vec<&'a str> {
        self.words.iter().map(|&w| w.text()).collect()
    }

    /// Sum of the member words' scores.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total letters across all member words.
    pub fn letter_count(&self) -> usize {
        self.words.iter().map(|w| w.len()).sum()
    }

    /// All member letters as one bag.
    pub fn letters(&self) -> LetterBag {
        self.words.iter().flat_map(|w| w.text().chars()).collect()
    }
}

/// Words separated by single spaces.
impl fmt::Display for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word.text())?;
        }
        Ok(())
    }
}

/// Completed candidates, ranked by descending score (ties in discovery order).
#[derive(Debug, Clone, Default)]
pub struct SolutionSet<'a> {
    candidates: Vec<Candidate<'a>>,
    /// Number of search branches explored (including the root).
    pub branches_explored: usize,
}

impl<'a> SolutionSet<'a> {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate<'a>> {
        self.candidates.iter()
    }

    /// The best `n` solutions (or all of them, if there are fewer).
    pub fn top(&self, n: usize) -> &[Candidate<'a>] {
        &self.candidates[..n.min(self.candidates.len())]
    }

    pub fn as_slice(&self) -> &[Candidate<'a>] {
        &self.candidates
    }
}

impl<'a> IntoIterator for SolutionSet<'a> {
    type Item = Candidate<'a>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s SolutionSet<'a> {
    type Item = &'s Candidate<'a>;
    type IntoIter = std::slice::Iter<'s, Candidate<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// Accumulated results of one `search` call.
struct SearchCtx<'a> {
    solutions: Vec<Candidate<'a>>,
    branches_explored: usize,
}

/// Find every multiset of dictionary words whose letters are exactly `letters`, ranked.
///
/// `dictionary` should be sorted by descending score (as [`Dictionary`] does); the
/// order doesn't change which solutions are found, only which of several
/// equal-score solutions comes first.
///
/// [`Dictionary`]: crate::dictionary::Dictionary
///
/// # Errors
///
/// Returns [`SearchError::InvalidState`] only if the engine's own letter
/// bookkeeping is inconsistent. No solutions is `Ok` with an empty set.
pub fn search<'a>(
    dictionary: &'a [ScoredWord],
    letters: &LetterBag,
) -> Result<SolutionSet<'a>, SearchError> {
    let window: Vec<&ScoredWord> = dictionary.iter().collect();
    let mut ctx = SearchCtx { solutions: Vec::new(), branches_explored: 0 };

    search_branch(&window, letters, &Candidate::empty(), &mut ctx)?;

    let mut solutions = ctx.solutions;
    rank(&mut solutions);

    info!(
        "Found {} anagrams of \"{}\" ({} branches explored)",
        solutions.len(),
        letters,
        ctx.branches_explored
    );

    Ok(SolutionSet { candidates: solutions, branches_explored: ctx.branches_explored })
}

/// Words in `window` that can be spelled from `letters`, in window order.
fn filter_viable<'a>(window: &[&'a ScoredWord], letters: &LetterBag) -> Vec<&'a ScoredWord> {
    window
        .iter()
        .copied()
        .filter(|word| word.len() <= letters.size() && letters.can_spell(word.text()))
        .collect()
}

/// One level of the recursion: filter `window` against `letters`, then close out or
/// extend `chosen` with each surviving word.
fn search_branch<'a>(
    window: &[&'a ScoredWord],
    letters: &LetterBag,
    chosen: &Candidate<'a>,
    ctx: &mut SearchCtx<'a>,
) -> Result<(), SearchError> {
    ctx.branches_explored += 1;

    let filtered = filter_viable(window, letters);
    if chosen.is_empty() {
        debug!("{} of {} words fit in \"{}\"", filtered.len(), window.len(), letters);
    }

    for (i, &word) in filtered.iter().enumerate() {
        let candidate = chosen.extended(word);

        if word.len() == letters.size() {
            // the filter guarantees the letters match, so nothing is left over
            debug_assert!(letters.without_word(word.text()).is_some_and(|rest| rest.is_empty()));
            ctx.solutions.push(candidate);
            continue;
        }

        let mut remaining = letters.fork();
        remaining.remove_word(word.text())?;
        debug_assert_eq!(remaining.size(), letters.size() - word.len());

        // `filtered[i..]`, not `filtered[i + 1..]`: the same word may be used again
        search_branch(&filtered[i..], &remaining, &candidate, ctx)?;
    }

    Ok(())
}

/// Stable sort by descending total score.
fn rank(solutions: &mut [Candidate<'_>]) {
    solutions.sort_by_key(|c| Reverse(c.score()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn words(entries: &[(&str, i64)]) -> Vec<ScoredWord> {
        entries
            .iter()
            .map(|&(text, score)| ScoredWord::new(text, score).unwrap())
            .collect()
    }

    fn solve<'a>(dictionary: &'a [ScoredWord], phrase: &str) -> SolutionSet<'a> {
        search(dictionary, &LetterBag::from_phrase(phrase)).unwrap()
    }

    fn sorted_texts(candidate: &Candidate<'_>) -> Vec<String> {
        let mut texts: Vec<String> = candidate.texts().iter().map(|s| s.to_string()).collect();
        texts.sort();
        texts
    }

    mod basic {
        use super::*;

        #[test]
        fn test_exact_match() {
            let dictionary = words(&[("cat", 10)]);
            let solutions = solve(&dictionary, "cat");
            assert_eq!(solutions.len(), 1);
            assert_eq!(solutions.top(1)[0].texts(), vec!["cat"]);
            assert_eq!(solutions.top(1)[0].score(), 10);
        }

        #[test]
        fn test_two_word_split_appears_once() {
            let dictionary = words(&[("dog", 5), ("cat", 5), ("tag", 4)]);
            let solutions = solve(&dictionary, "dog cat");

            assert_eq!(solutions.len(), 1);
            assert_eq!(sorted_texts(&solutions.top(1)[0]), vec!["cat", "dog"]);
            assert_eq!(solutions.top(1)[0].score(), 10);
        }

        #[test]
        fn test_no_match_is_empty_not_error() {
            let dictionary = words(&[("cat", 1), ("dog", 1)]);
            let solutions = solve(&dictionary, "xyz");
            assert!(solutions.is_empty());
        }

        #[test]
        fn test_empty_dictionary() {
            let solutions = solve(&[], "cat");
            assert!(solutions.is_empty());
            assert_eq!(solutions.branches_explored, 1);
        }

        #[test]
        fn test_empty_phrase() {
            let dictionary = words(&[("cat", 1)]);
            assert!(solve(&dictionary, "  ").is_empty());
        }

        #[test]
        fn test_partial_use_is_not_a_solution() {
            // "cat" fits but leaves "s" unused
            let dictionary = words(&[("cat", 1)]);
            assert!(solve(&dictionary, "cats").is_empty());
        }

        #[test]
        fn test_longer_words_never_used() {
            let dictionary = words(&[("cats", 100), ("cat", 1)]);
            let solutions = solve(&dictionary, "tac");
            assert_eq!(solutions.len(), 1);
            assert_eq!(solutions.top(1)[0].texts(), vec!["cat"]);
        }
    }

    mod enumeration {
        use super::*;

        #[test]
        fn test_every_same_length_match_is_recorded() {
            // all three use exactly the remaining letters
            let dictionary = words(&[("act", 3), ("cat", 2), ("tac", 1)]);
            let solutions = solve(&dictionary, "cat");
            assert_eq!(solutions.len(), 3);
        }

        #[test]
        fn test_word_can_repeat_when_letters_allow() {
            let dictionary = words(&[("cat", 1)]);
            let solutions = solve(&dictionary, "cat cat");
            assert_eq!(solutions.len(), 1);
            assert_eq!(solutions.top(1)[0].texts(), vec!["cat", "cat"]);
        }

        #[test]
        fn test_word_cannot_repeat_beyond_letters() {
            let dictionary = words(&[("cat", 1), ("cats", 1)]);
            let solutions = solve(&dictionary, "cat");
            assert_eq!(solutions.len(), 1);
            assert_eq!(solutions.top(1)[0].len(), 1);
        }

        #[test]
        fn test_three_word_partitions_are_unique() {
            let dictionary = words(&[
                ("dog", 5), ("cat", 5), ("owl", 5),
                ("god", 4), ("act", 4), ("low", 4),
                ("cow", 3), ("lag", 1),
            ]);
            let solutions = solve(&dictionary, "dog cat owl");

            let mut seen = HashSet::new();
            for candidate in &solutions {
                assert!(seen.insert(sorted_texts(candidate)), "duplicate partition {candidate}");
                assert_eq!(candidate.letters(), LetterBag::from_phrase("dog cat owl"));
            }
            // {dog,god} x {cat,act} x {owl,low}
            assert_eq!(solutions.len(), 8);
        }

        #[test]
        fn test_mixed_word_lengths() {
            let dictionary = words(&[("listen", 6), ("silent", 6), ("lit", 1), ("sen", 1), ("ten", 1), ("sil", 1)]);
            let solutions = solve(&dictionary, "silent");
            let found: HashSet<Vec<String>> = solutions.iter().map(sorted_texts).collect();

            assert!(found.contains(&vec!["listen".to_string()]));
            assert!(found.contains(&vec!["silent".to_string()]));
            assert!(found.contains(&vec!["lit".to_string(), "sen".to_string()]));
            assert!(found.contains(&vec!["sil".to_string(), "ten".to_string()]));
            assert_eq!(solutions.len(), 4);
        }

        #[test]
        fn test_discovery_order_follows_dictionary_order() {
            let dictionary = words(&[("dog", 5), ("cat", 5)]);
            let solutions = solve(&dictionary, "catdog");
            assert_eq!(solutions.top(1)[0].texts(), vec!["dog", "cat"]);
        }
    }

    mod ranking {
        use super::*;

        #[test]
        fn test_ranked_by_descending_score() {
            let dictionary = words(&[("act", 1), ("cat", 30), ("tac", 20)]);
            let solutions = solve(&dictionary, "cat");
            let scores: Vec<i64> = solutions.iter().map(Candidate::score).collect();
            assert_eq!(scores, vec![30, 20, 1]);
        }

        #[test]
        fn test_score_is_sum_of_members() {
            let dictionary = words(&[("dog", 7), ("cat", -2)]);
            let solutions = solve(&dictionary, "dog cat");
            assert_eq!(solutions.top(1)[0].score(), 5);
        }

        #[test]
        fn test_ties_keep_discovery_order() {
            let dictionary = words(&[("act", 5), ("cat", 5), ("tac", 5)]);
            let solutions = solve(&dictionary, "cat");
            let texts: Vec<String> = solutions.iter().map(ToString::to_string).collect();
            assert_eq!(texts, vec!["act", "cat", "tac"]);
        }

        #[test]
        fn test_rank_is_stable() {
            let a = ScoredWord::new("aaa", 1).unwrap();
            let b = ScoredWord::new("bbb", 2).unwrap();
            let c = ScoredWord::new("ccc", 1).unwrap();
            let mut solutions = vec![
                Candidate::empty().extended(&a),
                Candidate::empty().extended(&b),
                Candidate::empty().extended(&c),
            ];
            rank(&mut solutions);
            let texts: Vec<String> = solutions.iter().map(ToString::to_string).collect();
            assert_eq!(texts, vec!["bbb", "aaa", "ccc"]);
        }

        #[test]
        fn test_top_clamps_to_len() {
            let dictionary = words(&[("cat", 1)]);
            let solutions = solve(&dictionary, "cat");
            assert_eq!(solutions.top(10).len(), 1);
            assert!(solutions.top(0).is_empty());
        }
    }

    mod internals {
        use super::*;

        #[test]
        fn test_filter_viable_keeps_order() {
            let dictionary = words(&[("tag", 4), ("dog", 5), ("cat", 5), ("dogs", 9)]);
            let window: Vec<&ScoredWord> = dictionary.iter().collect();
            let filtered = filter_viable(&window, &LetterBag::from_phrase("dogcat"));
            let texts: Vec<&str> = filtered.iter().map(|w| w.text()).collect();
            assert_eq!(texts, vec!["tag", "dog", "cat"]);
        }

        #[test]
        fn test_filter_viable_counts_multiplicity() {
            let dictionary = words(&[("tee", 1), ("tea", 1)]);
            let window: Vec<&ScoredWord> = dictionary.iter().collect();
            let filtered = filter_viable(&window, &LetterBag::from_phrase("eat"));
            assert_eq!(filtered.len(), 1);
            assert_eq!(filtered[0].text(), "tea");
        }

        #[test]
        fn test_extended_does_not_mutate_parent() {
            let dog = ScoredWord::new("dog", 5).unwrap();
            let cat = ScoredWord::new("cat", 3).unwrap();
            let parent = Candidate::empty().extended(&dog);
            let child = parent.extended(&cat);

            assert_eq!(parent.texts(), vec!["dog"]);
            assert_eq!(parent.score(), 5);
            assert_eq!(child.texts(), vec!["dog", "cat"]);
            assert_eq!(child.score(), 8);
            assert_eq!(child.letter_count(), 6);
        }

        #[test]
        fn test_candidate_display() {
            let dog = ScoredWord::new("dog", 5).unwrap();
            let cat = ScoredWord::new("cat", 3).unwrap();
            let candidate = Candidate::empty().extended(&dog).extended(&cat);
            assert_eq!(candidate.to_string(), "dog cat");
            assert_eq!(Candidate::empty().to_string(), "");
        }

        #[test]
        fn test_branches_explored_counts_recursion() {
            // root, then one branch under each of "dog" and "cat"
            let dictionary = words(&[("dog", 5), ("cat", 5)]);
            let solutions = solve(&dictionary, "dogcat");
            assert_eq!(solutions.branches_explored, 3);

            // a whole-phrase match closes out without recursing
            let dictionary = words(&[("cat", 5)]);
            assert_eq!(solve(&dictionary, "cat").branches_explored, 1);
        }
    }

    mod error_reporting {
        use super::*;

        #[test]
        fn test_search_error_code_and_detail() {
            let err = SearchError::from(InvalidStateError { letter: 'q', remaining: "act".to_string() });
            assert_eq!(err.code(), "S001");
            assert!(err.help().is_none());
            let detailed = err.display_detailed();
            assert!(detailed.contains("S001"));
            assert!(detailed.contains("L001"));
            assert!(detailed.contains("'q'"));
        }
    }
}
