//! Puzzle evaluation
//!
//! A puzzle accepts exactly the words whose letter set is a subset of its
//! letters containing the center. There are 2^6 = 64 such subsets, so a
//! puzzle's score is the sum of at most 64 index entries.

use super::index::{LetterSetEntry, LetterSetIndex};
use crate::core::{Letter, LetterSet, PANGRAM_LETTERS, Puzzle, ScoredWord};
use std::fmt;

/// Number of candidate letter sets for every puzzle
pub const CANDIDATES_PER_PUZZLE: usize = 1 << (PANGRAM_LETTERS - 1);

/// Every letter set a puzzle can accept: each subset of the outer letters plus the center
///
/// Outer letter `i` (alphabetical order) is included when bit `i` of the
/// subset number is set. Subset 0 is the center letter on its own and subset
/// 63 is the full puzzle.
///
/// # Examples
/// ```
/// use spelling_bee::core::Puzzle;
/// use spelling_bee::solver::candidate_letter_sets;
///
/// let puzzle: Puzzle = "Acforty".parse().unwrap();
/// let candidates: Vec<_> = candidate_letter_sets(&puzzle).collect();
///
/// assert_eq!(candidates.len(), 64);
/// assert_eq!(candidates[0].to_string(), "a");
/// assert_eq!(candidates[63], puzzle.letters());
/// ```
pub fn candidate_letter_sets(puzzle: &Puzzle) -> impl Iterator<Item = LetterSet> {
    let center = puzzle.center();
    let outer: Vec<Letter> = puzzle.outer_letters().iter().collect();

    (0..CANDIDATES_PER_PUZZLE).map(move |subset| {
        outer
            .iter()
            .enumerate()
            .filter(|&(bit, _)| subset & (1 << bit) != 0)
            .fold(LetterSet::EMPTY.with(center), |set, (_, &letter)| {
                set.with(letter)
            })
    })
}

/// A puzzle together with its score and the index entries it accepts
///
/// Produced once by [`evaluate`]; the entries are borrowed from the index,
/// which is shared by every evaluated puzzle.
#[derive(Debug, Clone)]
pub struct ScoredPuzzle<'a> {
    puzzle: Puzzle,
    total_score: u32,
    matched: Vec<&'a LetterSetEntry>,
}

impl<'a> ScoredPuzzle<'a> {
    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        self.puzzle.key()
    }

    /// Sum of the scores of every accepted word
    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Index entries accepted by the puzzle, in candidate order
    #[inline]
    #[must_use]
    pub fn matched_entries(&self) -> &[&'a LetterSetEntry] {
        &self.matched
    }

    /// The matched entry for exactly this letter set
    #[must_use]
    pub fn matched_entry(&self, letter_set: LetterSet) -> Option<&'a LetterSetEntry> {
        self.matched
            .iter()
            .copied()
            .find(|entry| entry.letter_set() == letter_set)
    }

    /// Every word accepted by the puzzle, unordered
    pub fn words(&self) -> impl Iterator<Item = &'a ScoredWord> + '_ {
        self.matched.iter().flat_map(|&entry| entry.words())
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.matched.iter().map(|entry| entry.words().len()).sum()
    }

    /// Accepted words using all 7 puzzle letters
    pub fn pangrams(&self) -> impl Iterator<Item = &'a ScoredWord> + '_ {
        let letters = self.puzzle.letters();
        self.words().filter(move |word| word.letter_set() == letters)
    }
}

impl fmt::Display for ScoredPuzzle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} points)", self.puzzle, self.total_score)
    }
}

/// Score a puzzle against the index
///
/// Looks up each of the 64 candidate letter sets; sets with no dictionary
/// words simply contribute nothing.
///
/// # Examples
/// ```
/// use spelling_bee::core::{Puzzle, ScoredWord};
/// use spelling_bee::solver::{LetterSetIndex, evaluate};
///
/// let mut index = LetterSetIndex::new();
/// for word in ["factory", "tarot", "fort"] {
///     index.add_word(ScoredWord::classify(word).unwrap()).unwrap();
/// }
///
/// let puzzle: Puzzle = "Acforty".parse().unwrap();
/// let scored = evaluate(&puzzle, &index);
///
/// // "fort" has no 'a', so only factory (14) and tarot (5) count
/// assert_eq!(scored.total_score(), 19);
/// ```
#[must_use]
pub fn evaluate<'a>(puzzle: &Puzzle, index: &'a LetterSetIndex) -> ScoredPuzzle<'a> {
    let matched: Vec<&LetterSetEntry> = candidate_letter_sets(puzzle)
        .filter_map(|candidate| index.lookup(candidate))
        .collect();
    let total_score = matched.iter().map(|entry| entry.total_score()).sum();

    ScoredPuzzle {
        puzzle: puzzle.clone(),
        total_score,
        matched,
    }
}

/// One step of an evaluation trace
#[derive(Debug, Clone, Copy)]
pub struct CandidateMatch<'a> {
    pub letter_set: LetterSet,
    pub entry: Option<&'a LetterSetEntry>,
}

impl CandidateMatch<'_> {
    /// Points contributed by this candidate
    #[must_use]
    pub fn score(&self) -> u32 {
        self.entry.map_or(0, LetterSetEntry::total_score)
    }
}

/// Trace every candidate lookup for a puzzle, hits and misses alike
#[must_use]
pub fn inspect<'a>(puzzle: &Puzzle, index: &'a LetterSetIndex) -> Vec<CandidateMatch<'a>> {
    candidate_letter_sets(puzzle)
        .map(|letter_set| {
            let entry = index.lookup(letter_set);
            if entry.is_none() {
                log::debug!("{puzzle}: no words with letters {letter_set}");
            }
            CandidateMatch { letter_set, entry }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::{Rng, SeedableRng};

    fn build(words: &[&str]) -> LetterSetIndex {
        let mut index = LetterSetIndex::new();
        for &w in words {
            index.add_word(ScoredWord::classify(w).unwrap()).unwrap();
        }
        index
    }

    fn puzzle(key: &str) -> Puzzle {
        key.parse().unwrap()
    }

    /// Sum over every subset of the puzzle letters that contains the center
    fn brute_force_score(puzzle: &Puzzle, index: &LetterSetIndex) -> u32 {
        index
            .entries()
            .filter(|entry| puzzle.accepts(entry.letter_set()))
            .map(LetterSetEntry::total_score)
            .sum()
    }

    #[test]
    fn candidates_are_exhaustive_and_distinct() {
        let p = puzzle("acforTy");
        let candidates: Vec<LetterSet> = candidate_letter_sets(&p).collect();

        assert_eq!(candidates.len(), CANDIDATES_PER_PUZZLE);
        assert!(candidates.iter().all(|set| p.accepts(*set)));

        let mut unique = candidates.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 64);
    }

    #[test]
    fn candidate_sizes_follow_binomial_counts() {
        let p = puzzle("Acforty");
        let mut by_size = [0usize; 8];
        for set in candidate_letter_sets(&p) {
            by_size[set.len()] += 1;
        }
        assert_eq!(by_size, [0, 1, 6, 15, 20, 15, 6, 1]);
    }

    #[test]
    fn evaluate_sums_matching_entries() {
        let index = build(&["factory", "crafty", "tarot", "carrot", "actor", "fort", "after"]);
        let scored = evaluate(&puzzle("Acforty"), &index);

        // factory 14 + crafty 6 + tarot 5 + carrot 6 + actor 5
        assert_eq!(scored.total_score(), 36);
        assert_eq!(scored.matched_entries().len(), 4);
        assert_eq!(scored.word_count(), 5);
        assert!(scored.matched_entry("fort".parse().unwrap()).is_none());
        assert_eq!(
            scored
                .matched_entry("actor".parse().unwrap())
                .map(LetterSetEntry::total_score),
            Some(11)
        );
    }

    #[test]
    fn evaluate_empty_index_scores_zero() {
        let index = LetterSetIndex::new();
        let scored = evaluate(&puzzle("Acforty"), &index);
        assert_eq!(scored.total_score(), 0);
        assert!(scored.matched_entries().is_empty());
        assert_eq!(scored.words().count(), 0);
    }

    #[test]
    fn evaluate_is_idempotent() {
        let index = build(&["factory", "crafty", "tray", "fact"]);
        let p = puzzle("acfortY");
        let first = evaluate(&p, &index);
        let second = evaluate(&p, &index);
        assert_eq!(first.total_score(), second.total_score());
        assert_eq!(first.matched_entries(), second.matched_entries());
    }

    #[test]
    fn pangrams_listed() {
        let index = build(&["factory", "crafty"]);
        let scored = evaluate(&puzzle("acfoRty"), &index);
        let pangrams: Vec<&str> = scored.pangrams().map(ScoredWord::text).collect();
        assert_eq!(pangrams, vec!["factory"]);
    }

    #[test]
    fn inspect_traces_all_candidates() {
        let index = build(&["factory", "tarot"]);
        let trace = inspect(&puzzle("Acforty"), &index);

        assert_eq!(trace.len(), 64);
        let hits: Vec<&CandidateMatch> = trace.iter().filter(|c| c.entry.is_some()).collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(trace.iter().map(CandidateMatch::score).sum::<u32>(), 19);
    }

    #[test]
    fn matches_brute_force_on_random_dictionaries() {
        const LETTERS: &[char] = &['a', 'c', 'e', 'f', 'o', 'r', 't', 'y'];
        let mut rng = StdRng::seed_from_u64(0x5be3);

        for _ in 0..20 {
            let words: Vec<String> = (0..60)
                .map(|_| {
                    let len = rng.random_range(4..=9);
                    (0..len).map(|_| *LETTERS.choose(&mut rng).unwrap()).collect()
                })
                .collect();

            let mut index = LetterSetIndex::new();
            for w in &words {
                let _ = index.add_word(ScoredWord::classify(w.as_str()).unwrap());
            }

            for p in Puzzle::from_letters("acforty".parse().unwrap()).unwrap().values() {
                assert_eq!(evaluate(p, &index).total_score(), brute_force_score(p, &index));
            }
        }
    }

    #[test]
    fn adding_accepted_word_never_lowers_score() {
        let mut index = build(&["factory", "fort"]);
        let p = puzzle("acfOrty");
        let before = evaluate(&p, &index).total_score();

        index.add_word(ScoredWord::classify("foot").unwrap()).unwrap();
        let after = evaluate(&p, &index).total_score();

        assert_eq!(after, before + 1);
    }
}
