//! Main Spelling Bee solver interface
//!
//! The solver runs in two strict phases. First the dictionary is streamed
//! into the letter-set index; after that the index is only read, so puzzles
//! can be evaluated in parallel without locking.

use super::evaluator::{ScoredPuzzle, evaluate};
use super::index::{IndexError, LetterSetIndex};
use crate::core::{Alphabet, Letter, LetterError, Puzzle, PuzzleError, ScoredWord};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

/// Why a dictionary word was left out of the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Contains something other than `a..=z`
    Malformed(LetterError),
    /// Worth nothing, or uses too many distinct letters
    Unindexable(IndexError),
    /// Uses the letter dropped from the alphabet
    ExcludedLetter(Letter),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "Malformed word: {e}"),
            Self::Unindexable(e) => write!(f, "{e}"),
            Self::ExcludedLetter(letter) => write!(f, "Uses excluded letter '{letter}'"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Counts collected while building the index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub words_read: usize,
    pub indexed: usize,
    pub malformed: usize,
    pub not_valuable: usize,
    pub too_many_letters: usize,
    pub excluded_letter: usize,
}

impl BuildStats {
    fn record(&mut self, outcome: Result<(), &Rejection>) {
        self.words_read += 1;
        match outcome {
            Ok(()) => self.indexed += 1,
            Err(Rejection::Malformed(_)) => self.malformed += 1,
            Err(Rejection::Unindexable(IndexError::NotValuable(_))) => self.not_valuable += 1,
            Err(Rejection::Unindexable(IndexError::TooManyLetters(..))) => {
                self.too_many_letters += 1;
            }
            Err(Rejection::ExcludedLetter(_)) => self.excluded_letter += 1,
        }
    }

    /// Words that did not make it into the index
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.words_read - self.indexed
    }
}

/// Main Spelling Bee solver
///
/// Owns the alphabet and the letter-set index built from a dictionary.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    alphabet: Alphabet,
    index: LetterSetIndex,
    stats: BuildStats,
}

impl Solver {
    /// Create a solver with an empty index
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            index: LetterSetIndex::new(),
            stats: BuildStats::default(),
        }
    }

    /// Build a solver from raw dictionary words
    ///
    /// Words are trimmed; blank lines are ignored. Words the index cannot use
    /// are skipped and counted in [`BuildStats`].
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Alphabet;
    /// use spelling_bee::solver::Solver;
    ///
    /// let solver = Solver::from_words(Alphabet::default(), ["factory", "fort", "cats", "aft"]);
    ///
    /// assert_eq!(solver.stats().indexed, 2);
    /// assert_eq!(solver.stats().excluded_letter, 1);
    /// assert_eq!(solver.stats().not_valuable, 1);
    /// ```
    pub fn from_words<I, S>(alphabet: Alphabet, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut solver = Self::new(alphabet);
        for word in words {
            // Rejections are already tallied in the stats
            let _ = solver.add_word(word.as_ref());
        }

        let stats = solver.stats;
        log::info!(
            "Indexed {} of {} words into {} letter sets ({} pangram sets)",
            stats.indexed,
            stats.words_read,
            solver.index.len(),
            solver.index.pangram_entries().count()
        );
        log::info!(
            "Skipped {} malformed, {} worthless, {} with too many letters, {} using excluded letters",
            stats.malformed,
            stats.not_valuable,
            stats.too_many_letters,
            stats.excluded_letter
        );
        solver
    }

    /// Classify a raw word and decide whether the index would accept it
    ///
    /// Checks run in a fixed order: characters, value, letter count, alphabet.
    ///
    /// # Errors
    /// Returns the first `Rejection` that applies.
    pub fn admit(&self, raw: &str) -> Result<ScoredWord, Rejection> {
        let word = ScoredWord::classify(raw.trim()).map_err(Rejection::Malformed)?;
        LetterSetIndex::check(&word).map_err(Rejection::Unindexable)?;

        if let Some(excluded) = self.alphabet.excluded()
            && word.letter_set().contains(excluded)
        {
            return Err(Rejection::ExcludedLetter(excluded));
        }
        Ok(word)
    }

    /// Classify a raw word and add it to the index if admissible
    ///
    /// Blank input is ignored and not counted.
    ///
    /// # Errors
    /// Returns the `Rejection` if the word was not indexed.
    pub fn add_word(&mut self, raw: &str) -> Result<(), Rejection> {
        if raw.trim().is_empty() {
            return Ok(());
        }

        let outcome = self.admit(raw).and_then(|word| {
            self.index
                .add_word(word)
                .map_err(Rejection::Unindexable)
        });
        self.stats.record(outcome.as_ref().copied());
        outcome
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &LetterSetIndex {
        &self.index
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Every puzzle whose letters are used by at least one pangram, in key order
    ///
    /// # Errors
    /// Returns `PuzzleError` if a pangram entry cannot form a puzzle, which
    /// indicates a corrupted index.
    pub fn puzzles(&self) -> Result<Vec<Puzzle>, PuzzleError> {
        let mut puzzles = BTreeMap::new();
        for entry in self.index.pangram_entries() {
            puzzles.extend(Puzzle::from_letters(entry.letter_set())?);
        }
        Ok(puzzles.into_values().collect())
    }

    /// Score a single puzzle
    ///
    /// # Errors
    /// Returns `PuzzleError::ExcludedLetter` if the puzzle uses a letter
    /// outside the alphabet.
    pub fn evaluate(&self, puzzle: &Puzzle) -> Result<ScoredPuzzle<'_>, PuzzleError> {
        if let Some(excluded) = self.alphabet.excluded()
            && puzzle.letters().contains(excluded)
        {
            return Err(PuzzleError::ExcludedLetter(excluded.to_char()));
        }
        Ok(evaluate(puzzle, &self.index))
    }

    /// Score many puzzles in parallel
    #[must_use]
    pub fn evaluate_all(&self, puzzles: &[Puzzle]) -> Vec<ScoredPuzzle<'_>> {
        self.evaluate_with_progress(puzzles, &ProgressBar::hidden())
    }

    /// Score many puzzles in parallel, ticking `progress` once per puzzle
    #[must_use]
    pub fn evaluate_with_progress(
        &self,
        puzzles: &[Puzzle],
        progress: &ProgressBar,
    ) -> Vec<ScoredPuzzle<'_>> {
        puzzles
            .par_iter()
            .map(|puzzle| {
                let scored = evaluate(puzzle, &self.index);
                progress.inc(1);
                scored
            })
            .collect()
    }
}
