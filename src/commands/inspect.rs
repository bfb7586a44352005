//! Puzzle inspection command
//!
//! Evaluates a single puzzle given its canonical key and traces every letter
//! subset that was looked up.

use super::solve::{WordSummary, summarize_words};
use crate::core::Puzzle;
use crate::solver::{Solver, inspect};

/// Lookup result for one letter subset
pub struct SubsetReport {
    pub letters: String,
    pub score: u32,
    pub words: Vec<String>,
}

impl SubsetReport {
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        self.score > 0
    }
}

/// Result of inspecting a puzzle
pub struct InspectResult {
    pub key: String,
    pub score: u32,
    /// All 64 candidate subsets, in enumeration order
    pub subsets: Vec<SubsetReport>,
    pub words: Vec<WordSummary>,
}

impl InspectResult {
    #[must_use]
    pub fn hits(&self) -> usize {
        self.subsets.iter().filter(|s| s.is_hit()).count()
    }

    /// A puzzle is playable when the dictionary has at least one pangram for it
    #[must_use]
    pub fn has_pangram(&self) -> bool {
        self.words.iter().any(|w| w.pangram)
    }
}

/// Evaluate the puzzle with the given key
///
/// # Errors
///
/// Returns an error if the key is not a valid puzzle or uses a letter
/// excluded from the solver's alphabet.
pub fn inspect_puzzle(key: &str, solver: &Solver) -> Result<InspectResult, String> {
    let puzzle: Puzzle = key
        .parse()
        .map_err(|e| format!("Invalid puzzle '{key}': {e}"))?;
    let scored = solver
        .evaluate(&puzzle)
        .map_err(|e| format!("Invalid puzzle '{key}': {e}"))?;

    let subsets = inspect(&puzzle, solver.index())
        .into_iter()
        .map(|candidate| SubsetReport {
            letters: candidate.letter_set.to_string(),
            score: candidate.score(),
            words: candidate
                .entry
                .map(|entry| entry.words().iter().map(|w| w.text().to_string()).collect())
                .unwrap_or_default(),
        })
        .collect();

    Ok(InspectResult {
        key: puzzle.key().to_string(),
        score: scored.total_score(),
        subsets,
        words: summarize_words(&scored),
    })
}
