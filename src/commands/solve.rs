//! Solve command
//!
//! Scores every puzzle the dictionary supports and reports the best ones.

use crate::solver::{BuildStats, ScoredPuzzle, Solver, rank_puzzles, rank_words};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Configuration for a solve run
pub struct SolveConfig {
    /// How many puzzles to report
    pub top: usize,
    /// Draw a progress bar while evaluating
    pub show_progress: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(top: usize) -> Self {
        Self {
            top,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

/// A ranked puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSummary {
    pub rank: usize,
    pub key: String,
    pub score: u32,
    pub word_count: usize,
}

/// A ranked word of a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSummary {
    pub rank: usize,
    pub text: String,
    pub score: u32,
    pub pangram: bool,
}

/// Result of a solve run
pub struct SolveResult {
    pub stats: BuildStats,
    pub letter_sets: usize,
    pub puzzle_count: usize,
    pub top: Vec<PuzzleSummary>,
    /// Words of the highest ranked puzzle, best first
    pub best_words: Vec<WordSummary>,
    pub duration: Duration,
}

impl SolveResult {
    /// The highest ranked puzzle, if the dictionary supports any
    #[must_use]
    pub fn best(&self) -> Option<&PuzzleSummary> {
        self.top.first()
    }
}

/// Summarize the words of a puzzle, ranked
#[must_use]
pub fn summarize_words(puzzle: &ScoredPuzzle<'_>) -> Vec<WordSummary> {
    let letters = puzzle.puzzle().letters();
    rank_words(puzzle.words())
        .into_iter()
        .enumerate()
        .map(|(i, word)| WordSummary {
            rank: i + 1,
            text: word.text().to_string(),
            score: word.score(),
            pangram: word.letter_set() == letters,
        })
        .collect()
}

/// Generate, score and rank every puzzle
///
/// # Errors
///
/// Returns an error if puzzle generation fails or the progress bar template
/// is invalid.
pub fn solve(config: &SolveConfig, solver: &Solver) -> Result<SolveResult, String> {
    let start = Instant::now();

    let puzzles = solver
        .puzzles()
        .map_err(|e| format!("Failed to generate puzzles: {e}"))?;
    log::info!("Generated {} puzzles", puzzles.len());

    let progress = if config.show_progress {
        let pb = ProgressBar::new(puzzles.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} puzzles ({percent}%)")
                .map_err(|e| format!("Invalid progress template: {e}"))?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let scored = solver.evaluate_with_progress(&puzzles, &progress);
    progress.finish_and_clear();

    let ranked = rank_puzzles(&scored);
    let top = ranked
        .iter()
        .take(config.top)
        .enumerate()
        .map(|(i, p)| PuzzleSummary {
            rank: i + 1,
            key: p.key().to_string(),
            score: p.total_score(),
            word_count: p.word_count(),
        })
        .collect();
    let best_words = ranked.first().map(|p| summarize_words(p)).unwrap_or_default();

    let duration = start.elapsed();
    log::info!(
        "Evaluated {} puzzles in {:.2}s",
        scored.len(),
        duration.as_secs_f64()
    );

    Ok(SolveResult {
        stats: *solver.stats(),
        letter_sets: solver.index().len(),
        puzzle_count: scored.len(),
        top,
        best_words,
        duration,
    })
}
