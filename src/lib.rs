//! Spelling Bee Solver
//!
//! Finds the Spelling Bee puzzle (7 letters, one of them mandatory) that
//! earns the most points for a given dictionary, by indexing words on their
//! letter sets and scoring all 64 admissible letter subsets of every puzzle.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::Alphabet;
//! use spelling_bee::solver::{Solver, rank_puzzles};
//!
//! let words = ["factory", "crafty", "tarot", "carrot", "fort"];
//! let solver = Solver::from_words(Alphabet::default(), words);
//!
//! let puzzles = solver.puzzles().unwrap();
//! let scored = solver.evaluate_all(&puzzles);
//! let best = rank_puzzles(&scored)[0];
//!
//! assert_eq!(best.key(), "acfoRty");
//! assert_eq!(best.total_score(), 32);
//! ```

// Core domain types
pub mod core;

// Indexing, evaluation and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
