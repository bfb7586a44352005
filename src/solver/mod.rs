//! Spelling Bee solving pipeline
//!
//! Index the dictionary by letter set, generate puzzles from the pangram
//! sets, score every puzzle and rank the results.

mod engine;
pub mod evaluator;
pub mod index;
pub mod ranker;

pub use engine::{BuildStats, Rejection, Solver};
pub use evaluator::{
    CANDIDATES_PER_PUZZLE, CandidateMatch, ScoredPuzzle, candidate_letter_sets, evaluate, inspect,
};
pub use index::{IndexError, LetterSetEntry, LetterSetIndex};
pub use ranker::{best_puzzle, compare_puzzles, compare_words, rank_puzzles, rank_words};
