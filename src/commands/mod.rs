//! Command implementations

pub mod inspect;
pub mod score;
pub mod solve;

pub use inspect::{InspectResult, SubsetReport, inspect_puzzle};
pub use score::{WordReport, score_words};
pub use solve::{PuzzleSummary, SolveConfig, SolveResult, WordSummary, solve, summarize_words};
