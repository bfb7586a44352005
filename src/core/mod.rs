//! Core domain types for Spelling Bee
//!
//! Letters, letter sets, scored words and puzzles. Apart from a diagnostic
//! log line, everything here is pure and has no knowledge of the dictionary.

mod letters;
mod puzzle;
mod word;

pub use letters::{ALPHABET_SIZE, Alphabet, Letter, LetterError, LetterSet, LetterSetIter};
pub use puzzle::{Puzzle, PuzzleError};
pub use word::{MIN_WORD_LENGTH, PANGRAM_BONUS, PANGRAM_LETTERS, ScoredWord};
