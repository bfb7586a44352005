//! Dictionary word classification
//!
//! A `ScoredWord` stores a word together with its point value and the set of
//! distinct letters it uses, both computed once at construction.

use super::letters::{LetterError, LetterSet};
use std::fmt;

/// Distinct letters needed for a pangram, and the number of letters in a puzzle
pub const PANGRAM_LETTERS: usize = 7;

/// Bonus points awarded to a pangram
pub const PANGRAM_BONUS: u32 = 7;

/// Shortest word worth any points
pub const MIN_WORD_LENGTH: usize = 4;

/// A dictionary word with its score and letter set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    text: String,
    score: u32,
    letter_set: LetterSet,
}

impl ScoredWord {
    /// Classify a raw word according to the scoring rules
    ///
    /// - 1-3 letters: 0 points
    /// - 4 letters: 1 point
    /// - 5+ letters: one point per letter, plus 7 if it uses 7 or more
    ///   distinct letters
    ///
    /// Classification makes no filtering decision; the caller decides whether
    /// the word is admissible for a given alphabet.
    ///
    /// # Errors
    /// Returns `LetterError` if the word contains a character outside `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::ScoredWord;
    ///
    /// assert_eq!(ScoredWord::classify("bat").unwrap().score(), 0);
    /// assert_eq!(ScoredWord::classify("fore").unwrap().score(), 1);
    /// assert_eq!(ScoredWord::classify("florid").unwrap().score(), 6);
    /// assert_eq!(ScoredWord::classify("factory").unwrap().score(), 14);
    ///
    /// assert!(ScoredWord::classify("x-ray").is_err());
    /// ```
    pub fn classify(text: impl Into<String>) -> Result<Self, LetterError> {
        let text = text.into();
        let letter_set = LetterSet::from_word(&text)?;

        if letter_set.len() == 1 {
            log::warn!("Word '{text}' has only one distinct letter");
        }

        let score = Self::word_score(text.len(), letter_set.len());
        Ok(Self {
            text,
            score,
            letter_set,
        })
    }

    /// Points for a word of `length` letters using `distinct` different letters
    #[must_use]
    pub const fn word_score(length: usize, distinct: usize) -> u32 {
        if length > MIN_WORD_LENGTH {
            let base = length as u32;
            if distinct >= PANGRAM_LETTERS {
                base + PANGRAM_BONUS
            } else {
                base
            }
        } else if length == MIN_WORD_LENGTH {
            1
        } else {
            0
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.letter_set
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn letter_count(&self) -> usize {
        self.letter_set.len()
    }

    /// A word is valuable if it is worth any points at all
    #[inline]
    #[must_use]
    pub const fn is_valuable(&self) -> bool {
        self.score > 0
    }

    /// Uses at least 7 distinct letters
    #[inline]
    #[must_use]
    pub const fn is_pangram(&self) -> bool {
        self.letter_set.len() >= PANGRAM_LETTERS
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
