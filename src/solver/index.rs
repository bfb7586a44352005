//! Letter-set index
//!
//! Groups valuable dictionary words by their exact letter set. Each entry
//! tracks the words sharing a set and their combined score, so evaluating a
//! puzzle is a handful of hash lookups rather than a scan of the dictionary.

use crate::core::{LetterSet, PANGRAM_LETTERS, ScoredWord};
use rustc_hash::FxHashMap;
use std::fmt;

/// All valuable words sharing one exact letter set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSetEntry {
    letter_set: LetterSet,
    total_score: u32,
    words: Vec<ScoredWord>,
}

impl LetterSetEntry {
    const fn new(letter_set: LetterSet) -> Self {
        Self {
            letter_set,
            total_score: 0,
            words: Vec::new(),
        }
    }

    fn push(&mut self, word: ScoredWord) {
        self.total_score += word.score();
        self.words.push(word);
    }

    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.letter_set
    }

    /// Sum of the scores of every word in this entry
    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Words in the order they were added
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[ScoredWord] {
        &self.words
    }
}

impl fmt::Display for LetterSetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} points:", self.letter_set, self.total_score)?;
        for word in &self.words {
            write!(f, " {word}")?;
        }
        write!(f, ")")
    }
}

/// Error type for words the index refuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    NotValuable(String),
    TooManyLetters(String, usize),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotValuable(word) => write!(f, "Word '{word}' is worth no points"),
            Self::TooManyLetters(word, count) => write!(
                f,
                "Word '{word}' uses {count} distinct letters, at most {PANGRAM_LETTERS} allowed"
            ),
        }
    }
}

impl std::error::Error for IndexError {}

/// Valuable words keyed by exact letter set
///
/// Written once per word while loading the dictionary, then only read.
#[derive(Debug, Clone, Default)]
pub struct LetterSetIndex {
    entries: FxHashMap<LetterSet, LetterSetEntry>,
    word_count: usize,
}

impl LetterSetIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that a word may be indexed without inserting it
    ///
    /// # Errors
    /// Returns `IndexError` if the word scores nothing or uses more than 7 letters.
    pub fn check(word: &ScoredWord) -> Result<(), IndexError> {
        if !word.is_valuable() {
            return Err(IndexError::NotValuable(word.text().to_string()));
        }
        if word.letter_count() > PANGRAM_LETTERS {
            return Err(IndexError::TooManyLetters(
                word.text().to_string(),
                word.letter_count(),
            ));
        }
        Ok(())
    }

    /// Add a valuable word to the entry for its letter set, creating it if needed
    ///
    /// # Errors
    /// Returns `IndexError` if the word scores nothing or uses more than 7 letters.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::ScoredWord;
    /// use spelling_bee::solver::LetterSetIndex;
    ///
    /// let mut index = LetterSetIndex::new();
    /// index.add_word(ScoredWord::classify("after").unwrap()).unwrap();
    /// index.add_word(ScoredWord::classify("rafter").unwrap()).unwrap();
    ///
    /// let entry = index.lookup("after".parse().unwrap()).unwrap();
    /// assert_eq!(entry.total_score(), 11);
    /// assert_eq!(entry.words().len(), 2);
    ///
    /// assert!(index.add_word(ScoredWord::classify("aft").unwrap()).is_err());
    /// ```
    pub fn add_word(&mut self, word: ScoredWord) -> Result<(), IndexError> {
        Self::check(&word)?;

        let letter_set = word.letter_set();
        self.entries
            .entry(letter_set)
            .or_insert_with(|| LetterSetEntry::new(letter_set))
            .push(word);
        self.word_count += 1;
        Ok(())
    }

    /// Entry for exactly this letter set, if any word uses it
    #[inline]
    #[must_use]
    pub fn lookup(&self, letter_set: LetterSet) -> Option<&LetterSetEntry> {
        self.entries.get(&letter_set)
    }

    /// Entries whose letter set has exactly `count` letters
    pub fn entries_with_letter_count(
        &self,
        count: usize,
    ) -> impl Iterator<Item = &LetterSetEntry> + '_ {
        self.entries
            .values()
            .filter(move |entry| entry.letter_set.len() == count)
    }

    /// Entries usable as the letters of a puzzle
    pub fn pangram_entries(&self) -> impl Iterator<Item = &LetterSetEntry> + '_ {
        self.entries_with_letter_count(PANGRAM_LETTERS)
    }

    /// Number of distinct letter sets
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of words across all entries
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn entries(&self) -> impl Iterator<Item = &LetterSetEntry> + '_ {
        self.entries.values()
    }
}
