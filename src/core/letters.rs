//! Letters, letter sets and the admissible alphabet
//!
//! A `LetterSet` is stored as a 26-bit mask, one bit per lowercase letter.
//! Equality and hashing are therefore exact set semantics: the order in which
//! letters were seen never matters.

use std::fmt::{self, Write};
use std::str::FromStr;

/// Number of letters in the English alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A single lowercase ASCII letter, stored as its offset from `a`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// Error type for characters that cannot be part of a letter set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    InvalidCharacter(char),
    Empty,
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(c) => {
                write!(f, "'{c}' is not a lowercase letter a-z")
            }
            Self::Empty => write!(f, "Expected at least one letter"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Create a letter from a lowercase ASCII character
    ///
    /// # Errors
    /// Returns `LetterError::InvalidCharacter` for anything outside `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Letter;
    ///
    /// let letter = Letter::new('q').unwrap();
    /// assert_eq!(letter.to_char(), 'q');
    /// assert!(Letter::new('Q').is_err());
    /// ```
    pub const fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_lowercase() {
            Ok(Self(c as u8 - b'a'))
        } else {
            Err(LetterError::InvalidCharacter(c))
        }
    }

    /// Offset of the letter from `a` (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (self.0 + b'a') as char
    }

    #[inline]
    #[must_use]
    pub const fn to_uppercase(self) -> char {
        (self.0 + b'A') as char
    }

    #[inline]
    const fn bit(self) -> u32 {
        1 << self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.to_char())
    }
}

/// An unordered set of distinct letters
///
/// Two sets built from the same letters in any order compare equal and hash
/// identically, which makes `LetterSet` usable as the join key between
/// dictionary words and puzzle subsets.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter from `a` to `z`
    pub const FULL: Self = Self((1 << ALPHABET_SIZE) - 1);

    /// Build the set of distinct letters used by a word
    ///
    /// # Errors
    /// Returns `LetterError::InvalidCharacter` on the first character outside
    /// `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let a = LetterSet::from_word("rafter").unwrap();
    /// let b = LetterSet::from_word("after").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.len(), 5);
    /// assert_eq!(a.to_string(), "aefrt");
    /// ```
    pub fn from_word(word: &str) -> Result<Self, LetterError> {
        word.chars().try_fold(Self::EMPTY, |set, c| {
            Letter::new(c).map(|letter| set.with(letter))
        })
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & letter.bit() != 0
    }

    /// Add a letter, returning whether it was newly inserted
    pub const fn insert(&mut self, letter: Letter) -> bool {
        let old = self.0;
        self.0 |= letter.bit();
        old != self.0
    }

    /// Copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: Letter) -> Self {
        Self(self.0 | letter.bit())
    }

    /// Copy of this set with `letter` removed
    #[inline]
    #[must_use]
    pub const fn without(self, letter: Letter) -> Self {
        Self(self.0 & !letter.bit())
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    #[must_use]
    pub const fn iter(self) -> LetterSetIter {
        LetterSetIter(self.0)
    }
}

impl FromStr for LetterSet {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_word(s)
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl IntoIterator for LetterSet {
    type Item = Letter;
    type IntoIter = LetterSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|letter| f.write_char(letter.to_char()))
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterSet({self})")
    }
}

/// Iterator over the letters of a `LetterSet`, lowest first
pub struct LetterSetIter(u32);

impl Iterator for LetterSetIter {
    type Item = Letter;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let next = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(Letter(next as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LetterSetIter {}

/// The letters a puzzle may use
///
/// The game drops exactly one letter from the English alphabet (`s` by
/// default, since plurals would otherwise dominate every puzzle). Passing no
/// exclusion gives the full 26-letter alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    excluded: Option<Letter>,
}

impl Alphabet {
    /// Letter excluded by the standard rules
    pub const DEFAULT_EXCLUDED: char = 's';

    /// All 26 letters
    #[must_use]
    pub const fn full() -> Self {
        Self { excluded: None }
    }

    /// Every letter except `letter`
    #[must_use]
    pub const fn without(letter: Letter) -> Self {
        Self {
            excluded: Some(letter),
        }
    }

    /// Parse an exclusion setting: a single letter, or `none` for the full alphabet
    ///
    /// # Errors
    /// Returns `LetterError` if the setting is empty, longer than one letter,
    /// or not a lowercase letter.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::{Alphabet, LetterSet};
    ///
    /// let alphabet = Alphabet::from_exclusion("s").unwrap();
    /// assert!(!alphabet.admits("cats".parse::<LetterSet>().unwrap()));
    /// assert_eq!(Alphabet::from_exclusion("none").unwrap(), Alphabet::full());
    /// ```
    pub fn from_exclusion(setting: &str) -> Result<Self, LetterError> {
        let setting = setting.trim();
        if setting.eq_ignore_ascii_case("none") {
            return Ok(Self::full());
        }

        let mut chars = setting.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(LetterError::Empty),
            (Some(c), None) => Letter::new(c).map(Self::without),
            (Some(_), Some(extra)) => Err(LetterError::InvalidCharacter(extra)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn excluded(self) -> Option<Letter> {
        self.excluded
    }

    /// The admissible letters as a set
    #[must_use]
    pub const fn letters(self) -> LetterSet {
        match self.excluded {
            Some(letter) => LetterSet::FULL.without(letter),
            None => LetterSet::FULL,
        }
    }

    /// Whether every letter of `set` belongs to the alphabet
    #[inline]
    #[must_use]
    pub const fn admits(self, set: LetterSet) -> bool {
        set.is_subset(self.letters())
    }

    /// Number of admissible letters (25 or 26)
    #[must_use]
    pub const fn len(self) -> usize {
        self.letters().len()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.letters().is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::without(Letter(Self::DEFAULT_EXCLUDED as u8 - b'a'))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.excluded {
            Some(letter) => write!(f, "a-z without '{letter}'"),
            None => write!(f, "a-z"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(s: &str) -> LetterSet {
        s.parse().unwrap()
    }

    #[test]
    fn letter_valid_range() {
        assert_eq!(Letter::new('a').unwrap().index(), 0);
        assert_eq!(Letter::new('z').unwrap().index(), 25);
        assert_eq!(Letter::new('m').unwrap().to_uppercase(), 'M');
    }

    #[test]
    fn letter_rejects_non_lowercase() {
        assert_eq!(Letter::new('A'), Err(LetterError::InvalidCharacter('A')));
        assert!(Letter::new('1').is_err());
        assert!(Letter::new('é').is_err());
        assert!(Letter::new(' ').is_err());
    }

    #[test]
    fn letter_set_ignores_order_and_repeats() {
        assert_eq!(set("tarot"), set("rota"));
        assert_eq!(set("carrot"), set("actor"));
        assert_ne!(set("fort"), set("foot"));
    }

    #[test]
    fn letter_set_len_counts_distinct() {
        assert_eq!(set("aaaa").len(), 1);
        assert_eq!(set("factory").len(), 7);
        assert_eq!(set("ablution").len(), 8);
        assert!(set("").is_empty());
    }

    #[test]
    fn letter_set_rejects_invalid_characters() {
        assert_eq!(
            LetterSet::from_word("don't"),
            Err(LetterError::InvalidCharacter('\''))
        );
        assert!(LetterSet::from_word("Paris").is_err());
    }

    #[test]
    fn letter_set_display_sorted() {
        assert_eq!(set("wolf").to_string(), "flow");
        assert_eq!(format!("{:?}", set("cab")), "LetterSet(abc)");
    }

    #[test]
    fn letter_set_iter_alphabetical() {
        let letters: String = set("zebra").iter().map(Letter::to_char).collect();
        assert_eq!(letters, "aberz");
        assert_eq!(set("zebra").iter().len(), 5);
    }

    #[test]
    fn letter_set_insert_and_remove() {
        let mut s = LetterSet::EMPTY;
        let a = Letter::new('a').unwrap();
        assert!(s.insert(a));
        assert!(!s.insert(a));
        assert!(s.contains(a));
        assert!(s.without(a).is_empty());
    }

    #[test]
    fn letter_set_subset_relations() {
        assert!(set("fort").is_subset(set("factory")));
        assert!(!set("after").is_subset(set("factory")));
        assert!(set("").is_subset(set("abc")));
        assert!(set("abc").is_disjoint(set("xyz")));
        assert_eq!(set("ab").union(set("bc")), set("abc"));
    }

    #[test]
    fn letter_set_from_iterator() {
        let collected: LetterSet = set("clarify").iter().collect();
        assert_eq!(collected, set("clarify"));
    }

    #[test]
    fn alphabet_default_excludes_s() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.excluded(), Some(Letter::new('s').unwrap()));
        assert_eq!(alphabet.len(), 25);
        assert!(alphabet.admits(set("factory")));
        assert!(!alphabet.admits(set("cats")));
    }

    #[test]
    fn alphabet_full_admits_everything() {
        let alphabet = Alphabet::full();
        assert_eq!(alphabet.len(), 26);
        assert!(alphabet.admits(set("cats")));
        assert!(alphabet.admits(LetterSet::FULL));
    }

    #[test]
    fn alphabet_from_exclusion() {
        assert_eq!(
            Alphabet::from_exclusion("q").unwrap().excluded(),
            Some(Letter::new('q').unwrap())
        );
        assert_eq!(Alphabet::from_exclusion("NONE").unwrap(), Alphabet::full());
        assert_eq!(Alphabet::from_exclusion(""), Err(LetterError::Empty));
        assert!(Alphabet::from_exclusion("qz").is_err());
        assert!(Alphabet::from_exclusion("Q").is_err());
    }

    #[test]
    fn alphabet_display() {
        assert_eq!(Alphabet::default().to_string(), "a-z without 's'");
        assert_eq!(Alphabet::full().to_string(), "a-z");
    }
}
