//! Spelling Bee puzzle representation
//!
//! A puzzle is a set of 7 distinct letters with one of them designated as the
//! mandatory center letter. The canonical key spells the letters in sorted
//! order with the center letter upper-cased, e.g. `adfloRw`.

use super::letters::{Letter, LetterError, LetterSet};
use super::word::PANGRAM_LETTERS;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A Spelling Bee puzzle: 7 letters and a center letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    letters: LetterSet,
    center: Letter,
    key: String,
}

/// Error type for invalid puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    WrongLetterCount(usize),
    CenterNotInLetters(char),
    MissingCenter,
    MultipleCenters(char, char),
    DuplicateLetter(char),
    InvalidLetter(LetterError),
    ExcludedLetter(char),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLetterCount(count) => {
                write!(f, "Puzzle must have exactly 7 letters, got {count}")
            }
            Self::CenterNotInLetters(c) => {
                write!(f, "Center letter '{c}' is not one of the puzzle letters")
            }
            Self::MissingCenter => write!(f, "Puzzle key has no upper-case center letter"),
            Self::MultipleCenters(a, b) => {
                write!(f, "Puzzle key has more than one center letter ('{a}', '{b}')")
            }
            Self::DuplicateLetter(c) => write!(f, "Letter '{c}' appears more than once"),
            Self::InvalidLetter(e) => write!(f, "Invalid letter: {e}"),
            Self::ExcludedLetter(c) => write!(f, "Letter '{c}' is excluded from the alphabet"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidLetter(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LetterError> for PuzzleError {
    fn from(e: LetterError) -> Self {
        Self::InvalidLetter(e)
    }
}

impl Puzzle {
    /// Create a puzzle from its letters and center letter
    ///
    /// # Errors
    /// Returns `PuzzleError` if `letters` does not hold exactly 7 letters or
    /// does not contain `center`.
    pub fn new(letters: LetterSet, center: Letter) -> Result<Self, PuzzleError> {
        if letters.len() != PANGRAM_LETTERS {
            return Err(PuzzleError::WrongLetterCount(letters.len()));
        }
        if !letters.contains(center) {
            return Err(PuzzleError::CenterNotInLetters(center.to_char()));
        }

        let key = letters
            .iter()
            .map(|letter| {
                if letter == center {
                    letter.to_uppercase()
                } else {
                    letter.to_char()
                }
            })
            .collect();

        Ok(Self {
            letters,
            center,
            key,
        })
    }

    /// All 7 puzzles that can be made from a set of 7 letters, keyed by canonical key
    ///
    /// # Errors
    /// Returns `PuzzleError::WrongLetterCount` unless `letters` holds exactly 7 letters.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::{LetterSet, Puzzle};
    ///
    /// let letters: LetterSet = "factory".parse().unwrap();
    /// let puzzles = Puzzle::from_letters(letters).unwrap();
    ///
    /// assert_eq!(puzzles.len(), 7);
    /// assert!(puzzles.contains_key("Acforty"));
    /// assert!(puzzles.contains_key("acfortY"));
    /// ```
    pub fn from_letters(letters: LetterSet) -> Result<BTreeMap<String, Self>, PuzzleError> {
        if letters.len() != PANGRAM_LETTERS {
            return Err(PuzzleError::WrongLetterCount(letters.len()));
        }
        letters
            .iter()
            .map(|center| Self::new(letters, center).map(|p| (p.key.clone(), p)))
            .collect()
    }

    /// All 7 letters, center included
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    #[inline]
    #[must_use]
    pub const fn center(&self) -> Letter {
        self.center
    }

    /// The 6 letters other than the center
    #[inline]
    #[must_use]
    pub const fn outer_letters(&self) -> LetterSet {
        self.letters.without(self.center)
    }

    /// Canonical key: sorted letters with the center upper-cased
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a word with the given letter set is accepted by this puzzle
    ///
    /// Accepted words use only puzzle letters and always use the center.
    #[inline]
    #[must_use]
    pub const fn accepts(&self, word_letters: LetterSet) -> bool {
        word_letters.contains(self.center) && word_letters.is_subset(self.letters)
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    /// Parse a canonical key such as `adfloRw`; letter order is not significant
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut letters = LetterSet::EMPTY;
        let mut center: Option<char> = None;
        let mut count = 0;

        for c in s.trim().chars() {
            let lower = c.to_ascii_lowercase();
            if c.is_ascii_uppercase() {
                if let Some(previous) = center {
                    return Err(PuzzleError::MultipleCenters(previous, lower));
                }
                center = Some(lower);
            }
            if !letters.insert(Letter::new(lower)?) {
                return Err(PuzzleError::DuplicateLetter(lower));
            }
            count += 1;
        }

        if count != PANGRAM_LETTERS {
            return Err(PuzzleError::WrongLetterCount(count));
        }
        let center = center.ok_or(PuzzleError::MissingCenter)?;
        Self::new(letters, Letter::new(center)?)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(s: &str) -> LetterSet {
        s.parse().unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn key_uppercases_center() {
        let puzzle = Puzzle::new(set("wardflo"), letter('r')).unwrap();
        assert_eq!(puzzle.key(), "adfloRw");
        assert_eq!(puzzle.to_string(), "adfloRw");
    }

    #[test]
    fn new_rejects_wrong_size() {
        assert_eq!(
            Puzzle::new(set("abcdef"), letter('a')),
            Err(PuzzleError::WrongLetterCount(6))
        );
        assert_eq!(
            Puzzle::new(set("abcdefgh"), letter('a')),
            Err(PuzzleError::WrongLetterCount(8))
        );
    }

    #[test]
    fn new_rejects_foreign_center() {
        assert_eq!(
            Puzzle::new(set("factory"), letter('z')),
            Err(PuzzleError::CenterNotInLetters('z'))
        );
    }

    #[test]
    fn from_letters_makes_seven_distinct_puzzles() {
        let letters = set("clarify");
        let puzzles = Puzzle::from_letters(letters).unwrap();

        assert_eq!(puzzles.len(), 7);
        let centers: LetterSet = puzzles.values().map(Puzzle::center).collect();
        assert_eq!(centers, letters);
        assert!(puzzles.values().all(|p| p.letters() == letters));
        assert!(puzzles.iter().all(|(key, p)| key == p.key()));
    }

    #[test]
    fn from_letters_rejects_non_pangram_sets() {
        assert!(Puzzle::from_letters(set("fort")).is_err());
        assert!(Puzzle::from_letters(LetterSet::EMPTY).is_err());
    }

    #[test]
    fn keys_are_distinct_per_center() {
        let puzzles = Puzzle::from_letters(set("factory")).unwrap();
        let keys: Vec<&str> = puzzles.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "Acforty", "aCforty", "acForty", "acfOrty", "acfoRty", "acforTy", "acfortY"
            ]
        );
    }

    #[test]
    fn outer_letters_exclude_center() {
        let puzzle = Puzzle::new(set("factory"), letter('t')).unwrap();
        assert_eq!(puzzle.outer_letters(), set("facory"));
        assert_eq!(puzzle.outer_letters().len(), 6);
    }

    #[test]
    fn accepts_requires_center_and_subset() {
        let puzzle = Puzzle::new(set("factory"), letter('a')).unwrap();
        assert!(puzzle.accepts(set("tarot")));
        assert!(puzzle.accepts(set("factory")));
        assert!(!puzzle.accepts(set("fort"))); // no center
        assert!(!puzzle.accepts(set("after"))); // uses 'e'
    }

    #[test]
    fn parse_round_trips_key() {
        let puzzle: Puzzle = "adfloRw".parse().unwrap();
        assert_eq!(puzzle.key(), "adfloRw");
        assert_eq!(puzzle.center(), letter('r'));

        // Order of letters in the input does not matter
        let shuffled: Puzzle = "wolfRad".parse().unwrap();
        assert_eq!(shuffled, puzzle);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "adflorw".parse::<Puzzle>(),
            Err(PuzzleError::MissingCenter)
        );
        assert_eq!(
            "ADflorw".parse::<Puzzle>(),
            Err(PuzzleError::MultipleCenters('a', 'd'))
        );
        assert_eq!(
            "aadfloR".parse::<Puzzle>(),
            Err(PuzzleError::DuplicateLetter('a'))
        );
        assert_eq!(
            "abcD".parse::<Puzzle>(),
            Err(PuzzleError::WrongLetterCount(4))
        );
        assert!(matches!(
            "abc-efG".parse::<Puzzle>(),
            Err(PuzzleError::InvalidLetter(_))
        ));
    }
}
