//! Ranking of puzzles and words
//!
//! Both orders are total: the secondary key breaks every score tie, so the
//! output is deterministic no matter how the inputs were produced.

use super::evaluator::ScoredPuzzle;
use crate::core::ScoredWord;
use std::cmp::Ordering;

/// Order puzzles by score (highest first), then by canonical key
///
/// Keys compare byte-wise, so an upper-case center sorts before the same
/// letter in lower case.
#[must_use]
pub fn compare_puzzles(a: &ScoredPuzzle<'_>, b: &ScoredPuzzle<'_>) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| a.key().cmp(b.key()))
}

/// Order words by score (highest first), then alphabetically
#[must_use]
pub fn compare_words(a: &ScoredWord, b: &ScoredWord) -> Ordering {
    b.score()
        .cmp(&a.score())
        .then_with(|| a.text().cmp(b.text()))
}

/// Rank puzzles without modifying the input
#[must_use]
pub fn rank_puzzles<'p, 'a>(puzzles: &'p [ScoredPuzzle<'a>]) -> Vec<&'p ScoredPuzzle<'a>> {
    let mut ranked: Vec<&ScoredPuzzle> = puzzles.iter().collect();
    ranked.sort_unstable_by(|a, b| compare_puzzles(a, b));
    ranked
}

/// Rank words without modifying the input
///
/// # Examples
/// ```
/// use spelling_bee::core::ScoredWord;
/// use spelling_bee::solver::rank_words;
///
/// let words: Vec<ScoredWord> = ["tray", "crafty", "carrot", "factory"]
///     .into_iter()
///     .map(|w| ScoredWord::classify(w).unwrap())
///     .collect();
///
/// let ranked: Vec<&str> = rank_words(&words).into_iter().map(ScoredWord::text).collect();
/// assert_eq!(ranked, vec!["factory", "carrot", "crafty", "tray"]);
/// ```
#[must_use]
pub fn rank_words<'a, I>(words: I) -> Vec<&'a ScoredWord>
where
    I: IntoIterator<Item = &'a ScoredWord>,
{
    let mut ranked: Vec<&ScoredWord> = words.into_iter().collect();
    ranked.sort_unstable_by(|a, b| compare_words(a, b));
    ranked
}

/// Highest scoring puzzle, using the same order as `rank_puzzles`
#[must_use]
pub fn best_puzzle<'p, 'a>(puzzles: &'p [ScoredPuzzle<'a>]) -> Option<&'p ScoredPuzzle<'a>> {
    puzzles.iter().min_by(|a, b| compare_puzzles(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;
    use crate::solver::{LetterSetIndex, evaluate};

    fn words(texts: &[&str]) -> Vec<ScoredWord> {
        texts
            .iter()
            .map(|&t| ScoredWord::classify(t).unwrap())
            .collect()
    }

    fn index(texts: &[&str]) -> LetterSetIndex {
        let mut index = LetterSetIndex::new();
        for word in words(texts) {
            index.add_word(word).unwrap();
        }
        index
    }

    #[test]
    fn words_by_score_then_text() {
        let input = words(&["tray", "cocoa", "fact", "factory", "actor", "raft"]);
        let ranked: Vec<&str> = rank_words(&input).into_iter().map(ScoredWord::text).collect();
        assert_eq!(ranked, vec!["factory", "actor", "cocoa", "fact", "raft", "tray"]);
    }

    #[test]
    fn rank_words_leaves_input_untouched() {
        let input = words(&["tray", "factory"]);
        let _ = rank_words(&input);
        assert_eq!(input[0].text(), "tray");
    }

    #[test]
    fn puzzles_by_score_then_key() {
        let index = index(&["factory", "fort", "tarot", "cocoa", "actor"]);
        let puzzles: Vec<ScoredPuzzle> = Puzzle::from_letters("factory".parse().unwrap())
            .unwrap()
            .values()
            .map(|p| evaluate(p, &index))
            .collect();

        let ranked: Vec<(&str, u32)> = rank_puzzles(&puzzles)
            .into_iter()
            .map(|p| (p.key(), p.total_score()))
            .collect();

        // r and t both score 25; the upper-case 'R' sorts first
        assert_eq!(
            ranked,
            vec![
                ("acfOrty", 30),
                ("Acforty", 29),
                ("acfoRty", 25),
                ("acforTy", 25),
                ("aCforty", 24),
                ("acForty", 15),
                ("acfortY", 14),
            ]
        );
    }

    #[test]
    fn ties_broken_by_key_bytes() {
        let index = index(&["factory"]);
        let puzzles: Vec<ScoredPuzzle> = Puzzle::from_letters("factory".parse().unwrap())
            .unwrap()
            .values()
            .map(|p| evaluate(p, &index))
            .collect();

        let keys: Vec<&str> = rank_puzzles(&puzzles)
            .into_iter()
            .map(ScoredPuzzle::key)
            .collect();
        assert_eq!(
            keys,
            vec!["Acforty", "aCforty", "acForty", "acfOrty", "acfoRty", "acforTy", "acfortY"]
        );
        assert_eq!(best_puzzle(&puzzles).map(ScoredPuzzle::key), Some("Acforty"));
    }

    #[test]
    fn best_puzzle_of_nothing() {
        assert!(best_puzzle(&[]).is_none());
    }
}
