//! Word scoring command
//!
//! Shows how individual words are classified and whether the index keeps them.

use crate::core::ScoredWord;
use crate::solver::Solver;

/// Classification of one word
pub struct WordReport {
    pub word: String,
    /// `None` when the word contains characters outside a-z
    pub score: Option<u32>,
    pub letters: Option<String>,
    pub pangram: bool,
    /// Why the word would be left out of the index, if it would be
    pub rejection: Option<String>,
}

impl WordReport {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Classify words against the solver's rules
pub fn score_words<S: AsRef<str>>(words: &[S], solver: &Solver) -> Vec<WordReport> {
    words
        .iter()
        .map(|raw| {
            let raw = raw.as_ref().trim();
            let classified = ScoredWord::classify(raw).ok();

            WordReport {
                word: raw.to_string(),
                score: classified.as_ref().map(ScoredWord::score),
                letters: classified.as_ref().map(|w| w.letter_set().to_string()),
                pangram: classified.as_ref().is_some_and(ScoredWord::is_pangram),
                rejection: solver.admit(raw).err().map(|e| e.to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn reports(words: &[&str]) -> Vec<WordReport> {
        let solver = Solver::new(Alphabet::default());
        score_words(words, &solver)
    }

    #[test]
    fn accepted_word() {
        let report = &reports(&["factory"])[0];
        assert_eq!(report.score, Some(14));
        assert_eq!(report.letters.as_deref(), Some("acforty"));
        assert!(report.pangram);
        assert!(report.is_accepted());
    }

    #[test]
    fn worthless_word_scored_but_rejected() {
        let report = &reports(&["bat"])[0];
        assert_eq!(report.score, Some(0));
        assert!(!report.is_accepted());
    }

    #[test]
    fn oversized_pangram_rejected() {
        let report = &reports(&["ablution"])[0];
        assert_eq!(report.score, Some(15));
        assert!(report.pangram);
        assert!(report.rejection.as_deref().unwrap().contains("8 distinct letters"));
    }

    #[test]
    fn excluded_letter_rejected() {
        let report = &reports(&["cats"])[0];
        assert_eq!(report.score, Some(1));
        assert_eq!(report.rejection.as_deref(), Some("Uses excluded letter 's'"));
    }

    #[test]
    fn malformed_word_has_no_score() {
        let report = &reports(&["x-ray"])[0];
        assert_eq!(report.score, None);
        assert_eq!(report.letters, None);
        assert!(!report.pangram);
        assert!(!report.is_accepted());
    }

    #[test]
    fn reports_keep_input_order() {
        let words: Vec<String> = reports(&["tray", " fort "])
            .into_iter()
            .map(|r| r.word)
            .collect();
        assert_eq!(words, vec!["tray", "fort"]);
    }
}
