//! Word lists for Spelling Bee solving
//!
//! Provides an embedded sample dictionary compiled into the binary, plus a
//! loader for real word lists such as ENABLE.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE.len(), SAMPLE_COUNT);
    }

    #[test]
    fn sample_words_are_trimmed() {
        for &word in SAMPLE {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim(), "Word '{word}' has surrounding whitespace");
        }
    }

    #[test]
    fn sample_has_pangrams() {
        let pangrams = SAMPLE
            .iter()
            .filter(|w| {
                let mut letters: Vec<char> = w.chars().collect();
                letters.sort_unstable();
                letters.dedup();
                letters.len() == 7
            })
            .count();
        assert!(pangrams > 0, "Sample dictionary should contain pangrams");
    }
}
