//! Word list loading utilities
//!
//! A word source is line oriented: one raw word per line, surrounding
//! whitespace ignored, blank lines skipped. No validation happens here; the
//! solver decides which words it can use.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Lazily read words from any buffered reader
///
/// Yields one trimmed word per non-blank line. I/O errors are passed through
/// to the caller.
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::read_words;
///
/// let input = "fort\n\n  tarot \nfactory\n";
/// let words: Vec<String> = read_words(input.as_bytes()).collect::<Result<_, _>>().unwrap();
/// assert_eq!(words, vec!["fort", "tarot", "factory"]);
/// ```
pub fn read_words<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Ok(trimmed.to_string()))
            }
        }
        Err(e) => Some(Err(e)),
    })
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("enable1.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    read_words(BufReader::new(file)).collect()
}

/// Convert an embedded string slice to owned words, skipping blanks
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
