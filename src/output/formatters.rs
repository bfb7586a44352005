//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a puzzle's score relative to the best puzzle
#[must_use]
pub fn score_bar(score: u32, best: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(best), width)
}

/// Split a canonical key into the text before the center, the center, and the rest
///
/// Returns `None` if the key has no upper-case letter.
#[must_use]
pub fn split_key(key: &str) -> Option<(&str, char, &str)> {
    let (pos, center) = key.char_indices().find(|(_, c)| c.is_ascii_uppercase())?;
    Some((&key[..pos], center, &key[pos + center.len_utf8()..]))
}

/// "1 word", "2 words"
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
