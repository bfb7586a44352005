//! Display functions for command results

use super::formatters::{plural, score_bar, split_key};
use crate::commands::{InspectResult, SolveResult, WordReport, WordSummary};
use crate::core::Alphabet;
use colored::Colorize;

/// Render a puzzle key with the center letter highlighted
fn highlight_key(key: &str) -> String {
    match split_key(key) {
        Some((before, center, after)) => format!(
            "{}{}{}",
            before.bright_white(),
            center.to_string().bright_yellow().bold(),
            after.bright_white()
        ),
        None => key.to_string(),
    }
}

fn print_words(words: &[WordSummary]) {
    for word in words {
        let line = format!("#{:<4} {:<20} {:>3} points", word.rank, word.text, word.score);
        if word.pangram {
            println!("   {} {}", line.green().bold(), "pangram".green());
        } else {
            println!("   {line}");
        }
    }
}

/// Print the result of a solve run
pub fn print_solve_result(result: &SolveResult, alphabet: Alphabet) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SPELLING BEE SOLVER".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let stats = &result.stats;
    println!("\n📖 {}", "Dictionary:".bright_cyan().bold());
    println!("   Alphabet:         {alphabet}");
    println!("   Words read:       {}", stats.words_read);
    println!("   Words indexed:    {}", stats.indexed);
    println!("   Letter sets:      {}", result.letter_sets);
    println!("   Puzzles scored:   {}", result.puzzle_count);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let Some(best) = result.best() else {
        println!(
            "\n{}",
            "❌ No word in the dictionary uses exactly 7 letters, so there are no puzzles"
                .red()
                .bold()
        );
        return;
    };

    println!(
        "\n🏆 {} {}",
        format!("Top {} puzzles", result.top.len()).bright_cyan().bold(),
        "(center letter capitalized)".bright_black()
    );
    for puzzle in &result.top {
        println!(
            "   #{:<3} {}  {} {} ({})",
            puzzle.rank,
            highlight_key(&puzzle.key),
            score_bar(puzzle.score, best.score, 20).green(),
            format!("{:>5} points", puzzle.score).bright_yellow(),
            plural(puzzle.word_count, "word")
        );
    }

    println!(
        "\n📝 {} {} {}",
        "Best puzzle".bright_cyan().bold(),
        highlight_key(&best.key),
        format!("accepts {}, best first:", plural(result.best_words.len(), "word")).bright_cyan()
    );
    print_words(&result.best_words);
}

/// Print word classifications
pub fn print_word_reports(reports: &[WordReport]) {
    println!("\n{}", "─".repeat(60).cyan());
    for report in reports {
        match (report.score, &report.letters) {
            (Some(score), Some(letters)) => {
                let pangram = if report.pangram { " pangram" } else { "" };
                println!(
                    "{:<20} {:>3} points  letters {}{}",
                    report.word.bright_yellow().bold(),
                    score,
                    letters,
                    pangram.green()
                );
            }
            _ => println!("{:<20} {}", report.word.bright_yellow().bold(), "unscored".red()),
        }

        match &report.rejection {
            None => println!("   {}", "✅ indexed".green()),
            Some(reason) => println!("   {} {}", "❌ skipped:".red(), reason),
        }
    }
}

/// Print the trace of a single puzzle evaluation
pub fn print_inspect_result(result: &InspectResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE:".bright_cyan().bold(),
        highlight_key(&result.key)
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🔍 {} ({} of 64 letter subsets used by the dictionary)",
        "Letter subsets:".bright_cyan().bold(),
        result.hits()
    );
    for subset in &result.subsets {
        if subset.is_hit() {
            println!(
                "   {:<8} {:>4} points  {}",
                subset.letters.green(),
                subset.score,
                subset.words.join(", ")
            );
        } else {
            println!("   {}", subset.letters.bright_black());
        }
    }

    println!(
        "\n📊 Total: {}",
        format!("{} points", result.score).bright_yellow().bold()
    );
    if !result.has_pangram() {
        println!(
            "{}",
            "⚠️  No pangram in the dictionary uses these letters".yellow()
        );
    }

    if !result.words.is_empty() {
        println!(
            "\n📝 {}",
            format!("{}:", plural(result.words.len(), "word"))
                .bright_cyan()
                .bold()
        );
        print_words(&result.words);
    }
}
