//! Spelling Bee Solver - CLI
//!
//! Finds the Spelling Bee puzzle with the highest total score for a dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spelling_bee::{
    commands::{SolveConfig, inspect_puzzle, score_words, solve},
    core::Alphabet,
    output::{print_inspect_result, print_solve_result, print_word_reports},
    solver::Solver,
    wordlists::{SAMPLE, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Finds the highest scoring Spelling Bee puzzle for a dictionary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'sample' (default, embedded) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "sample")]
    wordlist: String,

    /// Letter left out of the alphabet, or 'none' to allow all 26
    #[arg(short = 'x', long, global = true, default_value = "s")]
    exclude: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every puzzle and list the words of the best one (default)
    Solve {
        /// Number of puzzles to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show how words are scored and whether they are indexed
    Score {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Trace the evaluation of one puzzle, e.g. `adfloRw`
    Inspect {
        /// Puzzle letters with the center letter in upper case
        key: String,
    },
}

/// Load the dictionary selected by the -w flag
fn load_words(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "sample" => Ok(SAMPLE.iter().map(|&w| w.to_string()).collect()),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist '{path}'")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let alphabet = Alphabet::from_exclusion(&cli.exclude)
        .map_err(|e| anyhow::anyhow!("Invalid --exclude '{}': {e}", cli.exclude))?;

    // Default to Solve if no command given
    let command = cli.command.unwrap_or(Commands::Solve {
        top: 10,
        quiet: false,
    });

    match command {
        Commands::Solve { top, quiet } => run_solve_command(&cli.wordlist, alphabet, top, quiet),
        Commands::Score { words } => {
            run_score_command(&words, alphabet);
            Ok(())
        }
        Commands::Inspect { key } => run_inspect_command(&cli.wordlist, alphabet, &key),
    }
}

fn build_solver(wordlist: &str, alphabet: Alphabet) -> Result<Solver> {
    let words = load_words(wordlist)?;
    log::info!("Loaded {} words from '{wordlist}'", words.len());
    Ok(Solver::from_words(alphabet, &words))
}

fn run_solve_command(wordlist: &str, alphabet: Alphabet, top: usize, quiet: bool) -> Result<()> {
    let solver = build_solver(wordlist, alphabet)?;
    let config = SolveConfig::new(top).with_progress(!quiet);
    let result = solve(&config, &solver).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, alphabet);
    Ok(())
}

fn run_score_command(words: &[String], alphabet: Alphabet) {
    let solver = Solver::new(alphabet);
    let reports = score_words(words, &solver);
    print_word_reports(&reports);
}

fn run_inspect_command(wordlist: &str, alphabet: Alphabet, key: &str) -> Result<()> {
    let solver = build_solver(wordlist, alphabet)?;
    let result = inspect_puzzle(key, &solver).map_err(|e| anyhow::anyhow!(e))?;

    print_inspect_result(&result);
    Ok(())
}
