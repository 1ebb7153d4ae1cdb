//! Wordle Minimax Solver - CLI
//!
//! One-shot solver: pass the accumulated feedback as three constraint
//! strings and get back the remaining solutions plus the guesses ranked by
//! worst-case remaining solutions.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use wordle_minimax::{
    commands::{GuessPool, SuggestConfig, run_suggest},
    core::ConstraintState,
    output::print_suggest_result,
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Rank Wordle guesses by worst-case remaining solutions",
    version
)]
struct Cli {
    /// Green pattern: fixed letters in position, '_' for unknown (e.g. "_r_n_")
    greens: String,

    /// Letters known present but misplaced, or '_' for none (e.g. "ae")
    yellows: String,

    /// Letters known absent, or '_' for none (e.g. "stli")
    greys: String,

    /// Word list file, one word per line
    #[arg(short, long, default_value = "valid-wordle-words.txt")]
    wordlist: PathBuf,

    /// Puzzle word length
    #[arg(short, long, default_value_t = 5)]
    length: usize,

    /// Only evaluate guesses that are themselves still-possible solutions
    #[arg(long)]
    candidates_only: bool,

    /// How many top guesses to show
    #[arg(short, long, default_value_t = 10)]
    top: usize,

    /// List the remaining solutions verbatim when at most this many remain
    #[arg(long, default_value_t = 10)]
    print_limit: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let overall_start = Instant::now();

    let cli = Cli::parse();

    // Input validation happens before any computation
    let state = ConstraintState::parse(&cli.greens, &cli.yellows, &cli.greys, cli.length)?;

    println!("Loading word list from '{}'...", cli.wordlist.display());
    let load_start = Instant::now();
    let dictionary = load_from_file(&cli.wordlist, cli.length)?;
    println!(
        "Loaded {} valid words. ({:.2}s)",
        dictionary.len(),
        load_start.elapsed().as_secs_f64()
    );

    let config = SuggestConfig {
        word_length: cli.length,
        guess_pool: if cli.candidates_only {
            GuessPool::RemainingOnly
        } else {
            GuessPool::AllWords
        },
        top_results: cli.top,
        print_limit: cli.print_limit,
        show_progress: true,
    };

    println!("\nFiltering possible solutions and evaluating next guesses...");
    let result = run_suggest(&state, &dictionary, &config);
    print_suggest_result(&result, &config);

    println!(
        "\nTotal execution time: {:.2}s",
        overall_start.elapsed().as_secs_f64()
    );
    Ok(())
}
