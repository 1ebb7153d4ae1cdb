//! Display functions for suggestion results

use colored::Colorize;

use crate::commands::{SuggestConfig, SuggestResult};

/// Print the remaining solutions and the ranked guess recommendations
pub fn print_suggest_result(result: &SuggestResult, config: &SuggestConfig) {
    println!(
        "Found {} possible solutions matching criteria. (Filter time: {:.2}s)",
        result.remaining.len().to_string().bright_yellow().bold(),
        result.filter_time.as_secs_f64()
    );

    if result.remaining.is_empty() {
        println!("\n{}", "No possible words match the given constraints.".red());
        return;
    }

    if result.remaining.len() <= config.print_limit {
        println!("\nPossible solutions ({} total):", result.remaining.len());
        let mut sorted = result.remaining.clone();
        sorted.sort();
        for solution in &sorted {
            println!("- {}", solution.text().to_uppercase());
        }
    }

    match result.remaining.len() {
        1 => {
            println!("\n{}", "Solution found.".green().bold());
            return;
        }
        2 => {
            println!("\n{}", "Only 2 solutions left; guess either one.".green());
            return;
        }
        _ => {}
    }

    println!(
        "\nEvaluation complete. (Eval time: {:.2}s)",
        result.evaluate_time.as_secs_f64()
    );

    let Some(best) = result.ranked.first() else {
        println!("\n{}", "No valid guesses evaluated.".red());
        return;
    };

    println!(
        "\nBest score (minimum max remaining solutions): {}",
        best.score.to_string().bright_yellow().bold()
    );

    println!("Top guesses:");
    let mut showed_marker = false;
    for (rank, candidate) in result.ranked.iter().take(config.top_results).enumerate() {
        let marker = if candidate.is_possible {
            showed_marker = true;
            "*"
        } else {
            ""
        };
        println!(
            "  {}. {} (Score: {}){}",
            rank + 1,
            candidate.word.text().to_uppercase().cyan().bold(),
            candidate.score,
            marker.green()
        );
    }
    if showed_marker {
        println!("\n  {} = Guess is also a possible solution.", "(*)".green());
    }
}
