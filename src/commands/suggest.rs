//! Guess suggestion command
//!
//! Orchestrates one full run: filter the dictionary down to the remaining
//! solutions, evaluate the guess pool in parallel, and rank the results.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::core::{ConstraintState, Word};
use crate::engine::{CandidateScore, evaluate_guesses, filter_words, rank_guesses};

/// Which words to consider as guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessPool {
    /// Evaluate every dictionary word, including impossible ones that may
    /// split the solutions better
    AllWords,
    /// Evaluate only the remaining solutions
    RemainingOnly,
}

/// Configuration for a suggestion run
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    pub word_length: usize,
    pub guess_pool: GuessPool,
    /// How many ranked guesses to display
    pub top_results: usize,
    /// List the remaining solutions verbatim when the set is at most this big
    pub print_limit: usize,
    /// Render a progress bar during evaluation
    pub show_progress: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            guess_pool: GuessPool::AllWords,
            top_results: 10,
            print_limit: 10,
            show_progress: false,
        }
    }
}

/// Result of a suggestion run
pub struct SuggestResult {
    /// Dictionary words still consistent with every constraint
    pub remaining: Vec<Word>,
    /// All evaluated candidates in recommendation order; empty when the
    /// remaining set was small enough to skip evaluation
    pub ranked: Vec<CandidateScore>,
    pub filter_time: Duration,
    pub evaluate_time: Duration,
}

/// Run the filter → evaluate → rank pipeline
///
/// Evaluation is skipped when two or fewer solutions remain: no guess can
/// improve on simply trying them.
#[must_use]
pub fn run_suggest(
    state: &ConstraintState,
    dictionary: &[Word],
    config: &SuggestConfig,
) -> SuggestResult {
    let filter_start = Instant::now();
    let remaining = filter_words(dictionary, state);
    let filter_time = filter_start.elapsed();

    if remaining.len() <= 2 {
        return SuggestResult {
            remaining,
            ranked: Vec::new(),
            filter_time,
            evaluate_time: Duration::ZERO,
        };
    }

    let guess_pool = match config.guess_pool {
        GuessPool::AllWords => dictionary,
        GuessPool::RemainingOnly => &remaining,
    };

    let progress = config.show_progress.then(|| {
        let bar = ProgressBar::new(guess_pool.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        bar
    });

    let evaluate_start = Instant::now();
    let mut ranked = evaluate_guesses(state, guess_pool, &remaining, progress.as_ref());
    let evaluate_time = evaluate_start.elapsed();

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    rank_guesses(&mut ranked);

    SuggestResult {
        remaining,
        ranked,
        filter_time,
        evaluate_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t, 5).unwrap()).collect()
    }

    #[test]
    fn suggest_end_to_end() {
        let dictionary = words(&["crane", "crate", "grate", "irate", "slate", "zzzzz"]);
        let state = ConstraintState::parse("____e", "_", "z", 5).unwrap();
        let config = SuggestConfig::default();

        let result = run_suggest(&state, &dictionary, &config);

        // ZZZZZ is excluded, everything else ends in E
        assert_eq!(result.remaining.len(), 5);
        // The whole dictionary was evaluated
        assert_eq!(result.ranked.len(), dictionary.len());
        // Ranking is by score ascending
        for pair in result.ranked.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn suggest_remaining_only_pool() {
        let dictionary = words(&["crane", "crate", "grate", "zzzzz"]);
        let state = ConstraintState::parse("_____", "_", "z", 5).unwrap();
        let config = SuggestConfig {
            guess_pool: GuessPool::RemainingOnly,
            ..SuggestConfig::default()
        };

        let result = run_suggest(&state, &dictionary, &config);
        assert_eq!(result.remaining.len(), 3);
        assert_eq!(result.ranked.len(), 3);
        assert!(result.ranked.iter().all(|s| s.is_possible));
    }

    #[test]
    fn suggest_skips_evaluation_for_tiny_remainder() {
        let dictionary = words(&["crane", "crate", "zzzzz"]);
        let state = ConstraintState::parse("cra_e", "_", "_", 5).unwrap();

        let result = run_suggest(&state, &dictionary, &SuggestConfig::default());
        assert_eq!(result.remaining.len(), 2);
        assert!(result.ranked.is_empty());
        assert_eq!(result.evaluate_time, Duration::ZERO);
    }

    #[test]
    fn suggest_no_solutions_left() {
        let dictionary = words(&["crane", "crate"]);
        let state = ConstraintState::parse("zzzzz", "_", "_", 5).unwrap();

        let result = run_suggest(&state, &dictionary, &SuggestConfig::default());
        assert!(result.remaining.is_empty());
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn suggest_best_guess_splits_candidates() {
        // CRANE distinguishes the T-words from each other better than ZZZZZ
        let dictionary = words(&["crate", "grate", "irate", "zzzzz"]);
        let state = ConstraintState::parse("_____", "_", "_", 5).unwrap();

        let result = run_suggest(&state, &dictionary, &SuggestConfig::default());
        let best = &result.ranked[0];
        let worst = result.ranked.last().unwrap();
        assert!(best.score <= worst.score);
        assert_ne!(best.word.text(), "zzzzz");
    }
}
