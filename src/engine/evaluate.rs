//! Parallel candidate evaluation
//!
//! Scores every candidate in the guess pool. Each candidate is an
//! independent unit of work: it reads the frozen state and the shared
//! solution list, and produces exactly one output slot, so the parallel map
//! needs no locks or atomics. The only synchronization point is the final
//! collect.

use indicatif::ProgressBar;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::score::max_group_size;
use crate::core::{ConstraintState, Word};

/// A candidate guess with its minimax score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateScore {
    pub word: Word,
    /// Size of the largest feedback-indistinguishable solution group
    pub score: usize,
    /// True if the candidate is itself a still-possible solution
    pub is_possible: bool,
}

/// Score every candidate in `guess_pool` against `remaining_solutions`
///
/// Work is distributed dynamically across the rayon pool since per-candidate
/// cost varies with how the solutions split. The optional progress bar is
/// ticked once per candidate.
///
/// The output preserves `guess_pool` order; ranking is a separate step.
#[must_use]
pub fn evaluate_guesses(
    state: &ConstraintState,
    guess_pool: &[Word],
    remaining_solutions: &[Word],
    progress: Option<&ProgressBar>,
) -> Vec<CandidateScore> {
    let possible: FxHashSet<&str> = remaining_solutions.iter().map(Word::text).collect();

    guess_pool
        .par_iter()
        .map(|candidate| {
            let score = max_group_size(state, candidate, remaining_solutions);
            if let Some(bar) = progress {
                bar.inc(1);
            }
            CandidateScore {
                score,
                is_possible: possible.contains(candidate.text()),
                word: candidate.clone(),
            }
        })
        .collect()
}
