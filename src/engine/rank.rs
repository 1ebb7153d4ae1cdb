//! Ranking of scored candidates
//!
//! Orders candidates by score ascending (lower worst case is better), with
//! still-possible solutions ranking above non-solutions of equal score: a
//! guess that could also be the answer is strictly preferable at the same
//! worst case.

use super::evaluate::CandidateScore;

/// Sort candidate scores into recommendation order
///
/// Stable: ties beyond (score, possible-solution membership) keep their
/// evaluation order.
pub fn rank_guesses(scores: &mut [CandidateScore]) {
    scores.sort_by(|a, b| {
        a.score
            .cmp(&b.score)
            .then_with(|| b.is_possible.cmp(&a.is_possible))
    });
}
