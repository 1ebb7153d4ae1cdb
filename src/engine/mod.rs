//! Filtering, scoring, and ranking engine
//!
//! Consumes a frozen [`ConstraintState`](crate::core::ConstraintState) and a
//! dictionary, produces the set of still-possible solutions and a ranked
//! list of next guesses scored by worst-case remaining solutions.

mod evaluate;
mod filter;
mod rank;
mod score;

pub use evaluate::{CandidateScore, evaluate_guesses};
pub use filter::filter_words;
pub use rank::rank_guesses;
pub use score::max_group_size;
