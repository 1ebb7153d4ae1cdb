//! Core domain types
//!
//! The fundamental value types of the solver: words, letter sets, feedback
//! patterns, and the accumulated constraint state. Everything here is pure
//! and independent of the evaluation machinery.

mod mask;
mod pattern;
mod state;
mod word;

pub use mask::LetterMask;
pub use pattern::{Feedback, Pattern};
pub use state::{ConstraintState, ParseStateError, PLACEHOLDER};
pub use word::{Word, WordError};

/// Index of a lowercase ASCII letter in the 26-slot count arrays.
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}
