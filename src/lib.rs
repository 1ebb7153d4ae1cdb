//! Wordle Minimax Solver
//!
//! A constraint solver and guess ranker for Wordle-style puzzles. Given the
//! feedback accumulated so far (fixed positions, letters known present,
//! letters known absent), it filters a dictionary down to the words still
//! consistent with every constraint and ranks each candidate guess by its
//! worst case: the size of the largest group of remaining solutions that
//! would produce identical feedback. The guess minimizing that worst case
//! guarantees the smallest remaining search space.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_minimax::core::{ConstraintState, Pattern, Word};
//!
//! let guess = Word::new("crate", 5).unwrap();
//! let answer = Word::new("crane", 5).unwrap();
//!
//! // Simulate the feedback CRATE would receive if the answer were CRANE
//! let pattern = Pattern::calculate(&guess, &answer);
//!
//! // Fold it into the accumulated knowledge
//! let state = ConstraintState::empty(5).fold(&guess, pattern);
//! assert_eq!(state.greens()[0], Some(b'c'));
//! ```

// Core domain types
pub mod core;

// Filtering, scoring, and ranking engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
