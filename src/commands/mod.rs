//! Command implementations

pub mod suggest;

pub use suggest::{GuessPool, SuggestConfig, SuggestResult, run_suggest};
