//! Word list loading
//!
//! The dictionary is a runtime input: a plain text file with one candidate
//! word per line.

pub mod loader;
