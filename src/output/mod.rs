//! Terminal output formatting

pub mod display;

pub use display::print_suggest_result;
