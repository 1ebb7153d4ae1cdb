//! Word list loading utilities
//!
//! Parses word list text into validated [`Word`]s: lines are trimmed,
//! case-folded, and skipped when they have the wrong length or contain
//! non-alphabetic characters. Duplicates keep their first occurrence.

use std::fs;
use std::path::Path;

use anyhow::{Context, ensure};
use rustc_hash::FxHashSet;

use crate::core::Word;

/// Parse word list content, keeping only valid words of the given length
///
/// Invalid lines are skipped silently, matching the tolerant treatment of
/// community word lists. Order of first occurrence is preserved.
#[must_use]
pub fn parse_word_list(content: &str, word_length: usize) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();

    content
        .lines()
        .filter_map(|line| Word::new(line.trim(), word_length).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Load and validate a word list from a file
///
/// # Errors
/// Fails if the file cannot be read, or if no valid words of the requested
/// length survive parsing. Both are fatal for a run: there is nothing to
/// filter or rank without a dictionary.
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> anyhow::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read word list '{}'", path.display()))?;

    let words = parse_word_list(&content, word_length);
    ensure!(
        !words.is_empty(),
        "no valid {word_length}-letter words found in '{}'",
        path.display()
    );

    Ok(words)
}
