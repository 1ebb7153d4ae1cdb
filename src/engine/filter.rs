//! Constraint filtering
//!
//! Reduces a word list to the subset consistent with every constraint in a
//! [`ConstraintState`]. Letter counting uses flat 26-slot arrays and the
//! letter-set checks use bitmask arithmetic, keeping the per-word work
//! branch-light.

use crate::core::{ConstraintState, LetterMask, Word, letter_index};

/// Filter `words` down to those consistent with `state`
///
/// A word survives when:
/// - every fixed green position matches,
/// - it contains no strictly-grey letter (grey and neither green nor yellow
///   anywhere),
/// - each letter meets its minimum count (green occurrences, plus one if the
///   letter is also yellow),
/// - each grey-flagged letter occurs exactly as often as the greens show
///   (zero when the letter has no green occurrence).
///
/// Relative input order is preserved.
#[must_use]
pub fn filter_words(words: &[Word], state: &ConstraintState) -> Vec<Word> {
    let mut green_counts = [0u8; 26];
    let mut green_letters = LetterMask::EMPTY;
    for &slot in state.greens() {
        if let Some(letter) = slot {
            green_counts[letter_index(letter)] += 1;
            green_letters.insert(letter);
        }
    }

    // Minimum total occurrences per letter: what the greens pin down, plus
    // one more if the letter is also known present elsewhere
    let mut min_counts = green_counts;
    for letter in state.yellows().letters() {
        min_counts[letter_index(letter)] += 1;
    }

    // Letters that may not appear at all
    let strict_greys = state.greys() - green_letters - state.yellows();

    words
        .iter()
        .filter(|word| {
            word.chars()
                .iter()
                .zip(state.greens())
                .all(|(&c, &fixed)| fixed.is_none_or(|g| g == c))
                && satisfies_counts(word, state, &green_counts, &min_counts, strict_greys)
        })
        .cloned()
        .collect()
}

fn satisfies_counts(
    word: &Word,
    state: &ConstraintState,
    green_counts: &[u8; 26],
    min_counts: &[u8; 26],
    strict_greys: LetterMask,
) -> bool {
    let word_counts = word.letter_counts();
    let word_letters: LetterMask = word.chars().iter().copied().collect();

    if word_letters.intersects(strict_greys) {
        return false;
    }

    for letter in b'a'..=b'z' {
        let i = letter_index(letter);
        if word_counts[i] < min_counts[i] {
            return false;
        }
        // Grey caps the letter at exactly its green count
        if state.greys().contains(letter) && word_counts[i] != green_counts[i] {
            return false;
        }
    }

    true
}
