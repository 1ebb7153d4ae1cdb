//! Feedback simulation and pattern encoding
//!
//! A pattern encodes the feedback for one guess against one hypothetical
//! answer using base-3 encoding:
//! - 0 = Absent (grey: letter not in word)
//! - 1 = Present (yellow: letter in word, wrong position)
//! - 2 = Exact (green: letter in correct position)
//!
//! Each position contributes digit × 3^position, so for word length L the
//! index space is exactly `[0, 3^L)`. The dense index lets the scorer group
//! solutions in a flat counter array instead of a hash map.

use super::Word;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not in the answer (or all its occurrences already accounted for)
    Absent,
    /// Letter in the answer but at a different position
    Present,
    /// Letter in the correct position
    Exact,
}

impl Feedback {
    /// Radix-3 digit for this feedback symbol
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    /// Inverse of [`Feedback::digit`]
    ///
    /// # Panics
    /// Panics if `digit >= 3`.
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u32) -> Self {
        match digit {
            0 => Self::Absent,
            1 => Self::Present,
            2 => Self::Exact,
            _ => panic!("feedback digit must be < 3"),
        }
    }
}

/// Feedback pattern for a whole guess, encoded as a dense radix-3 index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u32);

impl Pattern {
    /// Create a pattern from a raw index
    ///
    /// The caller is responsible for keeping `value` within the pattern
    /// space of the word length in play.
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw pattern index
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Size of the pattern index space for a given word length: `3^len`
    #[inline]
    #[must_use]
    pub const fn space_size(word_length: usize) -> usize {
        3usize.pow(word_length as u32)
    }

    /// The all-exact pattern for a given word length
    #[must_use]
    pub const fn perfect(word_length: usize) -> Self {
        Self(Self::space_size(word_length) as u32 - 1)
    }

    /// Encode a feedback sequence into its pattern index
    #[must_use]
    pub fn from_feedback(feedback: &[Feedback]) -> Self {
        let mut value = 0u32;
        let mut multiplier = 1u32;
        for &symbol in feedback {
            value += symbol.digit() * multiplier;
            multiplier *= 3;
        }
        Self(value)
    }

    /// Decode the pattern index back into per-position feedback
    ///
    /// Inverse of [`Pattern::from_feedback`] for patterns within
    /// `[0, 3^word_length)`.
    #[must_use]
    pub fn decode(self, word_length: usize) -> Vec<Feedback> {
        let mut value = self.0;
        let mut feedback = Vec::with_capacity(word_length);
        for _ in 0..word_length {
            feedback.push(Feedback::from_digit(value % 3));
            value /= 3;
        }
        feedback
    }

    /// Simulate the feedback `guess` would receive if `answer` were the
    /// hidden word
    ///
    /// Implements the standard Wordle rules, including correct multiset
    /// handling of repeated letters:
    /// 1. First pass marks exact matches and consumes those letters from the
    ///    answer's letter counts.
    /// 2. Second pass marks a remaining position Present only while the
    ///    answer still has unconsumed occurrences of that letter.
    ///
    /// The pass order matters: greens must consume their letters before any
    /// yellow is awarded, or repeated letters get double-counted
    /// (e.g. SPEED vs ERASE).
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crate", 5).unwrap();
    /// let answer = Word::new("crane", 5).unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(exact) R(exact) A(exact) T(absent) E(exact)
    /// // 2 + 2×3 + 2×9 + 0×27 + 2×81 = 188
    /// assert_eq!(pattern.value(), 188);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len());

        let mut remaining = answer.letter_counts();
        let mut feedback = vec![Feedback::Absent; guess.len()];

        // First pass: exact matches consume their letter
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                feedback[i] = Feedback::Exact;
                remaining[super::letter_index(g)] -= 1;
            }
        }

        // Second pass: misplaced letters, bounded by what the answer has left
        for (i, &g) in guess.chars().iter().enumerate() {
            if feedback[i] == Feedback::Exact {
                continue;
            }
            let count = &mut remaining[super::letter_index(g)];
            if *count > 0 {
                feedback[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self::from_feedback(&feedback)
    }
}
