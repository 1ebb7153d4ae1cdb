//! Accumulated constraint state
//!
//! The knowledge gathered from all feedback so far: fixed letters per
//! position (greens), letters known present somewhere (yellows), and letters
//! known absent (greys). Green knowledge dominates: a letter fixed at a
//! position is removed from both the yellow and grey sets during
//! normalization.
//!
//! Folding tracks letter presence, not per-letter minimum counts across
//! guesses. The filter derives count constraints from a single state, so two
//! yellows of the same letter in different guesses collapse into one
//! presence bit. This mirrors the original solver's behavior and the tests
//! characterize it.

use std::fmt;

use super::{Feedback, LetterMask, Pattern, Word};

/// Placeholder character for "unknown position" / "no letters"
pub const PLACEHOLDER: char = '_';

/// Error type for invalid constraint input strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStateError {
    GreenLength { expected: usize, actual: usize },
    InvalidGreenChar(char),
    InvalidYellowChar(char),
    InvalidGreyChar(char),
}

impl fmt::Display for ParseStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GreenLength { expected, actual } => {
                write!(
                    f,
                    "Green pattern must be exactly {expected} characters, got {actual}"
                )
            }
            Self::InvalidGreenChar(c) => {
                write!(f, "Green pattern may only contain letters and '{PLACEHOLDER}', got '{c}'")
            }
            Self::InvalidYellowChar(c) => {
                write!(f, "Yellow letters must be alphabetic, got '{c}'")
            }
            Self::InvalidGreyChar(c) => {
                write!(f, "Grey letters must be alphabetic, got '{c}'")
            }
        }
    }
}

impl std::error::Error for ParseStateError {}

/// The accumulated, normalized knowledge from all feedback received so far
///
/// Immutable during evaluation: [`ConstraintState::fold`] returns a new
/// state, so parallel scoring can share one frozen snapshot freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintState {
    greens: Vec<Option<u8>>,
    yellows: LetterMask,
    greys: LetterMask,
}

impl ConstraintState {
    /// State with no knowledge for a given word length
    #[must_use]
    pub fn empty(word_length: usize) -> Self {
        Self {
            greens: vec![None; word_length],
            yellows: LetterMask::EMPTY,
            greys: LetterMask::EMPTY,
        }
    }

    /// Parse the three constraint input strings
    ///
    /// `greens` is a fixed-length pattern with `'_'` for unknown positions;
    /// `yellows` and `greys` are letter lists, or `"_"` for "none". Input is
    /// case-folded, and the initial masks are normalized so green letters
    /// drop out of the yellow and grey sets.
    ///
    /// # Errors
    /// Returns `ParseStateError` on wrong green-pattern length or any
    /// non-alphabetic character outside the placeholder.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::ConstraintState;
    ///
    /// let state = ConstraintState::parse("_r___", "ae", "st", 5).unwrap();
    /// assert_eq!(state.greens()[1], Some(b'r'));
    /// assert!(state.yellows().contains(b'a'));
    /// assert!(state.greys().contains(b's'));
    /// ```
    pub fn parse(
        greens: &str,
        yellows: &str,
        greys: &str,
        word_length: usize,
    ) -> Result<Self, ParseStateError> {
        let greens = greens.to_lowercase();
        let yellows = yellows.to_lowercase();
        let greys = greys.to_lowercase();

        if greens.chars().count() != word_length {
            return Err(ParseStateError::GreenLength {
                expected: word_length,
                actual: greens.chars().count(),
            });
        }

        let mut green_slots = Vec::with_capacity(word_length);
        for c in greens.chars() {
            if c == PLACEHOLDER {
                green_slots.push(None);
            } else if c.is_ascii_lowercase() {
                green_slots.push(Some(c as u8));
            } else {
                return Err(ParseStateError::InvalidGreenChar(c));
            }
        }

        let yellow_mask = parse_letter_list(&yellows).map_err(ParseStateError::InvalidYellowChar)?;
        let grey_mask = parse_letter_list(&greys).map_err(ParseStateError::InvalidGreyChar)?;

        let mut state = Self {
            greens: green_slots,
            yellows: yellow_mask,
            greys: grey_mask,
        };

        // Green precedence: a fixed letter is neither yellow nor grey
        let green_letters = state.green_letters();
        state.yellows = state.yellows - green_letters;
        state.greys = state.greys - green_letters - state.yellows;

        Ok(state)
    }

    /// Fixed letters per position, `None` where unknown
    #[inline]
    #[must_use]
    pub fn greens(&self) -> &[Option<u8>] {
        &self.greens
    }

    /// Letters confirmed present somewhere, exact position unknown
    #[inline]
    #[must_use]
    pub const fn yellows(&self) -> LetterMask {
        self.yellows
    }

    /// Letters confirmed absent (after green precedence)
    #[inline]
    #[must_use]
    pub const fn greys(&self) -> LetterMask {
        self.greys
    }

    /// Word length this state constrains
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.greens.len()
    }

    /// Set of letters fixed by the green positions
    #[must_use]
    pub fn green_letters(&self) -> LetterMask {
        self.greens.iter().flatten().copied().collect()
    }

    /// Fold one guess's feedback pattern into the state
    ///
    /// Returns a new, independent state; `self` is untouched. Each position's
    /// feedback routes the guessed letter into this turn's green, yellow, or
    /// grey accumulator, then the accumulators merge into the state under the
    /// green-precedence rule: this turn's greens are subtracted from yellow
    /// and grey, and grey also yields to the cumulative yellow set.
    #[must_use]
    pub fn fold(&self, guess: &Word, pattern: Pattern) -> Self {
        debug_assert_eq!(guess.len(), self.word_length());

        let mut next = self.clone();
        let mut green = LetterMask::EMPTY;
        let mut yellow = LetterMask::EMPTY;
        let mut grey = LetterMask::EMPTY;

        for (i, symbol) in pattern.decode(self.word_length()).into_iter().enumerate() {
            let letter = guess.chars()[i];
            match symbol {
                Feedback::Exact => {
                    next.greens[i] = Some(letter);
                    green.insert(letter);
                }
                Feedback::Present => yellow.insert(letter),
                Feedback::Absent => grey.insert(letter),
            }
        }

        next.yellows = next.yellows | (yellow - green);
        next.greys = next.greys | (grey - green - next.yellows);
        next.yellows = next.yellows - green;
        next.greys = next.greys - green - next.yellows;

        next
    }
}

/// Parse a yellow/grey letter list, where a lone placeholder means "none"
fn parse_letter_list(input: &str) -> Result<LetterMask, char> {
    let mut mask = LetterMask::EMPTY;
    if input == PLACEHOLDER.to_string() {
        return Ok(mask);
    }
    for c in input.chars() {
        if c.is_ascii_lowercase() {
            mask.insert(c as u8);
        } else {
            return Err(c);
        }
    }
    Ok(mask)
}
