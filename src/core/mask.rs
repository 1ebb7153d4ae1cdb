//! Letter set bitmask
//!
//! A `LetterMask` is a set of letters 'a'..='z' packed into a `u32`, one bit
//! per letter. The constraint state stores its yellow and grey letter sets
//! this way, and the filter combines them with plain bit arithmetic.

use std::fmt;
use std::ops::{BitOr, BitOrAssign, Sub};

/// A set of lowercase ASCII letters as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterMask(u32);

impl LetterMask {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Set containing a single letter
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(1 << (letter - b'a'))
    }

    /// Add a letter to the set
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= 1 << (letter - b'a');
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << (letter - b'a')) != 0
    }

    /// True if no letters are set
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if the two sets share any letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the letters in the set, in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl BitOr for LetterMask {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LetterMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Sub for LetterMask {
    type Output = Self;

    /// Set difference: letters in `self` but not in `rhs`
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }
}

impl FromIterator<u8> for LetterMask {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut mask = Self::EMPTY;
        for letter in iter {
            mask.insert(letter);
        }
        mask
    }
}

impl fmt::Display for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
