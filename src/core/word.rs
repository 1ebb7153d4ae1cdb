//! Word representation
//!
//! A `Word` is a fixed-length lowercase word. The puzzle length is a runtime
//! parameter, so validation takes the expected length instead of hardcoding 5.

use std::fmt;

use super::letter_index;

/// A fixed-length lowercase word
///
/// Stores the text alongside its raw bytes. Equality and ordering are
/// lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    chars: Vec<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `word_length`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Word;
    ///
    /// let word = Word::new("CRANE", 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long", 5).is_err());
    /// assert!(Word::new("sh0rt", 5).is_err());
    /// ```
    pub fn new(text: impl Into<String>, word_length: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != word_length {
            return Err(WordError::InvalidLength {
                expected: word_length,
                actual: text.len(),
            });
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars = text.as_bytes().to_vec();

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if the word has no letters (never holds for validated words)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Count of each letter in the word, indexed 'a' to 'z'
    ///
    /// Used by the feedback simulation and the filter's count constraints.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in &self.chars {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE", 5).unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE", 5).unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 8
            })
        ));
        assert!(matches!(
            Word::new("shrt", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        ));
        assert!(matches!(
            Word::new("", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 0
            })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3", 5).is_err()); // Number
        assert!(Word::new("cran ", 5).is_err()); // Space
        assert!(Word::new("cran!", 5).is_err()); // Punctuation
        assert!(Word::new("crané", 5).is_err()); // Non-ASCII
    }

    #[test]
    fn word_creation_other_lengths() {
        assert!(Word::new("abcdef", 6).is_ok());
        assert!(Word::new("abc", 3).is_ok());
        assert!(Word::new("crane", 6).is_err());
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed", 5).unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[(b's' - b'a') as usize], 1);
        assert_eq!(counts[(b'p' - b'a') as usize], 1);
        assert_eq!(counts[(b'e' - b'a') as usize], 2);
        assert_eq!(counts[(b'd' - b'a') as usize], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_letter_counts_all_same() {
        let word = Word::new("aaaaa", 5).unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[0], 5);
        assert!(counts[1..].iter().all(|&c| c == 0));
    }

    #[test]
    fn word_ordering_lexicographic() {
        let mut words = vec![
            Word::new("slate", 5).unwrap(),
            Word::new("crane", 5).unwrap(),
            Word::new("crate", 5).unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "crate", "slate"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane", 5).unwrap();
        let word2 = Word::new("CRANE", 5).unwrap();
        let word3 = Word::new("slate", 5).unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
