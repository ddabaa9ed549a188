//! Word representation and validation
//!
//! A Word is a validated 5-letter uppercase sequence. Validation happens once,
//! at construction; every other part of the crate relies on the invariant.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter word made of uppercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only the letters A-Z")]
    InvalidCharacters,
}

/// Check whether a candidate is exactly five uppercase letters A-Z
///
/// No normalisation is applied: lowercase input is rejected.
///
/// # Examples
/// ```
/// use terminal_wordle::core::is_valid_word;
///
/// assert!(is_valid_word("ABCDE"));
/// assert!(!is_valid_word("abcde"));
/// assert!(!is_valid_word("ABCD1"));
/// ```
#[must_use]
pub fn is_valid_word(candidate: &str) -> bool {
    candidate.len() == WORD_LENGTH && candidate.bytes().all(|b| b.is_ascii_uppercase())
}

impl Word {
    /// Create a Word from text that is already uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than `A`-`Z`
    ///
    /// # Examples
    /// ```
    /// use terminal_wordle::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("crane").is_err());
    /// assert!(Word::new("TOO LONG").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        if !is_valid_word(&text) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self { text, chars })
    }

    /// Create a Word from raw user or file input
    ///
    /// Trims surrounding whitespace and uppercases before validating.
    ///
    /// # Errors
    /// Same as [`Word::new`].
    pub fn from_input(input: &str) -> Result<Self, WordError> {
        Self::new(normalize(input))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

/// Trim and uppercase raw input
///
/// Only ASCII letters change case; anything else is left for validation to reject.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_input(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.chars(), b"CRANE");
    }

    #[test]
    fn word_creation_rejects_lowercase() {
        assert_eq!(Word::new("crane"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("CrAnE"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn from_input_normalizes() {
        let word = Word::from_input("  crane\n").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2: Word = "CrAnE".parse().unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn from_input_keeps_non_ascii_letters() {
        assert_eq!(normalize("ﬁeld"), "ﬁELD");
        assert_eq!(Word::from_input("ﬁeld"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::from_input("straß"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("TOOLONG"), Err(WordError::InvalidLength(7)));
        assert_eq!(Word::new("SHRT"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("CRAN3").is_err()); // Number
        assert!(Word::new("CRAN ").is_err()); // Space
        assert!(Word::new("CRAN!").is_err()); // Punctuation
        assert!(Word::new("CRANÉ").is_err()); // Non-ASCII
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.char_at(0), b'C');
        assert_eq!(word.char_at(4), b'E');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("CRANE").unwrap();
        assert!(word.has_letter(b'C'));
        assert!(word.has_letter(b'A'));
        assert!(!word.has_letter(b'Z'));
        assert!(!word.has_letter(b'c'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }

    #[test]
    fn validator_cases() {
        assert!(is_valid_word("ABCDE"));
        assert!(!is_valid_word("ABCDEF"));
        assert!(!is_valid_word("ABCD1"));
        assert!(!is_valid_word("AB"));
        assert!(!is_valid_word(""));
        assert!(!is_valid_word("abcde"));
    }

    proptest! {
        #[test]
        fn validator_matches_definition(s in "\\PC{0,7}") {
            let expected = s.len() == 5 && s.chars().all(|c| c.is_ascii_uppercase());
            prop_assert_eq!(is_valid_word(&s), expected);
        }

        #[test]
        fn validator_accepts_all_uppercase_words(s in "[A-Z]{5}") {
            prop_assert!(is_valid_word(&s));
            prop_assert!(Word::new(s).is_ok());
        }

        #[test]
        fn word_new_agrees_with_validator(s in "[A-Za-z0-9 ]{3,7}") {
            prop_assert_eq!(Word::new(s.clone()).is_ok(), is_valid_word(&s));
        }
    }
}
