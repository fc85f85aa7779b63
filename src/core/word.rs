//! Weaver word representation
//!
//! A Word keeps the casing the player chose for display while comparing
//! case-insensitively, which is what the game rules care about.

use std::fmt;

/// A single word in a Weaver chain
///
/// Any length is allowed here; the chain validator enforces the fixed game
/// length across the whole sequence.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, preserving its casing
    ///
    /// # Errors
    /// Returns `WordError` if the string is empty, non-ASCII, or contains
    /// anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use weaver_share::core::Word;
    ///
    /// let word = Word::new("Cat").unwrap();
    /// assert_eq!(word.text(), "Cat");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice, in display casing
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Case-insensitive equality with another word
    #[inline]
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.text.eq_ignore_ascii_case(&other.text)
    }

    /// Count letter positions where this word differs from `other`
    ///
    /// Case-insensitive. Positions beyond the shorter word are not counted;
    /// the chain validator rejects unequal lengths before this matters.
    #[must_use]
    pub fn letters_changed(&self, other: &Self) -> usize {
        self.text
            .bytes()
            .zip(other.text.bytes())
            .filter(|(a, b)| !a.eq_ignore_ascii_case(b))
            .count()
    }

    /// Per-position match map against `target`
    ///
    /// `true` where this word's letter equals the target's letter at the same
    /// position, case-insensitive.
    #[must_use]
    pub fn matches_at(&self, target: &Self) -> Vec<bool> {
        self.text
            .bytes()
            .zip(target.text.bytes())
            .map(|(a, b)| a.eq_ignore_ascii_case(&b))
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for Word {}
