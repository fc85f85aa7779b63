//! Weaver chain validation
//!
//! Takes the player's guesses plus the fixed start and target words and checks
//! the chain is legal: every word has the game length and every step changes
//! exactly one letter. The result is a [`Chain`], the only input the grid
//! renderer accepts, so rendering can never see an unvalidated or empty
//! sequence.

use crate::core::Word;
use std::fmt;

/// A validated Weaver chain
///
/// Always non-empty; the first word is the canonical start, the last the
/// canonical target, and every adjacent pair differs in exactly one letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    words: Vec<Word>,
}

/// Error type for illegal chains
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A word in the chain does not have the fixed game length
    LengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },
    /// An adjacent pair differs by other than exactly one letter
    InvalidTransition {
        from: String,
        to: String,
        changed: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                word,
                expected,
                actual,
            } => {
                write!(f, "'{word}' must be exactly {expected} letters, got {actual}")
            }
            Self::InvalidTransition { from, to, changed } => {
                write!(
                    f,
                    "'{from}' to '{to}' changes {changed} letters, each step must change exactly 1"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a chain of guesses between `start` and `target`
///
/// The guesses may or may not include the start and target words explicitly;
/// boundaries are normalized either way, and the canonical spellings of
/// `start` and `target` always win over whatever the player typed for them.
/// The input is not modified; a fresh sequence is returned.
///
/// A chain that collapses to a single word (start equals target) is valid:
/// there is no adjacent pair left to check. This mirrors the game's own
/// behavior and is deliberate.
///
/// # Errors
/// Returns [`ValidationError::LengthMismatch`] if any word's length differs
/// from `length`, or [`ValidationError::InvalidTransition`] if an adjacent
/// pair differs in other than exactly one letter (case-insensitive).
///
/// # Examples
/// ```
/// use weaver_share::chain::validate;
/// use weaver_share::core::Word;
///
/// let cat = Word::new("cat").unwrap();
/// let dog = Word::new("dog").unwrap();
/// let guesses = vec![Word::new("cot").unwrap(), Word::new("cog").unwrap()];
///
/// let chain = validate(&guesses, &cat, &dog, 3).unwrap();
/// assert_eq!(chain.len(), 4);
/// assert_eq!(chain.start().text(), "cat");
/// assert_eq!(chain.target().text(), "dog");
/// ```
pub fn validate(
    guesses: &[Word],
    start: &Word,
    target: &Word,
    length: usize,
) -> Result<Chain, ValidationError> {
    let mut words: Vec<Word> = guesses.to_vec();

    // Pin the head to the canonical start spelling
    match words.first() {
        Some(first) if first.matches(start) => words[0] = start.clone(),
        _ => words.insert(0, start.clone()),
    }

    // Pin the tail to the canonical target spelling
    let last = words.len() - 1;
    if words[last].matches(target) {
        words[last] = target.clone();
    } else {
        words.push(target.clone());
    }

    for word in &words {
        if word.len() != length {
            return Err(ValidationError::LengthMismatch {
                word: word.text().to_string(),
                expected: length,
                actual: word.len(),
            });
        }
    }

    for pair in words.windows(2) {
        let changed = pair[0].letters_changed(&pair[1]);
        if changed != 1 {
            return Err(ValidationError::InvalidTransition {
                from: pair[0].text().to_string(),
                to: pair[1].text().to_string(),
                changed,
            });
        }
    }

    Ok(Chain { words })
}

impl Chain {
    /// All words in chain order, start first, target last
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the chain (always at least 1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The canonical start word
    ///
    /// # Panics
    /// Will not panic - a Chain is never empty by construction.
    #[must_use]
    pub fn start(&self) -> &Word {
        self.words.first().expect("chain is never empty")
    }

    /// The canonical target word
    ///
    /// # Panics
    /// Will not panic - a Chain is never empty by construction.
    #[must_use]
    pub fn target(&self) -> &Word {
        self.words.last().expect("chain is never empty")
    }

    /// Number of transitions, i.e. guesses excluding the fixed start word
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.words.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    #[test]
    fn validate_prepends_start_and_appends_target() {
        let chain = validate(&words(&["cot", "cog"]), &word("cat"), &word("dog"), 3).unwrap();

        let texts: Vec<&str> = chain.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "cot", "cog", "dog"]);
        assert_eq!(chain.guess_count(), 3);
    }

    #[test]
    fn validate_canonicalizes_explicit_boundaries() {
        // Player typed the boundaries themselves, with their own casing
        let chain = validate(
            &words(&["CAT", "cot", "cog", "DOG"]),
            &word("Cat"),
            &word("Dog"),
            3,
        )
        .unwrap();

        assert_eq!(chain.start().text(), "Cat");
        assert_eq!(chain.target().text(), "Dog");
        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn validate_input_not_modified() {
        let guesses = words(&["cot", "cog"]);
        let _ = validate(&guesses, &word("cat"), &word("dog"), 3).unwrap();
        assert_eq!(guesses.len(), 2);
        assert_eq!(guesses[0].text(), "cot");
    }

    #[test]
    fn validate_empty_guess_list() {
        // a -> b is one transition, one letter changed
        let chain = validate(&[], &word("a"), &word("b"), 1).unwrap();

        let texts: Vec<&str> = chain.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn validate_degenerate_start_equals_target() {
        // Collapses to a single word with no adjacent pairs to check
        let chain = validate(&words(&["cat"]), &word("cat"), &word("cat"), 3).unwrap();

        assert_eq!(chain.len(), 1);
        assert_eq!(chain.guess_count(), 0);
        assert_eq!(chain.start().text(), "cat");
    }

    #[test]
    fn validate_rejects_wrong_length() {
        let err = validate(&words(&["cots"]), &word("cat"), &word("dog"), 3).unwrap_err();

        assert_eq!(
            err,
            ValidationError::LengthMismatch {
                word: "cots".to_string(),
                expected: 3,
                actual: 4,
            }
        );
    }

    #[test]
    fn validate_rejects_wrong_length_boundary() {
        let err = validate(&[], &word("cats"), &word("dogs"), 3).unwrap_err();
        assert!(matches!(err, ValidationError::LengthMismatch { .. }));
    }

    #[test]
    fn validate_rejects_two_letter_jump() {
        // cot -> dog changes two letters
        let err = validate(&words(&["cot", "dog"]), &word("cat"), &word("dog"), 3).unwrap_err();

        assert_eq!(
            err,
            ValidationError::InvalidTransition {
                from: "cot".to_string(),
                to: "dog".to_string(),
                changed: 2,
            }
        );
    }

    #[test]
    fn validate_rejects_repeated_word() {
        // cot -> cot changes zero letters
        let err =
            validate(&words(&["cot", "cot", "cog"]), &word("cat"), &word("dog"), 3).unwrap_err();

        assert!(matches!(
            err,
            ValidationError::InvalidTransition { changed: 0, .. }
        ));
    }

    #[test]
    fn validate_case_insensitive_transitions() {
        let chain = validate(&words(&["COT", "Cog"]), &word("cat"), &word("dog"), 3).unwrap();
        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn validation_error_messages() {
        let err = ValidationError::LengthMismatch {
            word: "cots".to_string(),
            expected: 3,
            actual: 4,
        };
        assert_eq!(format!("{err}"), "'cots' must be exactly 3 letters, got 4");

        let err = ValidationError::InvalidTransition {
            from: "cot".to_string(),
            to: "dog".to_string(),
            changed: 2,
        };
        assert_eq!(
            format!("{err}"),
            "'cot' to 'dog' changes 2 letters, each step must change exactly 1"
        );
    }
}
