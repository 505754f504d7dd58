//! Word representation
//!
//! A `Word` stores its text together with the decoded letters so that scoring
//! can index positions directly. Letters are Unicode scalar values, so accented
//! letters such as `Ü` count as a single position.

use rustc_hash::FxHashMap;
use std::fmt;

/// A sequence of letters with position access
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for words that break the guess/secret shape rules
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WordError {
    InvalidLength { expected: usize, actual: usize },
    NonAlphabetic,
    NotUppercase,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAlphabetic => write!(f, "Word must contain only letters"),
            Self::NotUppercase => write!(f, "Word must be in uppercase"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a word, enforcing length, alphabet and case
    ///
    /// # Errors
    /// Returns the first rule the text breaks, see [`Word::violations`].
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::{Word, WordError};
    ///
    /// let word = Word::new("CRANE", 5).unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(matches!(Word::new("CRANES", 5), Err(WordError::InvalidLength { .. })));
    /// assert_eq!(Word::new("crane", 5), Err(WordError::NotUppercase));
    /// ```
    pub fn new(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text = text.into();

        match Self::violations(&text, length).into_iter().next() {
            Some(error) => Err(error),
            None => Ok(Self::from_raw(text)),
        }
    }

    /// Build a word without checking any rule
    pub(crate) fn from_raw(text: impl Into<String>) -> Self {
        let text = text.into();
        let letters = text.chars().collect();
        Self { text, letters }
    }

    /// Every shape rule `text` breaks, in a stable order
    ///
    /// Alphabet and case are reported separately: `"lower"` is only
    /// `NotUppercase`, `"TE5TS"` is only `NonAlphabetic`.
    #[must_use]
    pub fn violations(text: &str, length: usize) -> Vec<WordError> {
        let mut errors = Vec::new();

        let actual = text.chars().count();
        if actual != length {
            errors.push(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }

        if !text.chars().all(char::is_alphabetic) {
            errors.push(WordError::NonAlphabetic);
        }

        if text.chars().any(char::is_lowercase) {
            errors.push(WordError::NotUppercase);
        }

        errors
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letter at `position`, `None` past the end
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The word the player has to find
///
/// Built from whatever the provider supplied. Shape problems are reported by
/// the validator but never prevent construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord(Word);

impl SecretWord {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(Word::from_raw(text))
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        self.0.text()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A well-formed candidate word
///
/// Dictionary membership is not part of the type; it is checked when the
/// guess is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess(Word);

impl Guess {
    /// Create a guess of exactly `length` uppercase letters
    ///
    /// # Errors
    /// Returns `WordError` if the text breaks any shape rule.
    pub fn new(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        Word::new(text, length).map(Self)
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        self.0.text()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
