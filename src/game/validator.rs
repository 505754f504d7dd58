//! Guess validation
//!
//! Gate-keeps raw player input before it reaches scoring, and checks the
//! word of the day once when a session starts.

use crate::config::{GameConfig, LANGUAGE};
use crate::core::{Dictionary, Guess, Word, WordError};
use std::fmt;

/// Strip everything that is not a letter, uppercase, cap at `max_letters`
///
/// Accented letters survive. Extra letters past the cap are dropped.
///
/// # Examples
/// ```
/// use wordle_board::game::normalize;
///
/// assert_eq!(normalize("H3!ÜñRT", 5), "HÜÑRT");
/// assert_eq!(normalize("testsextra", 5), "TESTS");
/// assert_eq!(normalize("333", 5), "");
/// ```
#[must_use]
pub fn normalize(raw: &str, max_letters: usize) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .take(max_letters)
        .collect()
}

/// Why a submission was not recorded
///
/// Rejection is an expected outcome of submitting, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Malformed(WordError),
    NotInDictionary(String),
    GameOver,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(error) => write!(f, "{error}"),
            Self::NotInDictionary(word) => write!(f, "{word} is not a real word in {LANGUAGE}"),
            Self::GameOver => write!(f, "The game is over"),
        }
    }
}

/// One reason a word of the day is unfit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretWordViolation {
    Shape(WordError),
    NotInDictionary,
}

impl fmt::Display for SecretWordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(error) => write!(f, "{error}"),
            Self::NotInDictionary => write!(f, "not a real word in {LANGUAGE}"),
        }
    }
}

/// Diagnostic raised once per session for a misconfigured word of the day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWordWarning {
    pub word: String,
    pub violations: Vec<SecretWordViolation>,
}

impl fmt::Display for SecretWordWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reasons: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
        write!(
            f,
            "Invalid word of the day '{}': {}",
            self.word,
            reasons.join("; ")
        )
    }
}

/// Validator bound to a configuration and a dictionary
#[derive(Debug, Clone)]
pub struct GuessValidator<D> {
    config: GameConfig,
    dictionary: D,
}

impl<D: Dictionary> GuessValidator<D> {
    pub const fn new(config: GameConfig, dictionary: D) -> Self {
        Self { config, dictionary }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// [`normalize`] capped at the configured word length
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw, self.config.word_length())
    }

    /// Turn a normalized candidate into a guess
    ///
    /// # Errors
    /// Returns the `Rejection` explaining why the candidate cannot be scored.
    pub fn check(&self, candidate: &str) -> Result<Guess, Rejection> {
        let guess =
            Guess::new(candidate, self.config.word_length()).map_err(Rejection::Malformed)?;

        if !self.dictionary.contains(guess.text()) {
            return Err(Rejection::NotInDictionary(guess.text().to_string()));
        }

        Ok(guess)
    }

    /// Check if the candidate has the configured length and is a known word
    #[must_use]
    pub fn is_submittable(&self, candidate: &str) -> bool {
        self.check(candidate).is_ok()
    }

    /// Every reason `word` is unfit as the word of the day
    ///
    /// An empty list means the word is fine.
    #[must_use]
    pub fn validate_secret_word(&self, word: &str) -> Vec<SecretWordViolation> {
        let mut violations: Vec<SecretWordViolation> =
            Word::violations(word, self.config.word_length())
                .into_iter()
                .map(SecretWordViolation::Shape)
                .collect();

        if !self.dictionary.contains(word) {
            violations.push(SecretWordViolation::NotInDictionary);
        }

        violations
    }
}
