//! Game configuration
//!
//! The word length and guess budget are parameters, never baked into the
//! scoring or state machine code.

use std::fmt;

/// Default number of letters per word
pub const WORD_LENGTH: usize = 5;

/// Default number of guesses before the round is lost
pub const MAX_GUESSES: usize = 6;

/// Language of the bundled dictionary, used in diagnostics
pub const LANGUAGE: &str = "english";

/// Shown once the secret word has been found
pub const VICTORY_MESSAGE: &str = "You won! The word of the day was found.";

/// Shown once the guess budget is exhausted without a win
pub const DEFEAT_MESSAGE: &str = "Better luck next time! No guesses left.";

/// Parameters shared by the validator, the session and the front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_guesses: usize,
}

/// Error type for invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWordLength,
    ZeroMaxGuesses,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "Word length must be at least 1"),
            Self::ZeroMaxGuesses => write!(f, "Maximum guess count must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Create a configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if either value is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::config::GameConfig;
    ///
    /// let config = GameConfig::new(6, 8).unwrap();
    /// assert_eq!(config.word_length(), 6);
    /// assert!(GameConfig::new(0, 6).is_err());
    /// ```
    pub const fn new(word_length: usize, max_guesses: usize) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if max_guesses == 0 {
            return Err(ConfigError::ZeroMaxGuesses);
        }

        Ok(Self {
            word_length,
            max_guesses,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_guesses: MAX_GUESSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.word_length(), WORD_LENGTH);
        assert_eq!(config.max_guesses(), MAX_GUESSES);
    }

    #[test]
    fn zero_values_rejected() {
        assert_eq!(GameConfig::new(0, 6), Err(ConfigError::ZeroWordLength));
        assert_eq!(GameConfig::new(5, 0), Err(ConfigError::ZeroMaxGuesses));
    }

    #[test]
    fn single_guess_budget_allowed() {
        let config = GameConfig::new(5, 1).unwrap();
        assert_eq!(config.max_guesses(), 1);
    }

    #[test]
    fn end_messages_differ() {
        assert_ne!(VICTORY_MESSAGE, DEFEAT_MESSAGE);
    }
}
