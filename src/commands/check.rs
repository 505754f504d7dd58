//! Single guess check command
//!
//! Scores one guess against a given secret word without starting a game.

use crate::config::GameConfig;
use crate::core::{Dictionary, EvaluatedGuess, Guess, SecretWord, Word};
use crate::game::normalize;

/// Result of checking a guess
pub struct CheckResult {
    pub secret: String,
    pub guess: EvaluatedGuess,
    pub in_dictionary: bool,
}

/// Score `guess` against `secret`
///
/// Both words are normalized to the configured length. The guess is scored
/// even when the dictionary does not know it; `in_dictionary` reports that.
///
/// # Errors
///
/// Returns an error if either word does not have the configured length after
/// normalization.
pub fn check_guess<D: Dictionary>(
    secret: &str,
    guess: &str,
    config: &GameConfig,
    dictionary: &D,
) -> Result<CheckResult, String> {
    let length = config.word_length();

    let secret = Word::new(normalize(secret, length), length)
        .map_err(|e| format!("Invalid secret word: {e}"))?;
    let guess = Guess::new(normalize(guess, length), length)
        .map_err(|e| format!("Invalid guess: {e}"))?;

    let evaluated = EvaluatedGuess::evaluate(&guess, &SecretWord::new(secret.text()));

    Ok(CheckResult {
        secret: secret.text().to_string(),
        in_dictionary: dictionary.contains(guess.text()),
        guess: evaluated,
    })
}
