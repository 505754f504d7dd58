//! Word of the day validation command

use crate::core::Dictionary;
use crate::game::{GuessValidator, SecretWordViolation};

/// Result of validating a candidate word of the day
pub struct ValidationResult {
    pub word: String,
    pub violations: Vec<SecretWordViolation>,
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check `word` exactly as a session would at startup
#[must_use]
pub fn validate_word<D: Dictionary>(word: &str, validator: &GuessValidator<D>) -> ValidationResult {
    ValidationResult {
        word: word.to_string(),
        violations: validator.validate_secret_word(word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::WordList;

    fn validator() -> GuessValidator<WordList> {
        GuessValidator::new(GameConfig::default(), WordList::from_words(["tests", "lower"]))
    }

    #[test]
    fn valid_word() {
        assert!(validate_word("TESTS", &validator()).is_valid());
    }

    #[test]
    fn word_is_not_normalized() {
        let result = validate_word("tests", &validator());
        assert!(!result.is_valid());
        assert_eq!(result.word, "tests");
    }

    #[test]
    fn each_rejection_reason() {
        for word in ["LESS", "LONGER", "lower", "QWERT"] {
            assert!(!validate_word(word, &validator()).is_valid(), "{word}");
        }
    }
}
