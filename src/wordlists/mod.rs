//! Bundled word lists
//!
//! `ANSWERS` holds the words that can be drawn as the word of the day and
//! `ALLOWED` is the dictionary of accepted guesses. Both live in `data/` and
//! are compiled in by `build.rs`, lowercase, one word per entry.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, WORD_LENGTH};
    use crate::core::Word;
    use crate::game::GuessValidator;
    use loader::words_from_slice;
    use rustc_hash::FxHashSet;

    #[test]
    fn generated_counts_agree() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
        assert!(ANSWERS_COUNT > 0);
        assert!(ALLOWED_COUNT >= ANSWERS_COUNT);
    }

    #[test]
    fn every_answer_is_a_valid_word_of_the_day() {
        let validator = GuessValidator::new(GameConfig::default(), words_from_slice(ALLOWED));

        for &answer in ANSWERS {
            let violations = validator.validate_secret_word(&answer.to_uppercase());
            assert!(violations.is_empty(), "'{answer}': {violations:?}");
        }
    }

    #[test]
    fn allowed_words_have_default_length() {
        for &word in ALLOWED {
            assert!(
                Word::new(word.to_uppercase(), WORD_LENGTH).is_ok(),
                "'{word}' is not a {WORD_LENGTH}-letter word"
            );
        }
    }

    #[test]
    fn no_duplicate_entries() {
        let answers: FxHashSet<_> = ANSWERS.iter().collect();
        let allowed: FxHashSet<_> = ALLOWED.iter().collect();
        assert_eq!(answers.len(), ANSWERS_COUNT);
        assert_eq!(allowed.len(), ALLOWED_COUNT);
    }

    #[test]
    fn dictionary_has_common_guesses() {
        for word in ["tests", "wrong", "guess", "hello", "world", "happy", "coder"] {
            assert!(ALLOWED.contains(&word), "'{word}' missing from ALLOWED");
        }
        assert!(!ALLOWED.contains(&"qwert"));
    }
}
