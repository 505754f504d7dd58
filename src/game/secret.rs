//! Word of the day providers

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Source of the secret word for each new session
///
/// Returns `None` when no word can be supplied.
pub trait SecretWordProvider {
    fn secret_word(&mut self) -> Option<String>;
}

/// Always the same word, passed through untouched
///
/// A misconfigured word reaches the session as-is so that validation can
/// report it.
#[derive(Debug, Clone)]
pub struct FixedSecret(String);

impl FixedSecret {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }
}

impl SecretWordProvider for FixedSecret {
    fn secret_word(&mut self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Uniform pick from a list of candidate answers
#[derive(Debug, Clone)]
pub struct RandomSecret<R = StdRng> {
    answers: Vec<String>,
    rng: R,
}

impl RandomSecret<StdRng> {
    /// Seeded from the operating system
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(answers, StdRng::from_os_rng())
    }

    /// Deterministic sequence of words for a given seed
    pub fn seeded<I, S>(answers: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(answers, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSecret<R> {
    /// Answers are uppercased; blank entries are skipped
    pub fn with_rng<I, S>(answers: I, rng: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let answers = answers
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { answers, rng }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<R: Rng> SecretWordProvider for RandomSecret<R> {
    fn secret_word(&mut self) -> Option<String> {
        self.answers.choose(&mut self.rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_secret_is_untouched() {
        let mut provider = FixedSecret::new("lower");
        assert_eq!(provider.secret_word().as_deref(), Some("lower"));
        assert_eq!(provider.secret_word().as_deref(), Some("lower"));
    }

    #[test]
    fn random_secret_comes_from_answers() {
        let answers = ["crane", "slate", "tests"];
        let mut provider = RandomSecret::seeded(answers, 7);

        for _ in 0..20 {
            let word = provider.secret_word().unwrap();
            assert!(["CRANE", "SLATE", "TESTS"].contains(&word.as_str()));
        }
    }

    #[test]
    fn same_seed_same_words() {
        let answers = ["crane", "slate", "tests", "world", "wrong"];
        let mut a = RandomSecret::seeded(answers, 42);
        let mut b = RandomSecret::seeded(answers, 42);

        for _ in 0..10 {
            assert_eq!(a.secret_word(), b.secret_word());
        }
    }

    #[test]
    fn empty_answers_give_none() {
        let mut provider = RandomSecret::seeded(Vec::<String>::new(), 1);
        assert!(provider.is_empty());
        assert_eq!(provider.secret_word(), None);
    }

    #[test]
    fn blank_answers_skipped() {
        let provider = RandomSecret::seeded(["crane", " ", ""], 1);
        assert_eq!(provider.len(), 1);
    }
}
