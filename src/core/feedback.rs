//! Per-letter feedback calculation and representation
//!
//! Each position of a guess is classified as:
//! - `Correct` (letter in the right position)
//! - `Present` (letter elsewhere in the secret, within its remaining count)
//! - `Absent` (letter contributes no further match)

use super::{Guess, SecretWord};
use std::fmt;

/// Classification of one letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

impl LetterFeedback {
    /// Single-character code: `G`reen, `Y`ellow, `-` for absent
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Colored square for sharing results
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback attached to a (position, letter) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredLetter {
    pub position: usize,
    pub letter: char,
    pub feedback: LetterFeedback,
}

/// A guess together with its per-position feedback
///
/// Immutable once produced by [`EvaluatedGuess::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedGuess {
    text: String,
    letters: Vec<ScoredLetter>,
}

impl EvaluatedGuess {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume them from the secret's
    ///    letter counts
    /// 2. Second pass, left to right: mark `Present` while the letter still
    ///    has a count left, otherwise `Absent`
    ///
    /// Positions past the end of a malformed secret can never be `Correct`.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::{EvaluatedGuess, Guess, LetterFeedback, SecretWord};
    ///
    /// let guess = Guess::new("WRONG", 5).unwrap();
    /// let secret = SecretWord::new("WORLD");
    /// let evaluated = EvaluatedGuess::evaluate(&guess, &secret);
    ///
    /// assert_eq!(evaluated.pattern(), "GYY--");
    /// assert_eq!(evaluated.letters()[0].feedback, LetterFeedback::Correct);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Guess, secret: &SecretWord) -> Self {
        let guess_word = guess.word();
        let secret_word = secret.word();

        let mut result = vec![LetterFeedback::Absent; guess_word.len()];
        let mut secret_available = secret_word.letter_counts();

        // First pass: exact position matches
        for (i, &letter) in guess_word.letters().iter().enumerate() {
            if secret_word.letter_at(i) == Some(letter) {
                result[i] = LetterFeedback::Correct;

                if let Some(count) = secret_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still available
        for (i, &letter) in guess_word.letters().iter().enumerate() {
            if result[i] == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = secret_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }

        let letters = guess_word
            .letters()
            .iter()
            .zip(result)
            .enumerate()
            .map(|(position, (&letter, feedback))| ScoredLetter {
                position,
                letter,
                feedback,
            })
            .collect();

        Self {
            text: guess.text().to_string(),
            letters,
        }
    }

    /// The guess as submitted
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[ScoredLetter] {
        &self.letters
    }

    /// Feedback values in position order
    pub fn feedback(&self) -> impl Iterator<Item = LetterFeedback> + '_ {
        self.letters.iter().map(|scored| scored.feedback)
    }

    /// Check if every position is `Correct`
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.feedback().all(|feedback| feedback == LetterFeedback::Correct)
    }

    /// Count positions with the given classification
    #[must_use]
    pub fn count(&self, kind: LetterFeedback) -> usize {
        self.feedback().filter(|&feedback| feedback == kind).count()
    }

    /// Pattern string like `"GY-G-"`
    #[must_use]
    pub fn pattern(&self) -> String {
        self.feedback().map(LetterFeedback::to_char).collect()
    }

    /// Emoji string like `"🟩🟨⬜🟩⬜"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.feedback().map(LetterFeedback::to_emoji).collect()
    }
}

impl fmt::Display for EvaluatedGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.text, self.pattern())
    }
}
