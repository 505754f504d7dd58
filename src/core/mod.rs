//! Core domain types for the game
//!
//! Words, per-letter feedback and the dictionary seam. Everything here is
//! pure and independent of configuration and presentation.

mod dictionary;
mod feedback;
mod word;

pub use dictionary::{Dictionary, WordList};
pub use feedback::{EvaluatedGuess, LetterFeedback, ScoredLetter};
pub use word::{Guess, SecretWord, Word, WordError};
