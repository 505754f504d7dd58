//! Formatting utilities for terminal output

use crate::core::{EvaluatedGuess, LetterFeedback};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile: green, yellow or dimmed
#[must_use]
pub fn letter_tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let tile = format!(" {letter} ");
    let tile = tile.as_str();
    match feedback {
        LetterFeedback::Correct => tile.black().on_green().bold(),
        LetterFeedback::Present => tile.black().on_yellow().bold(),
        LetterFeedback::Absent => tile.white().on_bright_black(),
    }
}

/// A whole guess as a row of colored tiles
#[must_use]
pub fn guess_tiles(guess: &EvaluatedGuess) -> String {
    guess
        .letters()
        .iter()
        .map(|scored| letter_tile(scored.letter, scored.feedback).to_string())
        .collect()
}

/// Placeholder row for a guess not yet made
#[must_use]
pub fn empty_row(word_length: usize) -> String {
    " _ ".repeat(word_length)
}
