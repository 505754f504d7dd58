//! Display functions for game and command results

use super::formatters::{empty_row, guess_tiles};
use crate::commands::{CheckResult, ValidationResult};
use crate::core::Dictionary;
use crate::game::{GameSession, GameStatus};
use colored::Colorize;

/// Board rows: every guess made, then empty rows up to the budget
///
/// Always `max_guesses` lines, whatever the game status.
#[must_use]
pub fn board_lines<D: Dictionary>(session: &GameSession<D>) -> Vec<String> {
    let config = session.config();
    let empty = empty_row(config.word_length()).bright_black().to_string();

    session
        .history()
        .iter()
        .map(guess_tiles)
        .chain(std::iter::repeat(empty))
        .take(config.max_guesses())
        .collect()
}

pub fn print_board<D: Dictionary>(session: &GameSession<D>) {
    println!();
    for line in board_lines(session) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner, nothing while the game is running
pub fn print_outcome<D: Dictionary>(session: &GameSession<D>) {
    let Some(message) = session.status().message() else {
        return;
    };

    println!("{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => println!("  {}", message.bright_green().bold()),
        GameStatus::Lost => {
            println!("  {}", message.bright_red().bold());
            println!(
                "  The word was {}",
                session.secret().text().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {}
    }

    println!("\n  Guess history:");
    for (i, guess) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.text().bright_white().bold(),
            guess.to_emoji()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the feedback for a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.bright_yellow().bold(),
        result.guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}  {}", guess_tiles(&result.guess), result.guess.to_emoji());
    println!("  Pattern: {}", result.guess.pattern());

    if !result.in_dictionary {
        println!(
            "\n{}",
            "⚠ The guess is not in the dictionary; a game would reject it.".yellow()
        );
    }
    if result.guess.is_all_correct() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print the violations found for a candidate word of the day
pub fn print_validation_result(result: &ValidationResult) {
    if result.violations.is_empty() {
        println!(
            "{}",
            format!("✅ '{}' is a valid word of the day", result.word)
                .green()
                .bold()
        );
        return;
    }

    println!(
        "{}",
        format!("❌ '{}' is not a valid word of the day:", result.word)
            .red()
            .bold()
    );
    for violation in &result.violations {
        println!("   • {violation}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::WordList;

    fn session(words: &WordList, max_guesses: usize) -> GameSession<&WordList> {
        GameSession::new(GameConfig::new(5, max_guesses).unwrap(), words, "TESTS")
    }

    fn empty_lines(lines: &[String]) -> usize {
        lines.iter().filter(|line| line.contains('_')).count()
    }

    #[test]
    fn board_starts_with_empty_rows() {
        let words = WordList::from_words(["tests", "wrong"]);
        let lines = board_lines(&session(&words, 6));

        assert_eq!(lines.len(), 6);
        assert_eq!(empty_lines(&lines), 6);
    }

    #[test]
    fn board_size_fixed_through_a_loss() {
        let words = WordList::from_words(["tests", "wrong"]);
        let mut session = session(&words, 4);

        for guessed in 1..=4 {
            session.submit("WRONG");
            let lines = board_lines(&session);
            assert_eq!(lines.len(), 4);
            assert_eq!(empty_lines(&lines), 4 - guessed);
        }
        assert_eq!(session.status(), GameStatus::Lost);
    }

    #[test]
    fn board_after_first_guess_win() {
        let words = WordList::from_words(["tests"]);
        let mut session = session(&words, 6);
        session.submit("TESTS");

        let lines = board_lines(&session);
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(lines.len(), 6);
        assert_eq!(empty_lines(&lines), 5);
        assert!(!lines[0].contains('_'));
    }
}
