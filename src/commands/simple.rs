//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use crate::config::GameConfig;
use crate::core::Dictionary;
use crate::game::{GameSession, GameStatus, Rejection, SecretWordProvider, SubmitOutcome};
use crate::output::{print_board, print_outcome};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Games played during one `run_simple` call
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    pub games_played: usize,
    pub games_won: usize,
}

/// Run the simple interactive CLI mode
///
/// Reads guesses line by line from `reader` until `:quit`, end of input, or
/// the player declines another round. Lines starting with `:` are commands,
/// everything else is submitted as a guess.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or if the provider
/// cannot supply a word of the day.
pub fn run_simple<D, P, R>(
    config: GameConfig,
    dictionary: &D,
    provider: &mut P,
    mut reader: R,
) -> Result<PlaySummary, String>
where
    D: Dictionary + ?Sized,
    P: SecretWordProvider + ?Sized,
    R: BufRead,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Word of the Day                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Find the {}-letter word in {} guesses.",
        config.word_length(),
        config.max_guesses()
    );
    println!("  - Green: right letter, right spot");
    println!("  - Yellow: letter is elsewhere in the word");
    println!("  - Gray: no more of this letter\n");
    println!("Commands: ':quit' to exit, ':new' for a new word\n");

    let mut summary = PlaySummary::default();
    let mut session = start_session(config, dictionary, provider)?;

    loop {
        print_board(&session);

        if session.status().is_terminal() {
            summary.games_played += 1;
            if session.status() == GameStatus::Won {
                summary.games_won += 1;
            }
            print_outcome(&session);

            match read_input(&mut reader, "Play again? (yes/no)")?
                .map(|answer| answer.to_lowercase())
                .as_deref()
            {
                Some("yes" | "y") => {
                    session = start_session(config, dictionary, provider)?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(summary);
                }
            }
        }

        let prompt = format!(
            "Guess {}/{}",
            session.history().len() + 1,
            config.max_guesses()
        );
        let Some(input) = read_input(&mut reader, &prompt)? else {
            return Ok(summary);
        };

        match input.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(summary);
            }
            ":new" | ":n" => {
                session = start_session(config, dictionary, provider)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        if let SubmitOutcome::Rejected(rejection) = session.submit(&input) {
            match rejection {
                Rejection::GameOver => {}
                other => println!("{}", format!("  {other}").bright_black()),
            }
        }
    }
}

fn start_session<'d, D, P>(
    config: GameConfig,
    dictionary: &'d D,
    provider: &mut P,
) -> Result<GameSession<&'d D>, String>
where
    D: Dictionary + ?Sized,
    P: SecretWordProvider + ?Sized,
{
    let secret = provider
        .secret_word()
        .ok_or("No word of the day available")?;
    let session = GameSession::new(config, dictionary, secret);

    if let Some(warning) = session.warning() {
        println!("{}", format!("⚠ {warning}").yellow());
    }

    Ok(session)
}

/// Get user input with a prompt; `None` at end of input
fn read_input<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;
    use crate::game::FixedSecret;
    use std::io::Cursor;

    fn dictionary() -> WordList {
        WordList::from_words(["tests", "wrong", "guess", "hello", "world", "happy"])
    }

    #[test]
    fn immediate_quit() {
        let mut provider = FixedSecret::new("TESTS");
        let summary = run_simple(
            GameConfig::default(),
            &dictionary(),
            &mut provider,
            Cursor::new(":quit\n"),
        )
        .unwrap();

        assert_eq!(summary, PlaySummary::default());
    }

    #[test]
    fn win_then_decline() {
        let mut provider = FixedSecret::new("TESTS");
        let summary = run_simple(
            GameConfig::default(),
            &dictionary(),
            &mut provider,
            Cursor::new("wrong\nqwert\ntests\nno\n"),
        )
        .unwrap();

        assert_eq!(summary.games_played, 1);
        assert_eq!(summary.games_won, 1);
    }

    #[test]
    fn loss_after_budget() {
        let mut provider = FixedSecret::new("TESTS");
        let config = GameConfig::new(5, 2).unwrap();
        let summary = run_simple(
            config,
            &dictionary(),
            &mut provider,
            Cursor::new("wrong\nhello\nno\n"),
        )
        .unwrap();

        assert_eq!(summary.games_played, 1);
        assert_eq!(summary.games_won, 0);
    }

    #[test]
    fn play_again_starts_new_round() {
        let mut provider = FixedSecret::new("TESTS");
        let summary = run_simple(
            GameConfig::default(),
            &dictionary(),
            &mut provider,
            Cursor::new("tests\nyes\ntests\nno\n"),
        )
        .unwrap();

        assert_eq!(summary.games_played, 2);
        assert_eq!(summary.games_won, 2);
    }

    #[test]
    fn end_of_input_stops() {
        let mut provider = FixedSecret::new("TESTS");
        let summary = run_simple(
            GameConfig::default(),
            &dictionary(),
            &mut provider,
            Cursor::new("wrong\n"),
        )
        .unwrap();

        assert_eq!(summary.games_played, 0);
    }

    #[test]
    fn invalid_secret_still_playable() {
        let mut provider = FixedSecret::new("TEST");
        let summary = run_simple(
            GameConfig::default(),
            &dictionary(),
            &mut provider,
            Cursor::new("wrong\n:quit\n"),
        );

        assert!(summary.is_ok());
    }
}
