//! Word of the Day - CLI
//!
//! Word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;
use wordle_board::{
    commands::{check_guess, run_simple, validate_word},
    config::GameConfig,
    core::WordList,
    game::{FixedSecret, GuessValidator, RandomSecret, SecretWordProvider},
    output::{print_check_result, print_validation_result},
    wordlists::{ALLOWED, ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_board",
    about = "Guess the word of the day in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of letters per word
    #[arg(short = 'l', long, global = true, default_value_t = wordle_board::config::WORD_LENGTH)]
    word_length: usize,

    /// Number of guesses before the round is lost
    #[arg(short = 'g', long, global = true, default_value_t = wordle_board::config::MAX_GUESSES)]
    max_guesses: usize,

    /// Dictionary: 'all' (default), 'answers', or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Fixed word of the day instead of a random pick
    #[arg(short = 's', long, global = true)]
    secret: Option<String>,

    /// Seed for the random word of the day
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without TUI
    Simple,

    /// Show the feedback for one guess against a secret word
    Check {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Check whether a word is fit to be the word of the day
    Validate {
        /// Word to validate
        word: String,
    },
}

/// Route logs to stderr, or to a file when requested
///
/// The TUI owns the terminal, so it logs nothing unless a file is given or
/// `RUST_LOG` asks for it.
fn setup_logging(log_file: Option<&PathBuf>, tui: bool) -> Result<()> {
    let default_filter = if tui && log_file.is_none() {
        "off"
    } else {
        "warn"
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let target = Box::new(
            fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?,
        );
        builder.target(env_logger::Target::Pipe(target));
    }

    builder.init();
    Ok(())
}

/// Load the dictionary based on the -w flag
///
/// - "all": every accepted guess
/// - "answers": only the words of the day
/// - "<path>": custom list from a file
fn load_dictionary(wordlist_mode: &str) -> Result<WordList> {
    use wordle_board::wordlists::loader::load_from_file;

    match wordlist_mode {
        "all" => Ok(words_from_slice(ALLOWED)),
        "answers" => Ok(words_from_slice(ANSWERS)),
        path => load_from_file(path).with_context(|| format!("Failed to load word list {path}")),
    }
}

fn secret_provider(cli: &Cli) -> Box<dyn SecretWordProvider> {
    match (&cli.secret, cli.seed) {
        (Some(word), _) => Box::new(FixedSecret::new(word.clone())),
        (None, Some(seed)) => Box::new(RandomSecret::seeded(ANSWERS, seed)),
        (None, None) => Box::new(RandomSecret::new(ANSWERS)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let tui = matches!(cli.command, None | Some(Commands::Play));
    setup_logging(cli.log_file.as_ref(), tui)?;

    let config = GameConfig::new(cli.word_length, cli.max_guesses)?;
    let dictionary = load_dictionary(&cli.wordlist)?;
    info!("Dictionary ready: {} words", dictionary.len());

    match &cli.command {
        None | Some(Commands::Play) => run_play_command(config, &dictionary, secret_provider(&cli)),
        Some(Commands::Simple) => {
            run_simple_command(config, &dictionary, secret_provider(&cli).as_mut())
        }
        Some(Commands::Check { secret, guess }) => {
            let result =
                check_guess(secret, guess, &config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Some(Commands::Validate { word }) => {
            let validator = GuessValidator::new(config, &dictionary);
            print_validation_result(&validate_word(word, &validator));
            Ok(())
        }
    }
}

fn run_simple_command(
    config: GameConfig,
    dictionary: &WordList,
    provider: &mut dyn SecretWordProvider,
) -> Result<()> {
    let stdin = io::stdin();
    let summary =
        run_simple(config, dictionary, provider, stdin.lock()).map_err(|e| anyhow::anyhow!(e))?;
    info!(
        "Played {} games, won {}",
        summary.games_played, summary.games_won
    );
    Ok(())
}

fn run_play_command(
    config: GameConfig,
    dictionary: &WordList,
    provider: Box<dyn SecretWordProvider>,
) -> Result<()> {
    use wordle_board::interactive::{App, run_tui};

    let app = App::new(config, dictionary, provider)?;
    run_tui(app)
}
