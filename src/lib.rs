//! Word of the Day
//!
//! A word-guessing game: find the secret word within a bounded number of
//! guesses, with per-letter feedback after each one.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_board::config::GameConfig;
//! use wordle_board::core::WordList;
//! use wordle_board::game::{GameSession, GameStatus, SubmitOutcome};
//!
//! let dictionary = WordList::from_words(["world", "wrong"]);
//! let mut session = GameSession::new(GameConfig::default(), &dictionary, "WORLD");
//!
//! if let SubmitOutcome::Accepted { guess, status } = session.submit("wrong") {
//!     assert_eq!(guess.pattern(), "GYY--");
//!     assert_eq!(status, GameStatus::InProgress);
//! }
//! ```

// Game configuration
pub mod config;

// Core domain types
pub mod core;

// Validation, sessions, word of the day
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
