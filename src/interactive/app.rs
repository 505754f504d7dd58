//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::Dictionary;
use crate::game::{
    GameSession, GameStatus, GuessInput, Rejection, SecretWordProvider, SubmitOutcome,
};
use anyhow::{Result, anyhow};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub config: GameConfig,
    pub dictionary: &'a dyn Dictionary,
    pub provider: Box<dyn SecretWordProvider + 'a>,
    pub session: GameSession<&'a dyn Dictionary>,
    pub input: GuessInput,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts wins in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the provider has no word of the day.
    pub fn new(
        config: GameConfig,
        dictionary: &'a dyn Dictionary,
        mut provider: Box<dyn SecretWordProvider + 'a>,
    ) -> Result<Self> {
        let secret = provider
            .secret_word()
            .ok_or_else(|| anyhow!("No word of the day available"))?;

        let mut app = Self {
            config,
            dictionary,
            provider,
            session: GameSession::new(config, dictionary, secret),
            input: GuessInput::new(config.word_length()),
            messages: Vec::new(),
            stats: Statistics {
                guess_distribution: vec![0; config.max_guesses() + 1],
                ..Statistics::default()
            },
            should_quit: false,
        };
        app.announce_round();
        Ok(app)
    }

    fn announce_round(&mut self) {
        if let Some(warning) = self.session.warning() {
            let text = warning.to_string();
            self.add_message(&text, MessageStyle::Warning);
        }
        self.add_message(
            &format!(
                "Guess the {}-letter word in {} tries.",
                self.config.word_length(),
                self.config.max_guesses()
            ),
            MessageStyle::Info,
        );
    }

    /// Input is withdrawn once the round is over
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        !self.session.status().is_terminal()
    }

    pub fn type_char(&mut self, c: char) {
        if self.input_enabled() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.input_enabled() {
            self.input.backspace();
        }
    }

    /// Submit the current input; it is cleared only when accepted
    pub fn submit(&mut self) {
        match self.session.submit(self.input.as_str()) {
            SubmitOutcome::Accepted { status, .. } => {
                self.input.clear();
                match status {
                    GameStatus::Won => self.record_result(true),
                    GameStatus::Lost => self.record_result(false),
                    GameStatus::InProgress => {}
                }
            }
            SubmitOutcome::Rejected(Rejection::GameOver) => {}
            SubmitOutcome::Rejected(Rejection::NotInDictionary(word)) => {
                self.add_message(&format!("{word}: not in word list"), MessageStyle::Error);
            }
            SubmitOutcome::Rejected(Rejection::Malformed(_)) => {
                self.add_message(
                    &format!("Type {} letters", self.config.word_length()),
                    MessageStyle::Error,
                );
            }
        }
    }

    fn record_result(&mut self, won: bool) {
        self.stats.total_games += 1;

        let status = self.session.status();
        let message = status.message().unwrap_or_default();

        if won {
            self.stats.games_won += 1;
            let guess_count = self.session.history().len();
            if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                *slot += 1;
            }
            self.add_message(message, MessageStyle::Success);
        } else {
            self.add_message(message, MessageStyle::Error);
            let reveal = format!("The word was {}", self.session.secret());
            self.add_message(&reveal, MessageStyle::Info);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a new round with the next word of the day
    pub fn new_game(&mut self) {
        let Some(secret) = self.provider.secret_word() else {
            self.add_message("No word of the day available", MessageStyle::Error);
            return;
        };

        self.session = GameSession::new(self.config, self.dictionary, secret);
        self.input.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.announce_round();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                // Letters are guesses while playing, commands once the round is over
                KeyCode::Char('q') if !app.input_enabled() => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if !app.input_enabled() => {
                    app.new_game();
                }
                KeyCode::Char(c) => app.type_char(c),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
