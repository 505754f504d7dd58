//! Game session state machine
//!
//! A session owns the secret word and the ordered history of evaluated
//! guesses. The only way to change it is [`GameSession::submit`].
//!
//! ```text
//! InProgress --submit(all correct)--------------> Won
//! InProgress --submit(history == max guesses)---> Lost
//! InProgress --submit(otherwise / rejected)-----> InProgress
//! Won, Lost  --submit---------------------------> unchanged
//! ```

use super::validator::{GuessValidator, Rejection, SecretWordWarning};
use crate::config::{DEFEAT_MESSAGE, GameConfig, VICTORY_MESSAGE};
use crate::core::{Dictionary, EvaluatedGuess, SecretWord};
use log::{debug, info, warn};

/// Coarse session status for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// End-of-game message, `None` while playing
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::InProgress => None,
            Self::Won => Some(VICTORY_MESSAGE),
            Self::Lost => Some(DEFEAT_MESSAGE),
        }
    }
}

/// Session state with its history
///
/// `Won` and `Lost` are absorbing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    InProgress { guesses: Vec<EvaluatedGuess> },
    Won { guesses: Vec<EvaluatedGuess> },
    Lost { guesses: Vec<EvaluatedGuess> },
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress {
            guesses: Vec::new(),
        }
    }
}

impl GameState {
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        match self {
            Self::InProgress { .. } => GameStatus::InProgress,
            Self::Won { .. } => GameStatus::Won,
            Self::Lost { .. } => GameStatus::Lost,
        }
    }

    /// Guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[EvaluatedGuess] {
        match self {
            Self::InProgress { guesses } | Self::Won { guesses } | Self::Lost { guesses } => {
                guesses
            }
        }
    }

    /// Append a scored guess and derive the next state
    ///
    /// Terminal states are returned unchanged.
    #[must_use]
    pub fn record(self, guess: EvaluatedGuess, solved: bool, max_guesses: usize) -> Self {
        match self {
            Self::InProgress { mut guesses } => {
                guesses.push(guess);

                if solved {
                    Self::Won { guesses }
                } else if guesses.len() >= max_guesses {
                    Self::Lost { guesses }
                } else {
                    Self::InProgress { guesses }
                }
            }
            terminal => terminal,
        }
    }
}

/// Result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted {
        guess: EvaluatedGuess,
        status: GameStatus,
    },
    Rejected(Rejection),
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// One round of the game
pub struct GameSession<D> {
    validator: GuessValidator<D>,
    secret: SecretWord,
    state: GameState,
    warning: Option<SecretWordWarning>,
}

impl<D: Dictionary> GameSession<D> {
    /// Start a round with the given word of the day
    ///
    /// A misconfigured word is logged as a single warning and kept; the
    /// session still starts.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::config::GameConfig;
    /// use wordle_board::core::WordList;
    /// use wordle_board::game::{GameSession, GameStatus};
    ///
    /// let dictionary = WordList::from_words(["tests", "wrong"]);
    /// let mut session = GameSession::new(GameConfig::default(), &dictionary, "TESTS");
    ///
    /// assert!(session.submit("wrong").is_accepted());
    /// assert!(!session.submit("qwert").is_accepted());
    /// session.submit("tests");
    /// assert_eq!(session.status(), GameStatus::Won);
    /// assert_eq!(session.history().len(), 2);
    /// ```
    pub fn new(config: GameConfig, dictionary: D, secret: impl Into<String>) -> Self {
        let validator = GuessValidator::new(config, dictionary);
        let secret = SecretWord::new(secret);

        let violations = validator.validate_secret_word(secret.text());
        let warning = if violations.is_empty() {
            None
        } else {
            let warning = SecretWordWarning {
                word: secret.text().to_string(),
                violations,
            };
            warn!("{warning}");
            Some(warning)
        };

        info!(
            "Session started: {} letters, {} guesses",
            config.word_length(),
            config.max_guesses()
        );

        Self {
            validator,
            secret,
            state: GameState::default(),
            warning,
        }
    }

    /// Submit raw player input
    ///
    /// The input is normalized first. Unknown or malformed words are
    /// rejected without touching the history; any dictionary word of the
    /// right length is scored and recorded.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        if self.state.status().is_terminal() {
            debug!("Submission '{raw}' ignored: game over");
            return SubmitOutcome::Rejected(Rejection::GameOver);
        }

        let candidate = self.validator.normalize(raw);
        let guess = match self.validator.check(&candidate) {
            Ok(guess) => guess,
            Err(rejection) => {
                debug!("Submission '{candidate}' rejected: {rejection}");
                return SubmitOutcome::Rejected(rejection);
            }
        };

        let evaluated = EvaluatedGuess::evaluate(&guess, &self.secret);
        let solved = evaluated.is_all_correct() && guess.word().len() == self.secret.word().len();

        let max_guesses = self.config().max_guesses();
        self.state = std::mem::take(&mut self.state).record(evaluated.clone(), solved, max_guesses);

        let status = self.state.status();
        debug!(
            "Guess {}/{}: {evaluated} -> {status:?}",
            self.state.guesses().len(),
            max_guesses
        );

        SubmitOutcome::Accepted {
            guess: evaluated,
            status,
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.validator.config()
    }

    #[inline]
    #[must_use]
    pub const fn validator(&self) -> &GuessValidator<D> {
        &self.validator
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Evaluated guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[EvaluatedGuess] {
        self.state.guesses()
    }

    /// Diagnostic for a misconfigured word of the day
    #[must_use]
    pub const fn warning(&self) -> Option<&SecretWordWarning> {
        self.warning.as_ref()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.config().max_guesses().saturating_sub(self.history().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Guess, LetterFeedback, WordList};

    fn dictionary() -> WordList {
        WordList::from_words([
            "tests", "wrong", "guess", "hello", "world", "happy", "coder",
        ])
    }

    fn evaluated(guess: &str, secret: &str) -> EvaluatedGuess {
        EvaluatedGuess::evaluate(&Guess::new(guess, 5).unwrap(), &SecretWord::new(secret))
    }

    #[test]
    fn starts_in_progress_with_empty_history() {
        let session = GameSession::new(GameConfig::default(), dictionary(), "TESTS");
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(session.history().is_empty());
        assert!(session.warning().is_none());
        assert_eq!(session.guesses_remaining(), 6);
    }

    #[test]
    fn correct_guess_wins() {
        let mut session = GameSession::new(GameConfig::default(), dictionary(), "TESTS");

        let outcome = session.submit("TESTS");
        let SubmitOutcome::Accepted { guess, status } = outcome else {
            panic!("guess should be accepted");
        };

        assert_eq!(status, GameStatus::Won);
        assert!(guess.feedback().all(|f| f == LetterFeedback::Correct));
        assert_eq!(session.status().message(), Some(VICTORY_MESSAGE));
    }

    #[test]
    fn terminal_state_ignores_submissions() {
        let mut session = GameSession::new(GameConfig::default(), dictionary(), "TESTS");
        session.submit("TESTS");

        assert_eq!(
            session.submit("WRONG"),
            SubmitOutcome::Rejected(Rejection::GameOver)
        );
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn rejected_submission_leaves_state_alone() {
        let mut session = GameSession::new(GameConfig::default(), dictionary(), "TESTS");

        let outcome = session.submit("QWERT");
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(Rejection::NotInDictionary("QWERT".to_string()))
        );
        assert!(session.history().is_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn record_is_absorbing() {
        let won = GameState::Won {
            guesses: vec![evaluated("TESTS", "TESTS")],
        };
        let after = won.clone().record(evaluated("WRONG", "TESTS"), false, 6);
        assert_eq!(after, won);
    }

    #[test]
    fn record_loses_at_budget() {
        let state = GameState::default().record(evaluated("WRONG", "TESTS"), false, 2);
        assert_eq!(state.status(), GameStatus::InProgress);

        let state = state.record(evaluated("GUESS", "TESTS"), false, 2);
        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.guesses().len(), 2);
    }

    #[test]
    fn win_on_last_guess_is_win() {
        let state = GameState::default().record(evaluated("TESTS", "TESTS"), true, 1);
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn status_messages() {
        assert_eq!(GameStatus::InProgress.message(), None);
        assert_eq!(GameStatus::Won.message(), Some(VICTORY_MESSAGE));
        assert_eq!(GameStatus::Lost.message(), Some(DEFEAT_MESSAGE));
        assert!(!GameStatus::InProgress.is_terminal());
    }

    #[test]
    fn prefix_of_long_secret_does_not_win() {
        let dictionary = WordList::from_words(["longe"]);
        let mut session = GameSession::new(GameConfig::default(), &dictionary, "LONGER");
        assert!(session.warning().is_some());

        session.submit("LONGE");
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn heavily_repeated_secret_still_scores() {
        let dictionary = WordList::from_words(["aaaaa"]);
        let mut session = GameSession::new(GameConfig::default(), &dictionary, "A".repeat(300));
        assert!(session.warning().is_some());

        let SubmitOutcome::Accepted { guess, status } = session.submit("AAAAA") else {
            panic!("dictionary word of the right length must be accepted");
        };
        assert!(guess.is_all_correct());
        assert_eq!(status, GameStatus::InProgress);
    }
}
