//! Game rules: validation, sessions and word of the day selection

mod input;
mod secret;
mod session;
mod validator;

pub use input::GuessInput;
pub use secret::{FixedSecret, RandomSecret, SecretWordProvider};
pub use session::{GameSession, GameState, GameStatus, SubmitOutcome};
pub use validator::{
    GuessValidator, Rejection, SecretWordViolation, SecretWordWarning, normalize,
};
