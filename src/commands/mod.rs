//! Command implementations

pub mod check;
pub mod simple;
pub mod validate;

pub use check::{CheckResult, check_guess};
pub use simple::{PlaySummary, run_simple};
pub use validate::{ValidationResult, validate_word};
