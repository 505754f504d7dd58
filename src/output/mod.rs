//! Terminal output formatting
//!
//! Display utilities for the line-based game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_check_result, print_outcome, print_validation_result};
