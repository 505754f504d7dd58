//! Guess input buffer
//!
//! Holds what the player is typing. Normalization runs on every edit, so the
//! buffer only ever contains uppercase letters up to the word length.

use super::validator::normalize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessInput {
    value: String,
    capacity: usize,
}

impl GuessInput {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            value: String::new(),
            capacity,
        }
    }

    /// Replace the whole content, as when text is pasted
    pub fn set(&mut self, raw: &str) {
        self.value = normalize(raw, self.capacity);
    }

    /// Type one character; non-letters and overflow are ignored
    pub fn push(&mut self, c: char) {
        let mut raw = std::mem::take(&mut self.value);
        raw.push(c);
        self.value = normalize(&raw, self.capacity);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Number of letters typed
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }
}
