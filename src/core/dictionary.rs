//! Dictionary lookup
//!
//! The game only needs a membership test. Callers can plug in any source by
//! implementing [`Dictionary`]; [`WordList`] is the in-memory implementation
//! used by the bundled word lists.

use rustc_hash::FxHashSet;

/// Membership test for words of the target language
///
/// Implementations must be pure: the same word always gives the same answer.
/// Lookups are case-insensitive; the game always passes uppercase text.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// Set of known words, stored uppercase
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any iterator of words; blank entries are skipped
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::{Dictionary, WordList};
    ///
    /// let words = WordList::from_words(["tests", "Wrong"]);
    /// assert!(words.contains("TESTS"));
    /// assert!(words.contains("wrong"));
    /// assert!(!words.contains("QWERT"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for word in words {
            list.insert(word.as_ref());
        }
        list
    }

    /// Add a word; returns false if it was already present or blank
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_uppercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_uppercase())
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let words = WordList::from_words(["crane"]);
        assert!(words.contains("CRANE"));
        assert!(words.contains("crane"));
        assert!(words.contains("CrAnE"));
    }

    #[test]
    fn blank_entries_skipped() {
        let words = WordList::from_words(["crane", "", "   ", "slate"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn duplicates_collapse() {
        let mut words = WordList::new();
        assert!(words.insert("crane"));
        assert!(!words.insert("CRANE"));
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn accented_words_uppercased() {
        let words: WordList = ["ñandú"].into_iter().collect();
        assert!(words.contains("ÑANDÚ"));
    }

    #[test]
    fn reference_is_dictionary() {
        fn lookup(dictionary: impl Dictionary, word: &str) -> bool {
            dictionary.contains(word)
        }

        let words = WordList::from_words(["tests"]);
        assert!(lookup(&words, "TESTS"));
        assert!(!lookup(&words, "QWERT"));
    }

    #[test]
    fn empty_list_contains_nothing() {
        let words = WordList::new();
        assert!(words.is_empty());
        assert!(!words.contains("CRANE"));
    }
}
