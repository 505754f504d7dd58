//! Word list loading utilities
//!
//! Builds dictionaries from files or from the embedded constants.

use crate::core::WordList;
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// One word per line; blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_board::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/allowed.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_str(&content);

    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a newline-separated word list
#[must_use]
pub fn words_from_str(content: &str) -> WordList {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use wordle_board::core::Dictionary;
/// use wordle_board::wordlists::loader::words_from_slice;
/// use wordle_board::wordlists::ALLOWED;
///
/// let words = words_from_slice(ALLOWED);
/// assert_eq!(words.len(), ALLOWED.len());
/// assert!(words.contains("TESTS"));
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordList {
    WordList::from_words(slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    #[test]
    fn words_from_slice_converts_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert!(words.contains("CRANE"));
        assert!(words.contains("IRATE"));
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_str_skips_comments_and_blanks() {
        let words = words_from_str("# header\ncrane\n\n  slate  \n#tests\n");

        assert_eq!(words.len(), 2);
        assert!(words.contains("SLATE"));
        assert!(!words.contains("TESTS"));
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("does/not/exist.txt").is_err());
    }

    #[test]
    fn load_from_embedded_allowed() {
        use crate::wordlists::ALLOWED;

        let words = words_from_slice(ALLOWED);
        assert_eq!(words.len(), ALLOWED.len());
    }
}
