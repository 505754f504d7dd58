//! Build script embedding the bundled word lists
//!
//! Each `data/*.txt` file becomes a `&[&str]` constant plus its length.
//! Words are checked here so that a bad list fails the build instead of a game.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// (source file, generated file, constant name, doc line)
const LISTS: &[(&str, &str, &str, &str)] = &[
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Candidate words of the day",
    ),
    (
        "data/allowed.txt",
        "allowed.rs",
        "ALLOWED",
        "Dictionary of accepted guesses",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");

    for &(source, target, const_name, doc) in LISTS {
        println!("cargo:rerun-if-changed={source}");

        let content =
            fs::read_to_string(source).unwrap_or_else(|e| panic!("Failed to read {source}: {e}"));
        let words = parse_words(source, &content);
        let generated = render_const(const_name, doc, &words);

        let target = Path::new(&out_dir).join(target);
        fs::write(&target, generated)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", target.display()));
    }
}

/// Non-blank, non-`#` lines; every word must be lowercase letters
fn parse_words<'a>(source: &str, content: &'a str) -> Vec<&'a str> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, word)| {
            assert!(
                word.chars().all(char::is_lowercase),
                "{source}:{line_no}: '{word}' is not a lowercase word"
            );
            word
        })
        .collect()
}

fn render_const(const_name: &str, doc: &str, words: &[&str]) -> String {
    let count = words.len();
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "// Generated from the bundled word list, do not edit\n");
    let _ = writeln!(out, "/// {doc} ({count} words)");
    let _ = writeln!(out, "pub const {const_name}: &[&str] = &[");
    for word in words {
        let _ = writeln!(out, "    {word:?},");
    }
    let _ = writeln!(out, "];\n");
    let _ = writeln!(out, "/// Number of words in [`{const_name}`]");
    let _ = writeln!(out, "pub const {const_name}_COUNT: usize = {count};");

    out
}
