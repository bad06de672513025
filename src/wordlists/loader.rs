//! Word list loading utilities
//!
//! Custom lists come from text files or pasted text with one word per line.

use super::catalog::{WordList, WordListError};
use log::debug;
use std::fs;
use std::path::Path;

/// Fewest words a custom list may contain
pub const MIN_CUSTOM_WORDS: usize = 3;

/// Build a custom word list from text with one word per line
///
/// Lines are trimmed and blank lines skipped. Duplicates are kept.
///
/// # Errors
/// Returns `WordListError::TooFewWords` if fewer than 3 words remain.
///
/// # Examples
/// ```
/// use mind_reader::wordlists::loader::parse_word_list;
///
/// let list = parse_word_list("Pets", "cat\n\n  dog \nfish\n").unwrap();
/// assert_eq!(list.words, ["cat", "dog", "fish"]);
/// assert!(list.is_custom);
///
/// assert!(parse_word_list("Tiny", "one\ntwo").is_err());
/// ```
pub fn parse_word_list(name: &str, content: &str) -> Result<WordList, WordListError> {
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect();

    if words.len() < MIN_CUSTOM_WORDS {
        return Err(WordListError::TooFewWords(words.len()));
    }

    let name = name.trim();
    Ok(WordList {
        id: format!("custom-{}", slug(name)),
        name: name.to_string(),
        words,
        is_custom: true,
    })
}

/// Load a custom word list from a file
///
/// The list is named after the file stem.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or `TooFewWords` if it holds
/// fewer than 3 words.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let name = path
        .file_stem()
        .map_or_else(|| "custom".to_string(), |s| s.to_string_lossy().into_owned());

    let list = parse_word_list(&name, &content)?;
    debug!("Loaded {} words from {}", list.words.len(), path.display());
    Ok(list)
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_skips_blank_lines() {
        let list = parse_word_list("Fruit", "apple\n\n\nbanana\r\n  cherry  \n").unwrap();
        assert_eq!(list.words, ["apple", "banana", "cherry"]);
        assert_eq!(list.name, "Fruit");
        assert_eq!(list.id, "custom-fruit");
    }

    #[test]
    fn parse_keeps_duplicates() {
        let list = parse_word_list("Dupes", "echo\necho\necho").unwrap();
        assert_eq!(list.words.len(), 3);
    }

    #[test]
    fn parse_too_few_words() {
        assert!(matches!(
            parse_word_list("Short", "one\n\ntwo\n"),
            Err(WordListError::TooFewWords(2))
        ));
        assert!(matches!(
            parse_word_list("Empty", ""),
            Err(WordListError::TooFewWords(0))
        ));
    }

    #[test]
    fn slug_replaces_symbols() {
        assert_eq!(slug("My Pets!"), "my-pets-");
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::Builder::new()
            .prefix("animals")
            .suffix(".txt")
            .tempfile()
            .unwrap();
        writeln!(file, "zebra\nyak\n\nxerus").unwrap();

        let list = load_from_file(file.path()).unwrap();
        assert_eq!(list.words, ["zebra", "yak", "xerus"]);
        assert!(list.name.starts_with("animals"));
    }

    #[test]
    fn load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(WordListError::Io(_))));
    }
}
