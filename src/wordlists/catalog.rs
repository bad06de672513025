//! Built-in word lists and letter sequences
//!
//! Lists and sequences are looked up by a short id such as `en-uk` or `vowels-only`.

use super::embedded::{
    ALL_NAMES, BOYS_NAMES, EN_UK, GIRLS_NAMES, MONTHS_STARS, READ_MINDS, WORDS_19K,
};
use crate::core::{LetterSequence, SequenceError};
use std::fmt;

/// Letters asked about on the read-minds screen, one per predefined word
pub const READ_MINDS_SEQUENCE: &str = "NTRLCSEUAI";

/// A named list of candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    pub id: String,
    pub name: String,
    pub words: Vec<String>,
    pub is_custom: bool,
}

/// A named letter sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePreset {
    pub id: String,
    pub name: String,
    pub sequence: LetterSequence,
    pub is_custom: bool,
}

/// Error type for word list lookup and loading
#[derive(Debug)]
pub enum WordListError {
    Io(std::io::Error),
    TooFewWords(usize),
    UnknownList(String),
    UnknownSequence(String),
    InvalidSequence(SequenceError),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::TooFewWords(n) => write!(
                f,
                "A word list needs at least {} words, got {n}",
                super::loader::MIN_CUSTOM_WORDS
            ),
            Self::UnknownList(id) => write!(f, "Unknown word list '{id}'"),
            Self::UnknownSequence(id) => write!(f, "Unknown letter sequence '{id}'"),
            Self::InvalidSequence(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidSequence(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WordListError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<SequenceError> for WordListError {
    fn from(e: SequenceError) -> Self {
        Self::InvalidSequence(e)
    }
}

/// (id, display name, words)
const BUILTIN_LISTS: &[(&str, &str, &[&str])] = &[
    ("read-minds", "Read Minds (10 words)", READ_MINDS),
    ("en-uk", "EN-UK Dictionary", EN_UK),
    ("19k-words", "19K Words", WORDS_19K),
    ("all-names", "All Names", ALL_NAMES),
    ("boys-names", "Boys Names", BOYS_NAMES),
    ("girls-names", "Girls Names", GIRLS_NAMES),
    ("months-stars", "Months & Star Signs", MONTHS_STARS),
];

/// (id, display name, letters)
const BUILTIN_SEQUENCES: &[(&str, &str, &str)] = &[
    ("read-minds", "Read Minds", READ_MINDS_SEQUENCE),
    ("full-alphabet", "Full Alphabet", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
    ("seatjk", "SEATJK", "SEATJK"),
    ("vowels-only", "Vowels Only", "AEIOU"),
    ("most-frequent", "Most Frequent", "ETAOINSHRDLUCMFWYPVBGKJQXZ"),
];

/// Id of the list a new session uses when none is selected
pub const DEFAULT_LIST_ID: &str = "read-minds";

/// Id of the sequence a new session uses when none is selected
pub const DEFAULT_SEQUENCE_ID: &str = "read-minds";

/// All built-in word lists, in display order
#[must_use]
pub fn builtin_word_lists() -> Vec<WordList> {
    BUILTIN_LISTS
        .iter()
        .map(|&(id, name, words)| WordList {
            id: id.to_string(),
            name: name.to_string(),
            words: words.iter().map(ToString::to_string).collect(),
            is_custom: false,
        })
        .collect()
}

/// All built-in letter sequences, in display order
#[must_use]
pub fn builtin_sequences() -> Vec<SequencePreset> {
    BUILTIN_SEQUENCES
        .iter()
        .filter_map(|&(id, name, letters)| {
            LetterSequence::new(letters).ok().map(|sequence| SequencePreset {
                id: id.to_string(),
                name: name.to_string(),
                sequence,
                is_custom: false,
            })
        })
        .collect()
}

/// Look up a built-in word list by id
///
/// # Errors
/// Returns `WordListError::UnknownList` if no list has that id.
///
/// # Examples
/// ```
/// use mind_reader::wordlists::find_word_list;
///
/// let list = find_word_list("months-stars").unwrap();
/// assert!(list.words.contains(&"gemini".to_string()));
/// assert!(find_word_list("klingon").is_err());
/// ```
pub fn find_word_list(id: &str) -> Result<WordList, WordListError> {
    builtin_word_lists()
        .into_iter()
        .find(|list| list.id == id)
        .ok_or_else(|| WordListError::UnknownList(id.to_string()))
}

/// Look up a built-in letter sequence by id
///
/// # Errors
/// Returns `WordListError::UnknownSequence` if no sequence has that id.
pub fn find_sequence(id: &str) -> Result<SequencePreset, WordListError> {
    builtin_sequences()
        .into_iter()
        .find(|preset| preset.id == id)
        .ok_or_else(|| WordListError::UnknownSequence(id.to_string()))
}

/// Resolve a sequence argument: a built-in id, or otherwise custom letters
///
/// # Errors
/// Returns `WordListError::InvalidSequence` if `arg` is not a known id and not a
/// valid custom sequence.
pub fn resolve_sequence(arg: &str) -> Result<SequencePreset, WordListError> {
    if let Ok(preset) = find_sequence(arg) {
        return Ok(preset);
    }

    let sequence = LetterSequence::custom(arg)?;
    Ok(SequencePreset {
        id: "custom".to_string(),
        name: "Custom".to_string(),
        sequence,
        is_custom: true,
    })
}
