//! Word lists and letter sequences
//!
//! Provides embedded word lists compiled into the binary, the built-in letter
//! sequences, and loading of custom lists.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{
    DEFAULT_LIST_ID, DEFAULT_SEQUENCE_ID, READ_MINDS_SEQUENCE, SequencePreset, WordList,
    WordListError, builtin_sequences, builtin_word_lists, find_sequence, find_word_list,
    resolve_sequence,
};
pub use embedded::{
    ALL_NAMES, BOYS_NAMES, EN_UK, GIRLS_NAMES, MONTHS_STARS, READ_MINDS, WORDS_19K,
};

/// Pick a word list: a built-in id, or otherwise a path to a file
///
/// # Errors
/// Returns `WordListError` if `arg` is neither a known id nor a readable list file.
pub fn resolve_word_list(arg: &str) -> Result<WordList, WordListError> {
    match find_word_list(arg) {
        Ok(list) => Ok(list),
        Err(WordListError::UnknownList(_)) if std::path::Path::new(arg).is_file() => {
            loader::load_from_file(arg)
        }
        Err(e) => Err(e),
    }
}
