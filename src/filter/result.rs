//! End-of-session summary

use crate::core::Choice;
use serde::{Deserialize, Serialize};

/// What a results screen needs from a finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub left_words: Vec<String>,
    pub right_words: Vec<String>,
    pub total_choices: usize,
    pub final_choice: Option<Choice>,
}

impl GameResult {
    /// The only word left on one side, if a side narrowed to exactly one
    ///
    /// Left is checked first.
    #[must_use]
    pub fn revealed_word(&self) -> Option<&str> {
        [&self.left_words, &self.right_words]
            .into_iter()
            .find(|pool| pool.len() == 1)
            .map(|pool| pool[0].as_str())
    }
}
