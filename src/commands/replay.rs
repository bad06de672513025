//! Replay command
//!
//! Applies a recorded string of choices to a fresh session and reports each step.

use crate::core::{Choice, LetterSequence};
use crate::filter::{FilterError, FilterState, initialize, transition};
use log::info;

/// Configuration for a replay
pub struct ReplayConfig {
    /// Choices as typed, e.g. `"LRRL"` or `"L → R"`
    pub choices: String,
}

impl ReplayConfig {
    #[must_use]
    pub const fn new(choices: String) -> Self {
        Self { choices }
    }
}

/// A single applied choice
pub struct ReplayStep {
    pub letter: Option<char>,
    pub choice: Choice,
    pub left_before: usize,
    pub left_after: usize,
    pub right_before: usize,
    pub right_after: usize,
}

/// Result of a replay
pub struct ReplayResult {
    pub steps: Vec<ReplayStep>,
    pub state: FilterState,
    /// Choices given after the session had already completed
    pub ignored: usize,
}

/// Replay `config.choices` over `words` and `letters`
///
/// Replaying stops as soon as the session completes; any remaining choices are
/// counted in `ignored` rather than applied.
///
/// # Errors
///
/// Returns `FilterError::InvalidChoice` if the choice string contains anything other
/// than `L`, `R` and separators. Lowercase letters are accepted.
pub fn replay<S: AsRef<str>>(
    config: &ReplayConfig,
    words: &[S],
    letters: &LetterSequence,
) -> Result<ReplayResult, FilterError> {
    let choices = Choice::parse_many(&config.choices.to_uppercase())?;

    let mut state = initialize(words, letters);
    let mut steps = Vec::with_capacity(choices.len());

    for &choice in &choices {
        if state.is_complete() {
            break;
        }

        let next = transition(&state, choice);
        steps.push(ReplayStep {
            letter: state.current_letter(),
            choice,
            left_before: state.left_words().len(),
            left_after: next.left_words().len(),
            right_before: state.right_words().len(),
            right_after: next.right_words().len(),
        });
        state = next;
    }

    let ignored = choices.len() - steps.len();
    if ignored > 0 {
        info!("Ignored {ignored} choices given after completion");
    }

    Ok(ReplayResult {
        steps,
        state,
        ignored,
    })
}
