//! Filter state and its transitions
//!
//! The engine is value-semantic: [`transition`] borrows a state and returns the next
//! one. Callers own whichever state is current and replace it after each choice.

use super::partition::{partition, partition_by};
use super::result::GameResult;
use crate::core::{Choice, ChoiceError, LetterSequence};
use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use std::fmt;

/// Session phase derived from [`FilterState::is_complete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    /// Terminal by convention; further transitions are not rejected
    Complete,
}

/// Error type for rejected transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    InvalidChoice(ChoiceError),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChoice(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidChoice(e) => Some(e),
        }
    }
}

impl From<ChoiceError> for FilterError {
    fn from(e: ChoiceError) -> Self {
        Self::InvalidChoice(e)
    }
}

/// Complete state of one filtering session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    current_letter: Option<char>,
    current_letter_index: usize,
    sequence: Vec<Choice>,
    left_words: Vec<String>,
    right_words: Vec<String>,
    used_letters: FxHashSet<char>,
    is_complete: bool,
    letter_sequence: LetterSequence,
}

impl FilterState {
    /// The letter being asked about, `None` once the sequence is exhausted
    #[inline]
    #[must_use]
    pub const fn current_letter(&self) -> Option<char> {
        self.current_letter
    }

    /// Zero-based index into the letter sequence; equals the number of choices made
    #[inline]
    #[must_use]
    pub const fn current_letter_index(&self) -> usize {
        self.current_letter_index
    }

    /// Every choice made so far, in order
    #[inline]
    #[must_use]
    pub fn sequence(&self) -> &[Choice] {
        &self.sequence
    }

    #[inline]
    #[must_use]
    pub fn left_words(&self) -> &[String] {
        &self.left_words
    }

    #[inline]
    #[must_use]
    pub fn right_words(&self) -> &[String] {
        &self.right_words
    }

    /// Letters already asked about; informational only
    #[inline]
    #[must_use]
    pub const fn used_letters(&self) -> &FxHashSet<char> {
        &self.used_letters
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    #[inline]
    #[must_use]
    pub const fn letter_sequence(&self) -> &LetterSequence {
        &self.letter_sequence
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.is_complete {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }

    /// One-based step number and total steps, for "step 3 / 10" displays
    ///
    /// The step number never exceeds the total, even after the sequence is exhausted.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let total = self.letter_sequence.len();
        ((self.current_letter_index + 1).min(total), total)
    }

    /// Summary of the session for results screens and export
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult {
            left_words: self.left_words.clone(),
            right_words: self.right_words.clone(),
            total_choices: self.sequence.len(),
            final_choice: self.sequence.last().copied(),
        }
    }
}

/// Check whether either pool has narrowed to a single word or none
#[inline]
#[must_use]
pub fn pools_exhausted<S: AsRef<str>>(left_words: &[S], right_words: &[S]) -> bool {
    left_words.len() <= 1 || right_words.len() <= 1
}

/// Start a session over `word_list`, asking about `letter_sequence` in order
///
/// Both pools start as independent copies of `word_list`. Empty inputs are not
/// rejected: the first transition on them completes the session.
///
/// # Examples
/// ```
/// use mind_reader::core::LetterSequence;
/// use mind_reader::filter::initialize;
///
/// let letters = LetterSequence::new("NT").unwrap();
/// let state = initialize(&["Necessary", "Toothbrush", "Antidote"], &letters);
///
/// assert_eq!(state.current_letter(), Some('N'));
/// assert_eq!(state.left_words().len(), 3);
/// assert!(!state.is_complete());
/// ```
#[must_use]
pub fn initialize<S: AsRef<str>>(word_list: &[S], letter_sequence: &LetterSequence) -> FilterState {
    let words: Vec<String> = word_list.iter().map(|w| w.as_ref().to_string()).collect();

    info!(
        "Session started: {} words, letter sequence {letter_sequence}",
        words.len()
    );

    FilterState {
        current_letter: letter_sequence.get(0),
        current_letter_index: 0,
        sequence: Vec::new(),
        left_words: words.clone(),
        right_words: words,
        used_letters: FxHashSet::default(),
        is_complete: false,
        letter_sequence: letter_sequence.clone(),
    }
}

/// Apply one choice to `state` and return the next state
///
/// The left pool keeps its left-pattern half and the right pool keeps its
/// right-pattern half, both filtered with the same letter and choice.
///
/// # Examples
/// ```
/// use mind_reader::core::{Choice, LetterSequence};
/// use mind_reader::filter::{initialize, transition};
///
/// let letters = LetterSequence::new("NT").unwrap();
/// let state = initialize(&["Necessary", "Toothbrush", "Antidote", "Remember"], &letters);
/// let next = transition(&state, Choice::Left);
///
/// assert_eq!(next.left_words(), ["Necessary", "Antidote"]);
/// assert_eq!(next.right_words(), ["Toothbrush", "Remember"]);
/// assert_eq!(next.current_letter(), Some('T'));
/// ```
#[must_use]
pub fn transition(state: &FilterState, choice: Choice) -> FilterState {
    let letter = state.current_letter;

    let (left_words, right_words) = match letter {
        Some(letter) => (
            partition(&state.left_words, letter, choice).left_words,
            partition(&state.right_words, letter, choice).right_words,
        ),
        // Past the end of the sequence the letter is empty, and every word contains it
        None => (
            partition_by(&state.left_words, choice, |_| true).left_words,
            partition_by(&state.right_words, choice, |_| true).right_words,
        ),
    };

    let mut sequence = Vec::with_capacity(state.sequence.len() + 1);
    sequence.extend_from_slice(&state.sequence);
    sequence.push(choice);

    let next_index = state.current_letter_index + 1;
    let next_letter = state.letter_sequence.get(next_index);

    let mut used_letters = state.used_letters.clone();
    if let Some(letter) = letter {
        used_letters.insert(letter);
    }

    let is_complete = next_index >= state.letter_sequence.len()
        || pools_exhausted(&left_words, &right_words);

    debug!(
        "Choice {choice} on {}: left {} -> {}, right {} -> {}",
        letter.map_or_else(|| "-".to_string(), |c| c.to_string()),
        state.left_words.len(),
        left_words.len(),
        state.right_words.len(),
        right_words.len()
    );

    if is_complete && !state.is_complete {
        info!(
            "Session complete after {} choices ({} left, {} right)",
            sequence.len(),
            left_words.len(),
            right_words.len()
        );
    }

    FilterState {
        current_letter: next_letter,
        current_letter_index: next_index,
        sequence,
        left_words,
        right_words,
        used_letters,
        is_complete,
        letter_sequence: state.letter_sequence.clone(),
    }
}

/// Parse `raw` as a choice and apply it
///
/// # Errors
/// Returns `FilterError::InvalidChoice` if `raw` is neither `L` nor `R`. No state is
/// produced in that case, so the caller's current state stays as it was.
pub fn transition_input(state: &FilterState, raw: &str) -> Result<FilterState, FilterError> {
    let choice = raw.parse::<Choice>().inspect_err(|e| warn!("Rejected input: {e}"))?;
    Ok(transition(state, choice))
}
