//! Core domain types for the letter game
//!
//! This module contains the input value types with no UI dependencies.
//! All types here are pure and cheap to clone.

mod choice;
mod sequence;

pub use choice::{Choice, ChoiceError};
pub use sequence::{LetterSequence, MAX_CUSTOM_LEN, MIN_CUSTOM_LEN, SequenceError};
