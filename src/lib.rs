//! Mind Reader
//!
//! A letter-by-letter guessing game. The player thinks of a word, answers left or
//! right for each letter, and two word pools narrow under opposite readings of
//! those answers until one of them gives the word away.
//!
//! # Quick Start
//!
//! ```rust
//! use mind_reader::core::{Choice, LetterSequence};
//! use mind_reader::filter::{initialize, transition};
//! use mind_reader::wordlists::{READ_MINDS, READ_MINDS_SEQUENCE};
//!
//! let letters = LetterSequence::new(READ_MINDS_SEQUENCE).unwrap();
//! let state = initialize(READ_MINDS, &letters);
//!
//! let state = transition(&state, Choice::Left);
//! let state = transition(&state, Choice::Right);
//!
//! assert!(state.is_complete());
//! assert_eq!(state.result().revealed_word(), Some("Toothbrush"));
//! ```

// Core domain types
pub mod core;

// Filtering engine
pub mod filter;

// Word lists and letter sequences
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
