//! Interactive TUI mode
//!
//! Full-screen terminal front-end for a session.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
