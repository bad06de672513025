//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::LetterSequence;
use crate::filter::{FilterState, initialize, transition_input};
use crate::output::formatters::{format_history, preview_words, summary_text};
use crate::wordlists::WordList;
use anyhow::Result;
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

/// Pool size below which the prompt lists the words themselves
const SHOW_WORDS_BELOW: usize = 8;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(list: &WordList, letters: &LetterSequence) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple_with(&mut stdin.lock(), &mut stdout, list, letters)
}

/// Run the game loop over arbitrary input and output streams
///
/// End of input is treated as `quit`.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple_with<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    list: &WordList,
    letters: &LetterSequence,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Mind Reader - Interactive Mode               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "Word list: {} ({} words)", list.name, list.words.len())?;
    writeln!(out, "Letters:   {letters}\n")?;
    writeln!(out, "For each letter, answer L or R.")?;
    writeln!(out, "Commands: 'words' to show both pools, 'undo', 'new', 'quit'\n")?;

    let mut state = initialize(&list.words, letters);
    let mut history: Vec<FilterState> = Vec::new();

    loop {
        if state.is_complete() {
            writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
            write!(out, "{}", summary_text(&state.result()))?;
            if !state.sequence().is_empty() {
                writeln!(out, "\nChoices: {}", format_history(state.sequence()))?;
            }
            writeln!(out, "{}\n", "═".repeat(62).bright_cyan())?;

            match get_user_input(input, out, "Play again? (yes/no)")?
                .map(|s| s.to_lowercase())
                .as_deref()
            {
                Some("yes" | "y") => {
                    state = initialize(&list.words, letters);
                    history.clear();
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue;
                }
                _ => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }

        let (step, total) = state.progress();
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "Step {step}/{total}: letter {}   (left {}, right {})",
            state
                .current_letter()
                .map_or_else(|| "-".to_string(), |c| c.to_string())
                .bright_yellow()
                .bold(),
            state.left_words().len(),
            state.right_words().len()
        )?;
        if state.left_words().len() < SHOW_WORDS_BELOW && state.right_words().len() < SHOW_WORDS_BELOW {
            write_pools(out, &state)?;
        }

        let Some(line) = get_user_input(input, out, "Choice (L/R or command)")? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                state = initialize(&list.words, letters);
                history.clear();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            "undo" | "u" => {
                if let Some(previous) = history.pop() {
                    state = previous;
                    writeln!(out, "✓ Undone! Back to step {}\n", state.progress().0)?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            "words" | "w" => write_pools(out, &state)?,
            _ => match transition_input(&state, &line.to_uppercase()) {
                Ok(next) => {
                    debug!("Applied {line} at step {}", state.progress().0);
                    history.push(std::mem::replace(&mut state, next));
                }
                Err(e) => writeln!(out, "❌ {e}\n")?,
            },
        }
    }
}

fn write_pools<W: Write>(out: &mut W, state: &FilterState) -> io::Result<()> {
    writeln!(
        out,
        "  Left  ({}): {}",
        state.left_words().len(),
        preview_words(state.left_words(), SHOW_WORDS_BELOW)
    )?;
    writeln!(
        out,
        "  Right ({}): {}",
        state.right_words().len(),
        preview_words(state.right_words(), SHOW_WORDS_BELOW)
    )
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{DEFAULT_LIST_ID, READ_MINDS_SEQUENCE, find_word_list};

    fn play(script: &str) -> String {
        let list = find_word_list(DEFAULT_LIST_ID).unwrap();
        let letters = LetterSequence::new(READ_MINDS_SEQUENCE).unwrap();
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        run_simple_with(&mut input, &mut out, &list, &letters).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plays_to_completion() {
        let out = play("L\nr\nno\n");
        assert!(out.contains("Total Choices: 2"));
        assert!(out.contains("Right Pattern Words (1):\nToothbrush"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn invalid_choice_is_reported_and_ignored() {
        let out = play("x\nquit\n");
        assert!(out.contains("Invalid choice"));
        assert!(!out.contains("Game Complete!"));
    }

    #[test]
    fn undo_restores_previous_step() {
        let out = play("L\nundo\nquit\n");
        assert!(out.contains("Undone! Back to step 1"));
    }

    #[test]
    fn undo_with_empty_history() {
        let out = play("u\nq\n");
        assert!(out.contains("Nothing to undo!"));
    }

    #[test]
    fn end_of_input_quits() {
        let out = play("L\n");
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn play_again_resets() {
        let out = play("L\nR\nyes\nq\n");
        assert!(out.contains("New game started!"));
        assert_eq!(out.matches("Game Complete!").count(), 1);
    }

    #[test]
    fn words_command_lists_pools() {
        let out = play("L\nwords\nq\n");
        assert!(out.contains("Left  (6): Necessary, Clementine"));
        assert!(out.contains("Right (4): Toothbrush, Remember, Loveable, Umbrella"));
    }
}
