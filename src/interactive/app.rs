//! TUI application state and logic

use crate::core::{Choice, LetterSequence};
use crate::filter::{FilterState, initialize, transition};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub word_list: WordList,
    pub letters: LetterSequence,
    pub state: FilterState,
    pub undo_stack: Vec<FilterState>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub show_pools: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Choosing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_started: usize,
    pub games_completed: usize,
    /// Completed games that ended with one word on a side
    pub words_revealed: usize,
}

impl App {
    #[must_use]
    pub fn new(word_list: WordList, letters: LetterSequence) -> Self {
        let state = initialize(&word_list.words, &letters);

        Self {
            word_list,
            letters,
            state,
            undo_stack: Vec::new(),
            messages: vec![
                Message {
                    text: "Think of one of the words. Answer L or R for each letter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "←/L = left, →/R = right, w = show pools".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                games_started: 1,
                ..Statistics::default()
            },
            input_mode: InputMode::Choosing,
            show_pools: false,
            should_quit: false,
        }
    }

    /// Apply a choice to the current session
    ///
    /// Ignored once the session is complete.
    pub fn make_choice(&mut self, choice: Choice) {
        if self.state.is_complete() {
            self.add_message("Game is over. Press 'n' for a new game.", MessageStyle::Error);
            return;
        }

        let next = transition(&self.state, choice);
        self.undo_stack
            .push(std::mem::replace(&mut self.state, next));

        if self.state.is_complete() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::Finished;
        self.stats.games_completed += 1;

        let result = self.state.result();
        self.add_message(
            &format!(
                "Game complete after {} choices ({} left, {} right)",
                result.total_choices,
                result.left_words.len(),
                result.right_words.len()
            ),
            MessageStyle::Success,
        );

        if let Some(word) = result.revealed_word() {
            self.stats.words_revealed += 1;
            self.add_message(
                &format!("🔮 You were thinking of: {}", word.to_uppercase()),
                MessageStyle::Success,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.state = initialize(&self.word_list.words, &self.letters);
        self.undo_stack.clear();
        self.messages.clear();
        self.input_mode = InputMode::Choosing;
        self.stats.games_started += 1;
        self.add_message("New game started! Think of a word.", MessageStyle::Info);
        info!("New game on {}", self.word_list.id);
    }

    pub fn undo_last(&mut self) {
        if let Some(previous) = self.undo_stack.pop() {
            if self.state.is_complete() {
                // Reopening a finished game does not count as a second completion
                self.stats.games_completed = self.stats.games_completed.saturating_sub(1);
                if self.state.result().revealed_word().is_some() {
                    self.stats.words_revealed = self.stats.words_revealed.saturating_sub(1);
                }
            }
            self.state = previous;
            self.input_mode = InputMode::Choosing;
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        debug!("Key {:?} in {:?}", key.code, self.input_mode);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n' | 'N') => self.new_game(),
            KeyCode::Char('u' | 'U') | KeyCode::Backspace => self.undo_last(),
            KeyCode::Char('w' | 'W') => self.show_pools = !self.show_pools,
            KeyCode::Char('l' | 'L') | KeyCode::Left if self.input_mode == InputMode::Choosing => {
                self.make_choice(Choice::Left);
            }
            KeyCode::Char('r' | 'R') | KeyCode::Right if self.input_mode == InputMode::Choosing => {
                self.make_choice(Choice::Right);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
