//! TUI rendering with ratatui
//!
//! Panels for the letter game: letters asked so far, the word display, pools and messages.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{PREVIEW_WORDS, format_history, preview_words};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Choice area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_choice(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔮 MIND READER - Think of a word")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Letters
            Constraint::Percentage(50), // Word display
            Constraint::Min(4),         // Pools or results
        ])
        .split(area);

    render_letters(f, app, chunks[0]);
    render_words(f, app, chunks[1]);
    if app.input_mode == InputMode::Finished {
        render_results(f, app, chunks[2]);
    } else {
        render_pools(f, app, chunks[2]);
    }
}

/// The letter sequence with the current letter highlighted
fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let index = app.state.current_letter_index();
    let spans: Vec<Span> = app
        .letters
        .letters()
        .iter()
        .enumerate()
        .map(|(i, letter)| {
            let style = if i == index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if i < index {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            Span::styled(format!(" {letter} "), style)
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

/// The word list with a dot on the word for the current step
fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let index = app.state.current_letter_index();
    let items: Vec<ListItem> = app
        .word_list
        .words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let (marker, style) = if i == index && !app.state.is_complete() {
                ("●", Style::default().fg(Color::Yellow))
            } else if i < index {
                ("·", Style::default().fg(Color::DarkGray))
            } else {
                (" ", Style::default().fg(Color::White))
            };
            ListItem::new(format!("{marker} {word}")).style(style)
        })
        .collect();

    let title = format!(" Here are {} words ", app.word_list.words.len());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_pools(f: &mut Frame, app: &App, area: Rect) {
    let left = app.state.left_words();
    let right = app.state.right_words();

    let content = if app.show_pools {
        vec![
            Line::from(Span::styled(
                format!("Left Pattern Words ({})", left.len()),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(left.join(", ")),
            Line::from(""),
            Line::from(Span::styled(
                format!("Right Pattern Words ({})", right.len()),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(right.join(", ")),
        ]
    } else {
        vec![
            Line::from(format!("Left pool:  {} words", left.len())),
            Line::from(format!("Right pool: {} words", right.len())),
            Line::from(Span::styled(
                "Press 'w' to reveal the pools",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word Pools ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let result = app.state.result();

    let mut content = vec![Line::from(vec![
        Span::raw("Total Choices: "),
        Span::styled(
            result.total_choices.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(word) = result.revealed_word() {
        content.push(Line::from(vec![
            Span::raw("Your word: "),
            Span::styled(
                word.to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    content.extend([
        Line::from(""),
        Line::from(format!("Left Pattern Words ({}):", result.left_words.len())),
        Line::from(preview_words(&result.left_words, PREVIEW_WORDS)),
        Line::from(format!("Right Pattern Words ({}):", result.right_words.len())),
        Line::from(preview_words(&result.right_words, PREVIEW_WORDS)),
    ]);

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Game Results ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Progress gauge
            Constraint::Percentage(40), // History
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let (step, total) = app.state.progress();
    let answered = app.state.current_letter_index().min(total);
    let percent = if total == 0 {
        100
    } else {
        (answered * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("Step {step} / {total}"));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let letters = app.letters.letters();
    let items: Vec<ListItem> = app
        .state
        .sequence()
        .iter()
        .enumerate()
        .rev()
        .map(|(i, choice)| {
            let letter = letters.get(i).copied().unwrap_or('-');
            ListItem::new(format!("{}: {letter} → {choice}", i + 1))
        })
        .collect();

    let title = format!(" Choices {} ", format_history(app.state.sequence()));
    let history = List::new(items).block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_choice(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " 🎉 GAME COMPLETE! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Choosing => (
            " Choose L or R | ← / → also work ".to_string(),
            format!(
                "Current Letter: {}",
                app.state
                    .current_letter()
                    .map_or_else(|| "-".to_string(), |c| c.to_string())
            ),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let list_text = format!("List: {}", app.word_list.name);
    f.render_widget(Paragraph::new(list_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Revealed: {}",
        app.stats.games_completed, app.stats.words_revealed
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let pools_text = format!(
        "Pools: {} / {}",
        app.state.left_words().len(),
        app.state.right_words().len()
    );
    f.render_widget(Paragraph::new(pools_text).alignment(Alignment::Center), chunks[2]);

    let help = Paragraph::new("q: Quit | u: Undo | n: New | w: Pools")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Choice, LetterSequence};
    use crate::wordlists::{DEFAULT_LIST_ID, READ_MINDS_SEQUENCE, find_word_list};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        App::new(
            find_word_list(DEFAULT_LIST_ID).unwrap(),
            LetterSequence::new(READ_MINDS_SEQUENCE).unwrap(),
        )
    }

    #[test]
    fn renders_current_letter() {
        let screen = render(&app());
        assert!(screen.contains("Current Letter: N"));
        assert!(screen.contains("Step 1 / 10"));
    }

    #[test]
    fn renders_results_when_finished() {
        let mut app = app();
        app.make_choice(Choice::Left);
        app.make_choice(Choice::Right);

        let screen = render(&app);
        assert!(screen.contains("Game Results"));
        assert!(screen.contains("TOOTHBRUSH"));
    }
}
