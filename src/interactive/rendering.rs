//! TUI rendering with ratatui
//!
//! Tile grid, keyboard and message panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Category, KeyboardHints, Verdict};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Tile grid
            Constraint::Percentage(45), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Foreground and background for a tile
#[must_use]
pub const fn category_colors(category: Category) -> (Color, Color) {
    match category {
        Category::Correct => (Color::Black, Color::Green),
        Category::Misplaced => (Color::Black, Color::Yellow),
        Category::MisplacedEmpty => (Color::Black, Color::LightYellow),
        Category::Incorrect => (Color::White, Color::DarkGray),
        Category::IncorrectEmpty => (Color::DarkGray, Color::Black),
        Category::Sequence => (Color::White, Color::Blue),
        Category::Empty => (Color::DarkGray, Color::White),
    }
}

fn tile_span(letter: char, category: Option<Category>) -> Span<'static> {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match category {
        Some(category) => {
            let (fg, bg) = category_colors(category);
            Span::styled(
                text,
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            )
        }
        None => Span::styled(text, Style::default().fg(Color::White)),
    }
}

fn verdict_line(verdicts: &[Verdict]) -> Line<'static> {
    let mut spans = Vec::with_capacity(verdicts.len() * 2);
    for verdict in verdicts {
        spans.push(tile_span(verdict.letter, Some(verdict.category)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🔤 SEQUENCE WORD - {}  [{}]  {} letters{}",
        app.puzzle.id(),
        app.session.sequence().to_uppercase(),
        app.session.word_length(),
        if app.mode.is_hard() { "  (hard)" } else { "" }
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    for evaluation in app.session.history() {
        lines.push(verdict_line(&evaluation.verdicts));
        lines.push(Line::from(""));
    }

    if app.input_mode == InputMode::Guessing {
        let mut spans: Vec<Span> = app
            .input_buffer
            .chars()
            .flat_map(|c| [tile_span(c, None), Span::raw(" ")])
            .collect();
        spans.push(Span::styled(" _ ", Style::default().fg(Color::Yellow)));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let placeholder = " · ".repeat(app.session.word_length());
    let drawn = app.session.attempts_used() + usize::from(app.input_mode == InputMode::Guessing);
    for _ in drawn..app.session.max_attempts() {
        lines.push(Line::styled(
            placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app.session.hints(), chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, hints: &KeyboardHints, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| Line::from(row.chars().map(|c| tile_span(c, hints.get(c))).collect::<Vec<_>>()))
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.attempts_used();
    let max = app.session.max_attempts();
    let percent = u16::try_from(used * 100 / max.max(1)).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.min(100))
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | 'n' next length, '6'-'8' pick length, 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter a guess (4-8 letters, must contain the sequence) ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
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

    let mode_text = if app.mode.is_hard() {
        "Mode: Hard"
    } else {
        "Mode: Normal"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let left_text = format!("Attempts left: {}", app.session.attempts_left());
    let left = Paragraph::new(left_text).alignment(Alignment::Center);
    f.render_widget(left, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: Next Word",
        InputMode::Guessing => "Esc: Quit | Enter: Submit | Tab: Switch Length",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
