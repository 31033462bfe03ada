//! TUI application state and logic

use crate::core::{Mode, WORD_LENGTHS};
use crate::game::{GameSession, GameStatus, MAX_GUESS_LEN, Rejection, start_session};
use crate::output::formatters::share_text;
use crate::puzzle::Puzzle;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub puzzle: Puzzle,
    pub session: GameSession,
    pub mode: Mode,
    pub max_attempts: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by the number of guesses taken
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Start on the word of `length` letters from `puzzle`
    ///
    /// # Errors
    ///
    /// Returns `Rejection::InvalidWordLength` if the puzzle has no such word.
    pub fn new(
        puzzle: Puzzle,
        length: usize,
        mode: Mode,
        max_attempts: usize,
    ) -> Result<Self, Rejection> {
        let session = start_session(&puzzle, length, mode, max_attempts)?;

        let mut app = Self {
            puzzle,
            session,
            mode,
            max_attempts,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                guess_distribution: vec![0; max_attempts.max(1) + 1],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            &format!(
                "Find the {}-letter word containing {}.",
                app.session.word_length(),
                app.session.sequence().to_uppercase()
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Type a guess and press Enter. Tab switches word length.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Add a letter to the current guess
    pub fn push_letter(&mut self, c: char) {
        if self.input_mode == InputMode::Guessing
            && c.is_ascii_alphabetic()
            && self.input_buffer.len() < MAX_GUESS_LEN
        {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the input buffer as a guess
    ///
    /// Rejected guesses leave the buffer in place for editing.
    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.submit(&input) {
            Ok(_) => self.input_buffer.clear(),
            Err(rejection) => {
                self.add_message(&rejection.to_string(), MessageStyle::Error);
                return;
            }
        }

        match self.session.status() {
            GameStatus::InProgress => {
                let left = self.session.attempts_left();
                self.add_message(
                    &format!("{left} {} left", if left == 1 { "attempt" } else { "attempts" }),
                    MessageStyle::Info,
                );
            }
            GameStatus::Won => {
                let guesses = self.session.attempts_used();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(guesses) {
                    *slot += 1;
                }
                self.input_mode = InputMode::GameOver;

                let celebration = match guesses {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    "Press 'n' for the next word length or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;

                let word = self
                    .session
                    .reveal()
                    .map(|w| w.text().to_uppercase())
                    .unwrap_or_default();
                self.add_message(
                    &format!("Out of attempts. The word was {word}."),
                    MessageStyle::Error,
                );
                self.add_message(
                    "Press 'n' for the next word length or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Abandon the current word and start on another length
    pub fn new_game(&mut self, length: usize) {
        match start_session(&self.puzzle, length, self.mode, self.max_attempts) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message(
                    &format!(
                        "New game! Find the {length}-letter word containing {}.",
                        self.session.sequence().to_uppercase()
                    ),
                    MessageStyle::Info,
                );
            }
            Err(rejection) => self.add_message(&rejection.to_string(), MessageStyle::Error),
        }
    }

    /// The word length after the current one, wrapping around
    #[must_use]
    pub fn next_length(&self) -> usize {
        let current = self.session.word_length();
        WORD_LENGTHS
            .iter()
            .position(|&len| len == current)
            .map_or(WORD_LENGTHS[0], |i| WORD_LENGTHS[(i + 1) % WORD_LENGTHS.len()])
    }

    /// Emoji summary once the game is over
    #[must_use]
    pub fn share(&self) -> Option<String> {
        self.session.is_over().then(|| {
            share_text(
                self.session.sequence(),
                self.session.word_length(),
                self.session.history().iter().map(|e| e.verdicts.as_slice()),
            )
        })
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

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => println!("{share}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Event loop; returns the share text of the last finished game, if any
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') | KeyCode::Tab => app.new_game(app.next_length()),
                    KeyCode::Char(c @ '6'..='8') => {
                        app.new_game(c.to_digit(10).map_or(6, |d| d as usize));
                    }
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.new_game(app.next_length()),
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => app.pop_letter(),
                    KeyCode::Enter => app.submit_guess(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.share())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn app(max_attempts: usize) -> App {
        let puzzle = Puzzle::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "ent",
            &["parent", "present", "pavement"],
        )
        .unwrap();
        App::new(puzzle, 6, Mode::Normal, max_attempts).unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_letter(c);
        }
    }

    #[test]
    fn typing_filters_and_caps_input() {
        let mut app = app(6);
        type_word(&mut app, "Pa1-rentsXYZ");

        assert_eq!(app.input_buffer, "parentsx");
        app.pop_letter();
        assert_eq!(app.input_buffer, "parents");
    }

    #[test]
    fn rejected_guess_keeps_buffer() {
        let mut app = app(6);
        type_word(&mut app, "crane");
        app.submit_guess();

        assert_eq!(app.input_buffer, "crane");
        assert_eq!(app.session.attempts_used(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn winning_updates_stats() {
        let mut app = app(6);
        type_word(&mut app, "spent");
        app.submit_guess();
        type_word(&mut app, "parent");
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(app.share().unwrap().starts_with("ENT (6)"));
    }

    #[test]
    fn losing_reveals_word() {
        let mut app = app(1);
        type_word(&mut app, "spent");
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("The word was PARENT"))
        );
    }

    #[test]
    fn new_game_cycles_lengths() {
        let mut app = app(6);
        assert_eq!(app.next_length(), 7);

        app.new_game(8);
        assert_eq!(app.session.word_length(), 8);
        assert_eq!(app.next_length(), 6);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn share_hidden_while_playing() {
        let app = app(6);
        assert!(app.share().is_none());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(6);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
