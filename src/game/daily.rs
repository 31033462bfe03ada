//! Daily puzzle gate
//!
//! Resolves puzzle identifiers against an injected repository and refuses
//! puzzles outside the freshness window.

use super::{GameSession, Rejection};
use crate::core::{Mode, WORD_LENGTHS};
use crate::puzzle::{DATE_FORMAT, Puzzle, PuzzleRepository};
use chrono::NaiveDate;

/// Days either side of today a puzzle stays playable, to absorb time zones
pub const FRESHNESS_WINDOW_DAYS: i64 = 1;

/// Hands out today's puzzles from a repository
#[derive(Debug, Clone)]
pub struct Daily<R> {
    repository: R,
    window_days: i64,
}

impl<R: PuzzleRepository> Daily<R> {
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self {
            repository,
            window_days: FRESHNESS_WINDOW_DAYS,
        }
    }

    /// Override the freshness window
    #[must_use]
    pub const fn with_window(mut self, days: i64) -> Self {
        self.window_days = days;
        self
    }

    /// The puzzle published for `today`
    ///
    /// # Errors
    /// Returns `Rejection::PuzzleNotFound` if the repository has none.
    pub fn today(&self, today: NaiveDate) -> Result<Puzzle, Rejection> {
        self.repository
            .get_by_date(today)
            .ok_or(Rejection::PuzzleNotFound(today))
    }

    /// Resolve a client-supplied identifier, enforcing freshness
    ///
    /// # Errors
    /// Returns `InvalidPuzzleIdentifier` if `id` is not a date, `StalePuzzle`
    /// if it is outside the window around `today`, or `PuzzleNotFound`.
    pub fn resolve(&self, id: &str, today: NaiveDate) -> Result<Puzzle, Rejection> {
        let requested = NaiveDate::parse_from_str(id.trim(), DATE_FORMAT)
            .map_err(|_| Rejection::InvalidPuzzleIdentifier(id.to_string()))?;

        let distance = requested.signed_duration_since(today).num_days().abs();
        if distance > self.window_days {
            log::debug!("refusing puzzle {requested}: {distance} days from {today}");
            return Err(Rejection::StalePuzzle { requested, today });
        }

        self.repository
            .get_by_date(requested)
            .ok_or(Rejection::PuzzleNotFound(requested))
    }

    /// Start a session on one word of a fresh puzzle
    ///
    /// # Errors
    /// Returns `InvalidWordLength` for lengths other than 6, 7 or 8, or any
    /// rejection from [`Daily::resolve`].
    pub fn start(
        &self,
        id: &str,
        today: NaiveDate,
        length: usize,
        mode: Mode,
        max_attempts: usize,
    ) -> Result<GameSession, Rejection> {
        let puzzle = self.resolve(id, today)?;
        start_session(&puzzle, length, mode, max_attempts)
    }
}

/// Start a session on the word of `length` in `puzzle`
///
/// # Errors
/// Returns `Rejection::InvalidWordLength` if the puzzle has no such word.
pub fn start_session(
    puzzle: &Puzzle,
    length: usize,
    mode: Mode,
    max_attempts: usize,
) -> Result<GameSession, Rejection> {
    if !WORD_LENGTHS.contains(&length) {
        return Err(Rejection::InvalidWordLength(length));
    }

    let word = puzzle
        .word(length)
        .ok_or(Rejection::InvalidWordLength(length))?;

    Ok(GameSession::new(word.clone(), mode, max_attempts))
}
