//! Structured rejections reported to players

use chrono::NaiveDate;
use thiserror::Error;

/// Why a request was refused
///
/// Rejections are recoverable: the caller shows the message and lets the
/// player try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("guesses must be {min} to {max} letters long, got {len}")]
    InvalidGuessLength { len: usize, min: usize, max: usize },
    #[error("guesses may only contain letters")]
    InvalidCharacters,
    #[error("guess must contain the sequence '{}'", .0.to_uppercase())]
    MissingSequence(String),
    #[error("words are 6, 7 or 8 letters long, not {0}")]
    InvalidWordLength(usize),
    #[error("'{0}' is not a puzzle identifier")]
    InvalidPuzzleIdentifier(String),
    #[error("puzzle {requested} is no longer available (today is {today})")]
    StalePuzzle {
        requested: NaiveDate,
        today: NaiveDate,
    },
    #[error("no puzzle is published for {0}")]
    PuzzleNotFound(NaiveDate),
    #[error("all {0} attempts have been used")]
    AttemptsExhausted(usize),
    #[error("this word has already been found")]
    AlreadySolved,
}

impl Rejection {
    /// Stable machine-readable kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidGuessLength { .. } => "invalid_guess_length",
            Self::InvalidCharacters => "invalid_characters",
            Self::MissingSequence(_) => "missing_sequence",
            Self::InvalidWordLength(_) => "invalid_word_length",
            Self::InvalidPuzzleIdentifier(_) => "invalid_puzzle_identifier",
            Self::StalePuzzle { .. } => "stale_puzzle",
            Self::PuzzleNotFound(_) => "puzzle_not_found",
            Self::AttemptsExhausted(_) => "attempts_exhausted",
            Self::AlreadySolved => "already_solved",
        }
    }
}
