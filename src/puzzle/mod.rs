//! Daily puzzles and where they come from
//!
//! A [`Puzzle`] bundles one hidden word per supported length, all sharing the
//! same sequence. Puzzles are supplied through the [`PuzzleRepository`] trait
//! so the rest of the crate never depends on a particular store.

mod embedded;
pub mod loader;
mod repository;

pub use embedded::{PUZZLES, PUZZLES_COUNT};
pub use repository::{DatedRepository, EPOCH, RotatingRepository, repository_from_records};

use crate::core::{HiddenWord, WORD_LENGTHS, WordError};
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Format of puzzle identifiers and dates in data files
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors building puzzles or loading puzzle data
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error("puzzle '{sequence}' has no {length}-letter word")]
    MissingLength { sequence: String, length: usize },
    #[error("puzzle '{sequence}' has more than one {length}-letter word")]
    DuplicateLength { sequence: String, length: usize },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("puzzle data mixes dated and undated entries")]
    MixedDating,
    #[error("two puzzles are dated {0}")]
    DuplicateDate(NaiveDate),
    #[error("no puzzles found")]
    Empty,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A source of daily puzzles
pub trait PuzzleRepository {
    /// The puzzle published for `date`, if any
    fn get_by_date(&self, date: NaiveDate) -> Option<Puzzle>;
}

impl<R: PuzzleRepository + ?Sized> PuzzleRepository for Box<R> {
    fn get_by_date(&self, date: NaiveDate) -> Option<Puzzle> {
        (**self).get_by_date(date)
    }
}

impl<R: PuzzleRepository + ?Sized> PuzzleRepository for &R {
    fn get_by_date(&self, date: NaiveDate) -> Option<Puzzle> {
        (**self).get_by_date(date)
    }
}

/// One day's puzzle: a sequence and a hidden word of each length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    date: NaiveDate,
    sequence: String,
    words: Vec<HiddenWord>,
}

impl Puzzle {
    /// Build a puzzle from one word per supported length
    ///
    /// Words may be given in any order.
    ///
    /// # Errors
    /// Returns `PuzzleError` if a word is invalid, does not contain the
    /// sequence, or a length is missing or repeated.
    pub fn new<S: AsRef<str>>(
        date: NaiveDate,
        sequence: &str,
        words: &[S],
    ) -> Result<Self, PuzzleError> {
        let mut built: Vec<HiddenWord> = Vec::with_capacity(WORD_LENGTHS.len());

        for word in words {
            let hidden = HiddenWord::new(word.as_ref(), sequence)?;
            if built.iter().any(|w| w.len() == hidden.len()) {
                return Err(PuzzleError::DuplicateLength {
                    sequence: sequence.to_ascii_lowercase(),
                    length: hidden.len(),
                });
            }
            built.push(hidden);
        }

        for length in WORD_LENGTHS {
            if !built.iter().any(|w| w.len() == length) {
                return Err(PuzzleError::MissingLength {
                    sequence: sequence.to_ascii_lowercase(),
                    length,
                });
            }
        }

        built.sort_by_key(HiddenWord::len);

        Ok(Self {
            date,
            sequence: sequence.trim().to_ascii_lowercase(),
            words: built,
        })
    }

    /// Same puzzle, published on another date
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Identifier used by clients to refer to this puzzle
    #[must_use]
    pub fn id(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// The hidden word of the given length
    #[must_use]
    pub fn word(&self, length: usize) -> Option<&HiddenWord> {
        self.words.iter().find(|w| w.len() == length)
    }

    /// All hidden words, shortest first
    #[must_use]
    pub fn words(&self) -> &[HiddenWord] {
        &self.words
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.id(), self.sequence.to_uppercase())
    }
}
