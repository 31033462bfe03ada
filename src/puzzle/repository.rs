//! Puzzle repository implementations

use super::loader::PuzzleRecord;
use super::{Puzzle, PuzzleError, PuzzleRepository};
use chrono::NaiveDate;
use rustc_hash::FxHashMap;

/// Date of the first puzzle in a rotation
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Cycles through a fixed list of puzzles, one per day from `EPOCH`
///
/// Every date resolves, including dates before the epoch.
#[derive(Debug, Clone)]
pub struct RotatingRepository {
    epoch: NaiveDate,
    puzzles: Vec<Puzzle>,
}

impl RotatingRepository {
    /// Validate all records up front
    ///
    /// # Errors
    /// Returns `PuzzleError` if there are no records or any record is invalid.
    pub fn new(records: &[PuzzleRecord]) -> Result<Self, PuzzleError> {
        Self::with_epoch(records, EPOCH)
    }

    /// Same as [`RotatingRepository::new`] with a custom first day
    ///
    /// # Errors
    /// Returns `PuzzleError` if there are no records or any record is invalid.
    pub fn with_epoch(records: &[PuzzleRecord], epoch: NaiveDate) -> Result<Self, PuzzleError> {
        if records.is_empty() {
            return Err(PuzzleError::Empty);
        }

        let puzzles = records
            .iter()
            .zip(epoch.iter_days())
            .map(|(record, date)| record.to_puzzle(date))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("rotation of {} puzzles starting {epoch}", puzzles.len());
        Ok(Self { epoch, puzzles })
    }

    /// The puzzle built into the binary
    ///
    /// # Errors
    /// Returns `PuzzleError` if the embedded table is invalid.
    pub fn embedded() -> Result<Self, PuzzleError> {
        Self::new(&super::loader::records_from_slice(super::PUZZLES))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

impl PuzzleRepository for RotatingRepository {
    fn get_by_date(&self, date: NaiveDate) -> Option<Puzzle> {
        let days = date.signed_duration_since(self.epoch).num_days();
        let len = i64::try_from(self.puzzles.len()).ok()?;
        let index = usize::try_from(days.rem_euclid(len)).ok()?;

        self.puzzles
            .get(index)
            .map(|puzzle| puzzle.clone().with_date(date))
    }
}

/// Puzzles published on explicit dates
#[derive(Debug, Clone, Default)]
pub struct DatedRepository {
    puzzles: FxHashMap<NaiveDate, Puzzle>,
}

impl DatedRepository {
    /// Validate all records up front
    ///
    /// # Errors
    /// Returns `PuzzleError` if a record is undated, invalid, or shares its
    /// date with another record.
    pub fn new(records: &[PuzzleRecord]) -> Result<Self, PuzzleError> {
        let mut puzzles = FxHashMap::default();

        for record in records {
            let date = record.date.ok_or(PuzzleError::MixedDating)?;
            let puzzle = record.to_puzzle(date)?;
            if puzzles.insert(date, puzzle).is_some() {
                return Err(PuzzleError::DuplicateDate(date));
            }
        }

        log::debug!("{} dated puzzles", puzzles.len());
        Ok(Self { puzzles })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

impl PuzzleRepository for DatedRepository {
    fn get_by_date(&self, date: NaiveDate) -> Option<Puzzle> {
        self.puzzles.get(&date).cloned()
    }
}

/// Pick the repository that fits the records
///
/// All records dated gives a [`DatedRepository`]; none dated gives a
/// [`RotatingRepository`].
///
/// # Errors
/// Returns `PuzzleError` if the records are empty, mix dated and undated
/// entries, or fail validation.
pub fn repository_from_records(
    records: &[PuzzleRecord],
) -> Result<Box<dyn PuzzleRepository + Send + Sync>, PuzzleError> {
    let dated = records.iter().filter(|r| r.date.is_some()).count();

    match dated {
        _ if records.is_empty() => Err(PuzzleError::Empty),
        0 => Ok(Box::new(RotatingRepository::new(records)?)),
        n if n == records.len() => Ok(Box::new(DatedRepository::new(records)?)),
        _ => Err(PuzzleError::MixedDating),
    }
}
