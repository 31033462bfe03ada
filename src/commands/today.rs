//! Today's puzzle

use crate::game::{Daily, Rejection};
use crate::puzzle::{Puzzle, PuzzleRepository};
use chrono::NaiveDate;

/// Look up the puzzle for `date`, or a random puzzle near it
///
/// With `random`, an arbitrary day from the surrounding year is used, which
/// lets players practice on puzzles other than today's.
///
/// # Errors
///
/// Returns `Rejection::PuzzleNotFound` if the repository has no puzzle for
/// the chosen date.
pub fn puzzle_for<R: PuzzleRepository>(
    daily: &Daily<R>,
    date: NaiveDate,
    random: bool,
) -> Result<Puzzle, Rejection> {
    let date = if random {
        use rand::Rng;
        let offset = rand::rng().random_range(-365..=365);
        date.checked_add_signed(chrono::Duration::days(offset))
            .unwrap_or(date)
    } else {
        date
    };

    daily.today(date)
}
