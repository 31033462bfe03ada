//! Game rules around the evaluation engine
//!
//! Validates player input, enforces attempt limits and puzzle freshness, and
//! keeps the per-game keyboard hints. All failures are reported as
//! [`Rejection`] values rather than panics.

mod daily;
mod error;
mod session;

pub use daily::{Daily, FRESHNESS_WINDOW_DAYS, start_session};
pub use error::Rejection;
pub use session::{DEFAULT_MAX_ATTEMPTS, GameSession, GameStatus, MAX_GUESS_LEN, MIN_GUESS_LEN};
