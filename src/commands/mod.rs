//! Command implementations

pub mod audit;
pub mod check;
pub mod simple;
pub mod today;

pub use audit::{AuditReport, run_audit};
pub use check::check_guess;
pub use simple::{SimpleConfig, run_simple};
pub use today::puzzle_for;
