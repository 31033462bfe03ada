//! Sequence Word
//!
//! A daily word puzzle: every guess must contain a fixed three-letter
//! sequence, and feedback is lined up on that sequence rather than on the
//! first letter.
//!
//! # Quick Start
//!
//! ```rust
//! use seqword::core::{Category, HiddenWord, Mode, evaluate_guess};
//!
//! let hidden = HiddenWord::new("parent", "ent").unwrap();
//! let eval = evaluate_guess(&hidden, "rents", Mode::Normal);
//!
//! // R lines up with PARENT's R; the trailing S hangs past the end.
//! assert_eq!(eval.verdicts[0].category, Category::Correct);
//! assert_eq!(eval.verdicts[4].category, Category::IncorrectEmpty);
//! ```

// Core domain types and the evaluation engine
pub mod core;

// Puzzle data and repositories
pub mod puzzle;

// Validation, attempt limits and freshness
pub mod game;

// Persisted settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
