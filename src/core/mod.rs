//! Core guess-evaluation engine
//!
//! This module contains the pure domain types and the evaluation pipeline.
//! Nothing here performs I/O or holds state between calls: every evaluation
//! owns its own consumption ledger, so evaluations can run in parallel.

mod alignment;
mod category;
mod hidden_word;
mod hints;
mod verdict;

#[cfg(test)]
mod properties;

pub use alignment::{AlignedCell, AlignmentWindow, align, sequence_offset};
pub use category::Category;
pub use hidden_word::{
    HiddenWord, MAX_WORD_LEN, SEQUENCE_LEN, WORD_LENGTHS, WordError,
};
pub use hints::{KeyboardHints, update_hints};
pub use verdict::{Evaluation, Mode, Verdict, VerdictMap, evaluate, evaluate_guess};
