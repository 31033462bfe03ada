//! Keyboard hints
//!
//! The on-screen keyboard colors each letter with the best verdict ever seen
//! for it during a game. Hints only move up the priority order.

use super::verdict::Verdict;
use super::Category;
use rustc_hash::FxHashMap;

/// Best known category per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    best: FxHashMap<char, Category>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hints from a single guess
    #[must_use]
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        let mut hints = Self::new();
        hints.record_all(verdicts);
        hints
    }

    /// Record one observation; returns true if the stored hint changed
    pub fn record(&mut self, letter: char, category: Category) -> bool {
        match self.best.get(&letter) {
            Some(&existing) if !category.outranks(existing) => false,
            _ => {
                self.best.insert(letter, category);
                true
            }
        }
    }

    /// Record every verdict of a guess
    pub fn record_all(&mut self, verdicts: &[Verdict]) {
        for verdict in verdicts {
            self.record(verdict.letter, verdict.category);
        }
    }

    /// Fold another hint map into this one
    pub fn merge(&mut self, other: &Self) {
        for (&letter, &category) in &other.best {
            self.record(letter, category);
        }
    }

    /// Stored hint for a letter
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Category> {
        self.best.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Hints sorted by letter
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, Category)> {
        let mut entries: Vec<_> = self.best.iter().map(|(&l, &c)| (l, c)).collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }
}

/// Fold a guess's verdicts into existing hints, returning the new hints
#[must_use]
pub fn update_hints(existing: &KeyboardHints, verdicts: &[Verdict]) -> KeyboardHints {
    let mut hints = existing.clone();
    hints.record_all(verdicts);
    hints
}
