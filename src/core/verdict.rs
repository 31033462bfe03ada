//! Guess evaluation
//!
//! Turns an aligned guess into one [`Verdict`] per letter.
//!
//! # Algorithm
//! 1. First pass: mark exact matches on ordinary cells and consume their
//!    hidden-word slots
//! 2. Second pass, left to right: resolve sequence cells, overhanging cells
//!    and misplaced letters against the slots that are still unconsumed
//!
//! The ledger holds one flag per hidden-word position, so each occurrence of
//! a letter in the hidden word can back at most one `correct` or `misplaced`
//! verdict.

use super::alignment::{AlignmentWindow, align};
use super::hidden_word::MAX_WORD_LEN;
use super::hints::KeyboardHints;
use super::{Category, HiddenWord};

/// Scoring mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Overhanging letters still report whether they occur in the word
    #[default]
    Normal,
    /// Overhanging letters are always plain `empty`
    Hard,
}

impl Mode {
    /// `Hard` when the flag is set, else `Normal`
    #[must_use]
    pub const fn from_hard(hard: bool) -> Self {
        if hard { Self::Hard } else { Self::Normal }
    }

    /// True for `Mode::Hard`
    #[must_use]
    pub const fn is_hard(self) -> bool {
        matches!(self, Self::Hard)
    }
}

/// Feedback for one guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub letter: char,
    pub category: Category,
    pub is_sequence: bool,
}

/// Verdicts in guess order, one per guessed letter
pub type VerdictMap = Vec<Verdict>;

/// Result of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub guess: String,
    pub verdicts: VerdictMap,
    /// Hints contributed by this guess alone
    pub hints: KeyboardHints,
    pub won: bool,
}

impl Evaluation {
    /// Number of guessed letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    /// True when nothing was guessed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Categories only, in guess order
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.verdicts.iter().map(|v| v.category).collect()
    }
}

/// Per-call consumption ledger, one flag per hidden-word position
#[derive(Debug, Clone, Copy)]
struct Ledger {
    consumed: [bool; MAX_WORD_LEN],
    letters: [u8; MAX_WORD_LEN],
    len: usize,
}

impl Ledger {
    fn new(hidden: &HiddenWord) -> Self {
        let mut letters = [0u8; MAX_WORD_LEN];
        let len = hidden.len().min(MAX_WORD_LEN);
        letters[..len].copy_from_slice(&hidden.letters()[..len]);

        Self {
            consumed: [false; MAX_WORD_LEN],
            letters,
            len,
        }
    }

    fn consume_at(&mut self, slot: usize) {
        if slot < self.len {
            self.consumed[slot] = true;
        }
    }

    /// Consume the first unconsumed occurrence of `letter`
    fn consume_first(&mut self, letter: u8) -> bool {
        let found = (0..self.len).find(|&i| !self.consumed[i] && self.letters[i] == letter);

        if let Some(slot) = found {
            self.consumed[slot] = true;
            true
        } else {
            false
        }
    }
}

/// Compute verdicts for `guess` given its alignment window
///
/// `window` must come from [`align`] for the same hidden word and guess;
/// guess letters past the end of a shorter window are scored as overhang.
#[must_use]
pub fn evaluate(
    hidden: &HiddenWord,
    window: &AlignmentWindow,
    guess: &[u8],
    is_exact_match: bool,
    mode: Mode,
) -> VerdictMap {
    let mut ledger = Ledger::new(hidden);
    let mut result: Vec<Option<Category>> = vec![None; guess.len()];

    // First pass: exact matches on ordinary cells
    for (i, (&letter, cell)) in guess.iter().zip(window).enumerate() {
        if cell.is_sequence {
            continue;
        }
        if let (Some(hidden_letter), Some(slot)) = (cell.letter, cell.slot())
            && hidden_letter == letter
        {
            ledger.consume_at(slot);
            result[i] = Some(Category::Correct);
        }
    }

    // Second pass: everything else, left to right
    for (i, &letter) in guess.iter().enumerate() {
        if result[i].is_some() {
            continue;
        }

        let category = match window.get(i) {
            Some(cell) if cell.is_sequence => {
                if is_exact_match {
                    Category::Correct
                } else {
                    Category::Sequence
                }
            }
            Some(cell) if !cell.is_empty() => {
                if ledger.consume_first(letter) {
                    Category::Misplaced
                } else {
                    Category::Incorrect
                }
            }
            _ => match mode {
                Mode::Hard => Category::Empty,
                Mode::Normal => {
                    if ledger.consume_first(letter) {
                        Category::MisplacedEmpty
                    } else {
                        Category::IncorrectEmpty
                    }
                }
            },
        };

        result[i] = Some(category);
    }

    guess
        .iter()
        .zip(result)
        .zip(window.iter().map(|c| c.is_sequence).chain(std::iter::repeat(false)))
        .map(|((&letter, category), is_sequence)| Verdict {
            letter: char::from(letter),
            category: category.unwrap_or(Category::Empty),
            is_sequence,
        })
        .collect()
}

/// Evaluate a guess end to end: align, score, and collect hints
///
/// The guess is compared as given; callers normalize case beforehand.
///
/// # Examples
/// ```
/// use seqword::core::{Category, HiddenWord, Mode, evaluate_guess};
///
/// let hidden = HiddenWord::new("parent", "ent").unwrap();
/// let eval = evaluate_guess(&hidden, "spent", Mode::Normal);
///
/// assert_eq!(
///     eval.categories(),
///     vec![
///         Category::Incorrect,
///         Category::Misplaced,
///         Category::Sequence,
///         Category::Sequence,
///         Category::Sequence,
///     ]
/// );
/// assert!(!eval.won);
/// ```
#[must_use]
pub fn evaluate_guess(hidden: &HiddenWord, guess: &str, mode: Mode) -> Evaluation {
    let bytes = guess.as_bytes();
    let won = guess == hidden.text();

    let window = align(hidden, bytes);
    let verdicts = evaluate(hidden, &window, bytes, won, mode);
    let hints = KeyboardHints::from_verdicts(&verdicts);

    log::debug!(
        "evaluated '{guess}' against {}-letter word ({mode:?}): won={won}",
        hidden.len()
    );

    Evaluation {
        guess: guess.to_string(),
        verdicts,
        hints,
        won,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Category::{
        Correct, Empty, Incorrect, IncorrectEmpty, Misplaced, MisplacedEmpty, Sequence,
    };

    fn categories(word: &str, sequence: &str, guess: &str, mode: Mode) -> Vec<Category> {
        let hidden = HiddenWord::new(word, sequence).unwrap();
        evaluate_guess(&hidden, guess, mode).categories()
    }

    #[test]
    fn spent_against_parent_normal() {
        // S P [E N T] lines up with A R [E N T]; P occurs at index 0, S nowhere
        assert_eq!(
            categories("parent", "ent", "spent", Mode::Normal),
            vec![Incorrect, Misplaced, Sequence, Sequence, Sequence]
        );
    }

    #[test]
    fn exact_guess_wins_with_all_correct() {
        let hidden = HiddenWord::new("parent", "ent").unwrap();
        let eval = evaluate_guess(&hidden, "parent", Mode::Normal);

        assert!(eval.won);
        assert!(eval.categories().iter().all(|&c| c == Correct));
        assert_eq!(eval.len(), 6);
    }

    #[test]
    fn sequence_cells_are_flagged() {
        let hidden = HiddenWord::new("parent", "ent").unwrap();
        let eval = evaluate_guess(&hidden, "spent", Mode::Normal);

        let flags: Vec<bool> = eval.verdicts.iter().map(|v| v.is_sequence).collect();
        assert_eq!(flags, vec![false, false, true, true, true]);
        assert_eq!(eval.verdicts[0].letter, 's');
    }

    #[test]
    fn overhang_after_the_end() {
        // Guess "rents": sequence at 1, hidden sequence at 3 -> S lands on index 6.
        assert_eq!(
            categories("parent", "ent", "rents", Mode::Normal),
            vec![Correct, Sequence, Sequence, Sequence, IncorrectEmpty]
        );
        assert_eq!(
            categories("parent", "ent", "rentp", Mode::Normal),
            vec![Correct, Sequence, Sequence, Sequence, MisplacedEmpty]
        );
    }

    #[test]
    fn hard_mode_overhang_is_empty() {
        assert_eq!(
            categories("parent", "ent", "rentp", Mode::Hard),
            vec![Correct, Sequence, Sequence, Sequence, Empty]
        );
        assert_eq!(
            categories("parent", "ent", "solvent", Mode::Hard),
            vec![Empty, Incorrect, Incorrect, Incorrect, Sequence, Sequence, Sequence]
        );
    }

    #[test]
    fn overhang_before_the_start_normal() {
        // ? P A R [E N T] against S O L V [E N T]
        assert_eq!(
            categories("parent", "ent", "solvent", Mode::Normal),
            vec![
                IncorrectEmpty,
                Incorrect,
                Incorrect,
                Incorrect,
                Sequence,
                Sequence,
                Sequence
            ]
        );
        // A P at the overhang finds the unconsumed P at index 0.
        assert_eq!(
            categories("parent", "ent", "pxxxent", Mode::Normal),
            vec![
                MisplacedEmpty,
                Incorrect,
                Incorrect,
                Incorrect,
                Sequence,
                Sequence,
                Sequence
            ]
        );
    }

    #[test]
    fn duplicate_letters_consume_once() {
        // PARENT has one P; the second guessed P gets nothing.
        assert_eq!(
            categories("parent", "ent", "ppent", Mode::Normal),
            vec![Misplaced, Incorrect, Sequence, Sequence, Sequence]
        );
    }

    #[test]
    fn exact_match_beats_earlier_misplaced() {
        // Hidden "arrest" (sequence "est" at 3). Guess "rarest": aligned
        // r a r [e s t] against a r r [e s t]. The third letter R is exact,
        // so the first R takes the remaining R at index 1 and A finds index 0.
        assert_eq!(
            categories("arrest", "est", "rarest", Mode::Normal),
            vec![Misplaced, Misplaced, Correct, Sequence, Sequence, Sequence]
        );
        // With only one spare R, the exact match wins it.
        assert_eq!(
            categories("barest", "est", "rrrest", Mode::Normal),
            vec![Incorrect, Incorrect, Correct, Sequence, Sequence, Sequence]
        );
    }

    #[test]
    fn sequence_letters_are_available_elsewhere() {
        // PARENT's only E sits inside the sequence; the first spare E takes it.
        assert_eq!(
            categories("parent", "ent", "eeent", Mode::Normal),
            vec![Misplaced, Incorrect, Sequence, Sequence, Sequence]
        );
        // The leading T finds the T at index 5.
        assert_eq!(
            categories("parent", "ent", "tent", Mode::Normal),
            vec![Misplaced, Sequence, Sequence, Sequence]
        );
    }

    #[test]
    fn repeated_sequence_aligns_on_hidden_offset() {
        // "entent" has ENT at 0 and 3; the occurrence at PARENT's own offset
        // (3) is used, so E N T land on P A R and hit the hidden E N T.
        let hidden = HiddenWord::new("parent", "ent").unwrap();
        let eval = evaluate_guess(&hidden, "entent", Mode::Normal);

        assert_eq!(
            eval.categories(),
            vec![Misplaced, Misplaced, Misplaced, Sequence, Sequence, Sequence]
        );
        let flags: Vec<bool> = eval.verdicts.iter().map(|v| v.is_sequence).collect();
        assert_eq!(flags, vec![false, false, false, true, true, true]);
    }

    #[test]
    fn window_shorter_than_guess_leaves_empty() {
        let hidden = HiddenWord::new("parent", "ent").unwrap();
        let window = align(&hidden, b"spe");
        let verdicts = evaluate(&hidden, &window, b"spent", false, Mode::Normal);

        assert_eq!(verdicts.len(), 5);
        assert!(!verdicts[4].is_sequence);
    }

    #[test]
    fn missing_sequence_degrades_without_panic() {
        let hidden = HiddenWord::new("parent", "ent").unwrap();
        let eval = evaluate_guess(&hidden, "crane", Mode::Normal);

        assert_eq!(eval.len(), 5);
        assert!(!eval.won);
    }

    #[test]
    fn mode_helpers() {
        assert_eq!(Mode::from_hard(true), Mode::Hard);
        assert_eq!(Mode::from_hard(false), Mode::Normal);
        assert!(Mode::Hard.is_hard());
        assert_eq!(Mode::default(), Mode::Normal);
    }
}
