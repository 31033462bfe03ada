//! Positional alignment of a guess against the hidden word
//!
//! Guesses are compared around the shared sequence, not from the first
//! letter. A guess with two letters before its sequence is lined up so those
//! two letters sit directly before the hidden word's sequence. Guess letters
//! that reach past either end of the hidden word land on *empty* cells.

use super::HiddenWord;
use super::hidden_word::SEQUENCE_LEN;

/// What a guess position lines up with in the hidden word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedCell {
    /// Hidden word letter, `None` when out of bounds
    pub letter: Option<u8>,
    /// True when the cell is one of the hidden word's sequence letters
    pub is_sequence: bool,
    /// Position in the hidden word; may be negative or past the end
    pub hidden_index: isize,
}

impl AlignedCell {
    /// True for virtual cells outside the hidden word
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    /// The hidden index as a ledger slot, `None` when out of bounds
    #[inline]
    #[must_use]
    pub fn slot(&self) -> Option<usize> {
        self.letter.and(usize::try_from(self.hidden_index).ok())
    }
}

/// One aligned cell per guess letter, in guess order
pub type AlignmentWindow = Vec<AlignedCell>;

/// Offset of the sequence inside `guess`
///
/// Prefers the occurrence at the hidden word's own offset so that a guess
/// spelling the hidden word always aligns letter-for-letter, then falls back
/// to the first occurrence. Returns `None` if the sequence is absent.
#[must_use]
pub fn sequence_offset(hidden: &HiddenWord, guess: &[u8]) -> Option<usize> {
    let sequence = hidden.sequence().as_bytes();
    let own = hidden.sequence_index();

    if guess.get(own..own + SEQUENCE_LEN) == Some(sequence) {
        return Some(own);
    }

    guess
        .windows(SEQUENCE_LEN)
        .position(|window| window == sequence)
}

/// Build the alignment window for `guess`
///
/// If the guess does not contain the sequence at all the window is anchored
/// as if the sequence started the guess. Callers are expected to reject such
/// guesses before evaluating them.
///
/// # Examples
/// ```
/// use seqword::core::{HiddenWord, align};
///
/// let hidden = HiddenWord::new("parent", "ent").unwrap();
/// let window = align(&hidden, b"rents");
///
/// let indices: Vec<isize> = window.iter().map(|c| c.hidden_index).collect();
/// assert_eq!(indices, vec![2, 3, 4, 5, 6]);
/// assert!(window[4].is_empty());
/// ```
#[must_use]
pub fn align(hidden: &HiddenWord, guess: &[u8]) -> AlignmentWindow {
    let chars_before = sequence_offset(hidden, guess).unwrap_or_else(|| {
        log::warn!(
            "guess '{}' does not contain sequence '{}'; aligning at offset 0",
            String::from_utf8_lossy(guess),
            hidden.sequence()
        );
        0
    });

    let len = hidden.len() as isize;
    let seq_start = hidden.sequence_index() as isize;
    let seq_end = seq_start + SEQUENCE_LEN as isize;

    // Overhang on either side shows up as negative or past-the-end indices.
    let start = seq_start - chars_before as isize;
    let end = start + guess.len() as isize;

    (start..end)
        .map(|n| {
            if n < 0 || n >= len {
                AlignedCell {
                    letter: None,
                    is_sequence: false,
                    hidden_index: n,
                }
            } else {
                AlignedCell {
                    letter: Some(hidden.letter_at(n as usize)),
                    is_sequence: n >= seq_start && n < seq_end,
                    hidden_index: n,
                }
            }
        })
        .collect()
}
