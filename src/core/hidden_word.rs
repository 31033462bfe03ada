//! Hidden word representation
//!
//! A `HiddenWord` stores a 6, 7 or 8 letter word together with the position of
//! the three-letter sequence embedded in it.

use std::fmt;
use thiserror::Error;

/// Length of the shared sequence
pub const SEQUENCE_LEN: usize = 3;

/// Longest hidden word, also the size of the consumption ledger
pub const MAX_WORD_LEN: usize = 8;

/// Hidden word lengths a puzzle provides, in display order
pub const WORD_LENGTHS: [usize; 3] = [6, 7, 8];

/// Error type for invalid hidden words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be 6, 7 or 8 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    InvalidCharacters,
    #[error("sequence must be exactly 3 ASCII letters, got '{0}'")]
    InvalidSequence(String),
    #[error("sequence '{sequence}' does not occur in '{word}'")]
    SequenceNotFound { word: String, sequence: String },
    #[error("sequence '{sequence}' is not at index {index} of '{word}'")]
    SequenceMismatch {
        word: String,
        sequence: String,
        index: usize,
    },
}

/// A hidden word with its embedded sequence
///
/// Immutable once constructed; `letters[sequence_index..sequence_index + 3]`
/// always equals the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HiddenWord {
    text: String,
    sequence_index: usize,
}

impl HiddenWord {
    /// Create a hidden word, locating the first occurrence of `sequence`
    ///
    /// Both inputs are normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the word is not 6-8 ASCII letters, the sequence
    /// is not 3 ASCII letters, or the sequence does not occur in the word.
    ///
    /// # Examples
    /// ```
    /// use seqword::core::HiddenWord;
    ///
    /// let word = HiddenWord::new("PARENT", "ent").unwrap();
    /// assert_eq!(word.text(), "parent");
    /// assert_eq!(word.sequence_index(), 3);
    /// assert!(HiddenWord::new("parent", "xyz").is_err());
    /// ```
    pub fn new(text: impl Into<String>, sequence: &str) -> Result<Self, WordError> {
        let text = normalize_word(text.into())?;
        let sequence = normalize_sequence(sequence)?;

        let sequence_index = text
            .find(&sequence)
            .ok_or_else(|| WordError::SequenceNotFound {
                word: text.clone(),
                sequence,
            })?;

        Ok(Self {
            text,
            sequence_index,
        })
    }

    /// Create a hidden word whose sequence starts at a known index
    ///
    /// # Errors
    /// Returns `WordError` if the word is invalid or the letters at
    /// `sequence_index` do not spell `sequence`.
    pub fn with_index(
        text: impl Into<String>,
        sequence: &str,
        sequence_index: usize,
    ) -> Result<Self, WordError> {
        let text = normalize_word(text.into())?;
        let sequence = normalize_sequence(sequence)?;

        if text.get(sequence_index..sequence_index + SEQUENCE_LEN) != Some(sequence.as_str()) {
            return Err(WordError::SequenceMismatch {
                word: text,
                sequence,
                index: sequence_index,
            });
        }

        Ok(Self {
            text,
            sequence_index,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters (6, 7 or 8)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a hidden word has at least six letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 0-based start of the embedded sequence
    #[inline]
    #[must_use]
    pub const fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    /// The embedded three-letter sequence
    #[inline]
    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.text[self.sequence_index..self.sequence_index + SEQUENCE_LEN]
    }

    /// True when `index` falls inside the sequence
    #[inline]
    #[must_use]
    pub const fn is_sequence_position(&self, index: usize) -> bool {
        index >= self.sequence_index && index < self.sequence_index + SEQUENCE_LEN
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Count occurrences of a letter
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters().iter().filter(|&&l| l == letter).count()
    }
}

impl fmt::Display for HiddenWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn normalize_word(text: String) -> Result<String, WordError> {
    let text = text.trim().to_ascii_lowercase();

    if !text.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(WordError::InvalidCharacters);
    }

    if !WORD_LENGTHS.contains(&text.len()) {
        return Err(WordError::InvalidLength(text.len()));
    }

    Ok(text)
}

fn normalize_sequence(sequence: &str) -> Result<String, WordError> {
    let sequence = sequence.trim().to_ascii_lowercase();

    if sequence.len() != SEQUENCE_LEN || !sequence.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(WordError::InvalidSequence(sequence));
    }

    Ok(sequence)
}
