//! Verdict categories and their hint priority
//!
//! Every guessed letter is classified into exactly one [`Category`]. The
//! keyboard keeps the most informative category seen for each letter, so the
//! categories carry a total priority order used by the hint reducer.

use std::cmp::Ordering;
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Letter is in the hidden word at this exact position
    Correct,
    /// Letter is in the hidden word, elsewhere
    Misplaced,
    /// Letter overhangs the hidden word but occurs in it (normal mode only)
    MisplacedEmpty,
    /// Letter does not occur (or all its occurrences are already accounted for)
    Incorrect,
    /// Letter overhangs the hidden word and does not occur in it (normal mode only)
    IncorrectEmpty,
    /// Letter is part of the shared sequence
    Sequence,
    /// Letter overhangs the hidden word (hard mode)
    Empty,
}

impl Category {
    /// All categories, most informative first
    pub const ALL: [Self; 7] = [
        Self::Correct,
        Self::Misplaced,
        Self::MisplacedEmpty,
        Self::Incorrect,
        Self::IncorrectEmpty,
        Self::Sequence,
        Self::Empty,
    ];

    /// Hint priority rank; higher is more informative
    ///
    /// `Sequence` and `Empty` share the lowest rank.
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Sequence | Self::Empty => 0,
            Self::IncorrectEmpty => 1,
            Self::Incorrect => 2,
            Self::MisplacedEmpty => 3,
            Self::Misplaced => 4,
            Self::Correct => 5,
        }
    }

    /// Compare two categories by hint priority
    ///
    /// This is the only place the precedence rule lives.
    #[inline]
    #[must_use]
    pub fn cmp_priority(self, other: Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }

    /// True when `self` should replace `other` as a letter's keyboard hint
    #[inline]
    #[must_use]
    pub fn outranks(self, other: Self) -> bool {
        self.cmp_priority(other) == Ordering::Greater
    }

    /// True for the categories only produced by out-of-bounds positions
    #[inline]
    #[must_use]
    pub const fn is_overhang(self) -> bool {
        matches!(
            self,
            Self::MisplacedEmpty | Self::IncorrectEmpty | Self::Empty
        )
    }

    /// True when the verdict tells the player the letter is in the word
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Correct | Self::Misplaced | Self::MisplacedEmpty)
    }

    /// Short lowercase name, stable for display and settings
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::MisplacedEmpty => "misplaced-empty",
            Self::Incorrect => "incorrect",
            Self::IncorrectEmpty => "incorrect-empty",
            Self::Sequence => "sequence",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_chain_is_strict() {
        let chain = [
            Category::Sequence,
            Category::IncorrectEmpty,
            Category::Incorrect,
            Category::MisplacedEmpty,
            Category::Misplaced,
            Category::Correct,
        ];

        for pair in chain.windows(2) {
            assert!(pair[1].outranks(pair[0]), "{} should outrank {}", pair[1], pair[0]);
            assert!(!pair[0].outranks(pair[1]));
        }
    }

    #[test]
    fn sequence_and_empty_tie() {
        assert_eq!(
            Category::Sequence.cmp_priority(Category::Empty),
            Ordering::Equal
        );
        assert!(!Category::Sequence.outranks(Category::Empty));
        assert!(!Category::Empty.outranks(Category::Sequence));
    }

    #[test]
    fn nothing_outranks_itself() {
        for category in Category::ALL {
            assert!(!category.outranks(category));
        }
    }

    #[test]
    fn correct_outranks_everything_else() {
        for category in Category::ALL {
            if category != Category::Correct {
                assert!(Category::Correct.outranks(category));
            }
        }
    }

    #[test]
    fn overhang_categories() {
        assert!(Category::Empty.is_overhang());
        assert!(Category::MisplacedEmpty.is_overhang());
        assert!(Category::IncorrectEmpty.is_overhang());
        assert!(!Category::Sequence.is_overhang());
        assert!(!Category::Incorrect.is_overhang());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Category::MisplacedEmpty.to_string(), "misplaced-empty");
        assert_eq!(format!("{}", Category::Correct), "correct");
    }
}
