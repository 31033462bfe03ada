//! Formatting utilities for terminal output

use crate::core::{Category, KeyboardHints, Verdict};
use colored::{ColoredString, Colorize};

/// Keyboard layout used for hint display
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Emoji square for a category
#[must_use]
pub const fn category_emoji(category: Category) -> char {
    match category {
        Category::Correct => '🟩',
        Category::Misplaced => '🟨',
        Category::MisplacedEmpty => '🟧',
        Category::Incorrect => '⬛',
        Category::IncorrectEmpty => '🟫',
        Category::Sequence => '🟦',
        Category::Empty => '⬜',
    }
}

/// Format verdicts as an emoji row
#[must_use]
pub fn verdicts_to_emoji(verdicts: &[Verdict]) -> String {
    verdicts.iter().map(|v| category_emoji(v.category)).collect()
}

/// Spoiler-free summary of a finished game
#[must_use]
pub fn share_text<'a>(
    sequence: &str,
    word_length: usize,
    rows: impl IntoIterator<Item = &'a [Verdict]>,
) -> String {
    let mut out = format!("{} ({word_length})", sequence.to_uppercase());
    for row in rows {
        out.push('\n');
        out.push_str(&verdicts_to_emoji(row));
    }
    out
}

/// A letter rendered as a colored tile
#[must_use]
pub fn tile(letter: char, category: Option<Category>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match category {
        Some(Category::Correct) => text.black().on_green().bold(),
        Some(Category::Misplaced) => text.black().on_yellow().bold(),
        Some(Category::MisplacedEmpty) => text.black().on_bright_yellow(),
        Some(Category::Incorrect) => text.white().on_bright_black(),
        Some(Category::IncorrectEmpty) => text.bright_black().on_black(),
        Some(Category::Sequence) => text.white().on_blue().bold(),
        Some(Category::Empty) => text.bright_black().on_white(),
        None => text.normal(),
    }
}

/// One guess rendered as a row of tiles
#[must_use]
pub fn verdict_row(verdicts: &[Verdict]) -> String {
    verdicts
        .iter()
        .map(|v| tile(v.letter, Some(v.category)).to_string())
        .collect()
}

/// Keyboard rows with each key colored by its hint
#[must_use]
pub fn keyboard_lines(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| tile(letter, hints.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}
