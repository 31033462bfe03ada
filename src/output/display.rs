//! Display functions for command results

use super::formatters::{keyboard_lines, verdict_row, verdicts_to_emoji};
use crate::commands::AuditReport;
use crate::core::{Evaluation, KeyboardHints};
use crate::puzzle::Puzzle;
use colored::Colorize;

/// Print one evaluated guess as tiles plus its emoji row
pub fn print_evaluation(evaluation: &Evaluation) {
    println!(
        "  {}   {}",
        verdict_row(&evaluation.verdicts),
        verdicts_to_emoji(&evaluation.verdicts)
    );
}

/// Print the on-screen keyboard
pub fn print_keyboard(hints: &KeyboardHints) {
    println!();
    for line in keyboard_lines(hints) {
        println!("  {line}");
    }
    println!();
}

/// Print a puzzle without revealing its words
pub fn print_puzzle_summary(puzzle: &Puzzle) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle {}   Sequence: {}",
        puzzle.id().bright_white().bold(),
        puzzle.sequence().to_uppercase().bright_blue().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for word in puzzle.words() {
        let mut pattern = String::new();
        for i in 0..word.len() {
            if word.is_sequence_position(i) {
                pattern.push(char::from(word.letter_at(i)).to_ascii_uppercase());
            } else {
                pattern.push('_');
            }
            pattern.push(' ');
        }
        println!("  {} letters:  {}", word.len(), pattern.trim_end());
    }
}

/// Print the result of a puzzle audit
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Puzzles checked:   {}", report.puzzles);
    println!("   Guesses evaluated: {}", report.evaluations);
    println!("   Time taken:        {:.2}s", report.duration.as_secs_f64());

    if report.problems.is_empty() {
        println!("\n{}", "✅ All puzzles passed".green().bold());
    } else {
        println!(
            "\n{}",
            format!("❌ {} problem(s) found", report.problems.len())
                .red()
                .bold()
        );
        for problem in &report.problems {
            println!("   • {problem}");
        }
    }
}
