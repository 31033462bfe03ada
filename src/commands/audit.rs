//! Puzzle data audit
//!
//! Validates every puzzle record and cross-checks the evaluation engine on
//! each puzzle's own words. Puzzles are independent, so they are checked in
//! parallel.

use crate::core::{Category, Evaluation, HiddenWord, Mode, evaluate_guess};
use crate::puzzle::EPOCH;
use crate::puzzle::loader::PuzzleRecord;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Outcome of an audit run
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub puzzles: usize,
    pub evaluations: usize,
    pub problems: Vec<String>,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Audit all records
///
/// For every puzzle, each of its words is guessed against each of its words
/// in both modes, and the results are checked against the engine's
/// guarantees.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_audit(records: &[PuzzleRecord], show_progress: bool) -> AuditReport {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(records.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let results: Vec<(usize, Vec<String>)> = records
        .par_iter()
        .map(|record| {
            let result = audit_record(record);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut problems: Vec<String> = results.iter().flat_map(|(_, p)| p.clone()).collect();
    problems.extend(duplicate_sequences(records));

    AuditReport {
        puzzles: records.len(),
        evaluations: results.iter().map(|(n, _)| n).sum(),
        problems,
        duration: start.elapsed(),
    }
}

/// Check one record; returns the number of evaluations and any problems
fn audit_record(record: &PuzzleRecord) -> (usize, Vec<String>) {
    let date = record.date.unwrap_or(EPOCH);
    let puzzle = match record.to_puzzle(date) {
        Ok(puzzle) => puzzle,
        Err(e) => return (0, vec![format!("line {}: {e}", record.line)]),
    };

    let mut problems = Vec::new();
    let mut evaluations = 0;

    for hidden in puzzle.words() {
        for guess in puzzle.words() {
            for mode in [Mode::Normal, Mode::Hard] {
                let eval = evaluate_guess(hidden, guess.text(), mode);
                evaluations += 1;

                problems.extend(
                    check_evaluation(hidden, &eval, mode)
                        .into_iter()
                        .map(|p| format!("line {} ({} vs {}): {p}", record.line, guess, hidden)),
                );
            }
        }
    }

    (evaluations, problems)
}

/// Engine guarantees that must hold for every evaluation
fn check_evaluation(hidden: &HiddenWord, eval: &Evaluation, mode: Mode) -> Vec<String> {
    let mut problems = Vec::new();

    if eval.len() != eval.guess.len() {
        problems.push(format!("{} verdicts for {} letters", eval.len(), eval.guess.len()));
    }

    let exact = eval.guess == hidden.text();
    if eval.won != exact {
        problems.push(format!("won={} but exact match={exact}", eval.won));
    }
    if eval.won && eval.verdicts.iter().any(|v| v.category != Category::Correct) {
        problems.push("winning guess has a non-correct tile".to_string());
    }

    let sequence_tiles = eval.verdicts.iter().filter(|v| v.is_sequence).count();
    if sequence_tiles != 3 {
        problems.push(format!("{sequence_tiles} sequence tiles"));
    }
    if eval
        .verdicts
        .iter()
        .filter(|v| v.is_sequence)
        .any(|v| !matches!(v.category, Category::Sequence | Category::Correct))
    {
        problems.push("sequence tile scored as a regular letter".to_string());
    }

    let mut credited: FxHashMap<char, usize> = FxHashMap::default();
    for verdict in eval.verdicts.iter().filter(|v| v.category.is_present()) {
        *credited.entry(verdict.letter).or_default() += 1;
    }
    for (letter, count) in credited {
        let available = u8::try_from(letter).map_or(0, |l| hidden.count_of(l));
        if count > available {
            problems.push(format!("'{letter}' credited {count} times, occurs {available}"));
        }
    }

    if mode == Mode::Hard
        && eval.verdicts.iter().any(|v| {
            matches!(
                v.category,
                Category::MisplacedEmpty | Category::IncorrectEmpty
            )
        })
    {
        problems.push("hard mode leaked overhang information".to_string());
    }

    problems
}

fn duplicate_sequences(records: &[PuzzleRecord]) -> Vec<String> {
    let mut first_seen: FxHashMap<&str, usize> = FxHashMap::default();
    let mut problems = Vec::new();

    for record in records {
        if let Some(&line) = first_seen.get(record.sequence.as_str()) {
            problems.push(format!(
                "line {}: sequence '{}' already used on line {line}",
                record.line, record.sequence
            ));
        } else {
            first_seen.insert(&record.sequence, record.line);
        }
    }

    problems
}
