//! Puzzle data loading utilities
//!
//! Puzzle files hold one puzzle per line:
//!
//! ```text
//! # optional comment
//! [YYYY-MM-DD] <sequence> <word6> <word7> <word8>
//! ```

use super::{DATE_FORMAT, Puzzle, PuzzleError};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// One unvalidated line of puzzle data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleRecord {
    /// 1-based source line, for error messages
    pub line: usize,
    pub date: Option<NaiveDate>,
    pub sequence: String,
    pub words: Vec<String>,
}

impl PuzzleRecord {
    /// Validate the record into a puzzle published on `date`
    ///
    /// # Errors
    /// Returns `PuzzleError` if the words do not form a valid puzzle.
    pub fn to_puzzle(&self, date: NaiveDate) -> Result<Puzzle, PuzzleError> {
        Puzzle::new(date, &self.sequence, &self.words)
    }
}

/// Parse puzzle data from a string
///
/// # Errors
/// Returns `PuzzleError::Parse` for lines with the wrong number of fields or
/// an unreadable date.
///
/// # Examples
/// ```
/// use seqword::puzzle::loader::parse_records;
///
/// let records = parse_records("# rotation\nent parent present pavement\n").unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].sequence, "ent");
/// assert!(records[0].date.is_none());
/// ```
pub fn parse_records(content: &str) -> Result<Vec<PuzzleRecord>, PuzzleError> {
    let mut records = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let line_no = i + 1;
        let mut fields: Vec<&str> = trimmed.split_whitespace().collect();

        let date = if fields.len() == 5 {
            let raw = fields.remove(0);
            let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
                PuzzleError::Parse {
                    line: line_no,
                    message: format!("invalid date '{raw}': {e}"),
                }
            })?;
            Some(date)
        } else {
            None
        };

        if fields.len() != 4 {
            return Err(PuzzleError::Parse {
                line: line_no,
                message: format!(
                    "expected a sequence and three words, got {} fields",
                    fields.len()
                ),
            });
        }

        records.push(PuzzleRecord {
            line: line_no,
            date,
            sequence: fields[0].to_ascii_lowercase(),
            words: fields[1..].iter().map(|w| w.to_ascii_lowercase()).collect(),
        });
    }

    Ok(records)
}

/// Load puzzle records from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line cannot be parsed.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<PuzzleRecord>, PuzzleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let records = parse_records(&content)?;

    log::debug!("loaded {} puzzle records from {}", records.len(), path.display());
    Ok(records)
}

/// Convert the embedded table to records
///
/// # Examples
/// ```
/// use seqword::puzzle::loader::records_from_slice;
/// use seqword::puzzle::PUZZLES;
///
/// let records = records_from_slice(PUZZLES);
/// assert_eq!(records.len(), PUZZLES.len());
/// ```
#[must_use]
pub fn records_from_slice(slice: &[(&str, &str, &str, &str)]) -> Vec<PuzzleRecord> {
    slice
        .iter()
        .enumerate()
        .map(|(i, &(sequence, w6, w7, w8))| PuzzleRecord {
            line: i + 1,
            date: None,
            sequence: sequence.to_string(),
            words: vec![w6.to_string(), w7.to_string(), w8.to_string()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_undated_lines() {
        let records = parse_records("ent parent present pavement\nION nation million question")
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].sequence, "ion");
        assert_eq!(records[1].words, vec!["nation", "million", "question"]);
        assert_eq!(records[1].line, 2);
    }

    #[test]
    fn parses_dated_lines() {
        let records = parse_records("2024-05-01 ent parent present pavement").unwrap();
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }

    #[test]
    fn skips_comments_and_blanks() {
        let records = parse_records("# header\n\n   \nent parent present pavement\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line, 4);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = parse_records("ent parent present").unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_bad_date() {
        let err = parse_records("2024-13-01 ent parent present pavement").unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 1, .. }));
    }

    #[test]
    fn record_validates_into_puzzle() {
        let records = parse_records("ent parent present pavement").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let puzzle = records[0].to_puzzle(date).unwrap();
        assert_eq!(puzzle.word(8).unwrap().text(), "pavement");
    }

    #[test]
    fn load_from_file_reads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ent parent present pavement").unwrap();
        writeln!(file, "ain detain curtain complain").unwrap();

        let records = load_from_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here/puzzles.txt").unwrap_err();
        assert!(matches!(err, PuzzleError::Io(_)));
    }

    #[test]
    fn embedded_records_are_valid_puzzles() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for record in records_from_slice(super::super::PUZZLES) {
            assert!(
                record.to_puzzle(date).is_ok(),
                "embedded puzzle on line {} is invalid",
                record.line
            );
        }
    }
}
