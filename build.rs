//! Build script to generate the embedded puzzle table
//!
//! Reads the puzzle data file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_puzzle_table(
        "data/puzzles.txt",
        &Path::new(&out_dir).join("puzzles.rs"),
        "PUZZLES",
        "Embedded puzzle rotation: (sequence, 6-letter, 7-letter, 8-letter word)",
    );

    // Rebuild if the puzzle data changes
    println!("cargo:rerun-if-changed=data/puzzles.txt");
}

fn generate_puzzle_table(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<Vec<&str>> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.split_whitespace().collect())
        .collect();

    for (i, row) in rows.iter().enumerate() {
        assert!(
            row.len() == 4,
            "{input_path}: puzzle {} must have a sequence and three words, got {row:?}",
            i + 1
        );
    }

    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, &str, &str)] = &[").unwrap();

    for row in rows {
        writeln!(
            output,
            "    (\"{}\", \"{}\", \"{}\", \"{}\"),",
            row[0], row[1], row[2], row[3]
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of puzzles in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
