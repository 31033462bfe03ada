//! Embedded puzzle table
//!
//! Puzzles compiled into the binary at build time.

// Include generated puzzle table from build script
include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));
