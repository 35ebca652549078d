//! Parsing and serialization of board files.
//!
//! This module reads boards from the line-oriented text format and writes
//! them back out in the same order.

pub mod board;
pub mod board_gen;

// Re-export commonly used functions
pub use board::{
    load_board, load_board_with_report, parse_board_file, parse_board_str, LoadReport,
    SkipReason, SkippedLine,
};
pub use board_gen::{generate_board_text, save_board, save_board_file};
