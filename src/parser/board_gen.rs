//! Board file generation (serialization).
//!
//! This module writes boards back to the line format read by
//! [`parse_board_str`](crate::parser::parse_board_str), with atomic file
//! writes for safety.

use crate::constants::CHILD_MARKER;
use crate::models::SymbolBoard;
use anyhow::{Context, Result};
use std::path::Path;

/// Produces the lines of a board file.
///
/// Every category is written followed by its symbols, all in insertion
/// order. Navigation state does not affect the output.
pub fn save_board(board: &SymbolBoard) -> Vec<String> {
    let mut lines = Vec::with_capacity(board.category_count() + board.entry_count());

    for (key, category) in board.categories() {
        lines.push(format!("{key} {}", category.name()));
        for (image_key, text) in category.entries() {
            lines.push(format!("{CHILD_MARKER}{image_key} {text}"));
        }
    }

    lines
}

/// Produces the full text of a board file, one `\n`-terminated line each.
pub fn generate_board_text(board: &SymbolBoard) -> String {
    let mut output = String::new();
    for line in save_board(board) {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Writes a board file.
///
/// This performs an atomic write using a temp file + rename pattern to ensure
/// the file is never left half-written.
///
/// # Errors
///
/// Returns errors for:
/// - File I/O failures
/// - Permission issues
/// - Atomic rename failures
pub fn save_board_file(board: &SymbolBoard, path: &Path) -> Result<()> {
    atomic_write(path, &generate_board_text(board))
}

/// Writes `content` next to `path` and renames it into place.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Board path has no file name: {}", path.display()))?;

    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
