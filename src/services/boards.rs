//! Board file I/O service.
//!
//! This module centralizes all board file operations, providing a consistent
//! interface for loading and saving boards.

use anyhow::{Context, Result};
use std::path::Path;

use crate::{
    models::SymbolBoard,
    parser::{self, LoadReport},
};

/// Service for managing board file I/O operations.
///
/// This service centralizes all board file operations to ensure consistent
/// handling of file paths and error messages.
pub struct BoardService;

impl BoardService {
    /// Loads a board and reports any lines that were skipped.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the board file to load
    ///
    /// # Returns
    ///
    /// * `Ok(LoadReport)` - Board positioned at the top level, plus skipped lines
    /// * `Err(...)` - File not found or I/O error
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use aacboard::services::BoardService;
    ///
    /// let report = BoardService::load_with_report(Path::new("board.txt"))?;
    /// for skipped in &report.skipped {
    ///     println!("line {}: {}", skipped.line_number, skipped.reason);
    /// }
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load_with_report(path: &Path) -> Result<LoadReport> {
        parser::parse_board_file(path)
            .with_context(|| format!("Failed to load board from {}", path.display()))
    }

    /// Loads a board from a file.
    ///
    /// Malformed lines are skipped; use [`load_with_report`](Self::load_with_report)
    /// to see them.
    pub fn load(path: &Path) -> Result<SymbolBoard> {
        Self::load_with_report(path).map(|report| report.board)
    }

    /// Saves a board to a file.
    ///
    /// This performs an atomic write using a temp file + rename pattern to ensure
    /// the file is never left in a corrupted state.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use aacboard::{models::{Page, SymbolBoard}, services::BoardService};
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let mut board = SymbolBoard::new();
    /// let _ = board.add_entry("img/food/plate.png", "food");
    /// BoardService::save(&board, Path::new("board.txt"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(board: &SymbolBoard, path: &Path) -> Result<()> {
        parser::save_board_file(board, path)
            .with_context(|| format!("Failed to save board to {}", path.display()))
    }
}
