//! Shared types for CLI command handlers.

use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::error::BoardError;
use crate::models::SymbolBoard;
use crate::services::BoardService;
use std::fmt;
use std::path::{Path, PathBuf};

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input, or a key that is not on the board
    ValidationError = 1,
    /// File or configuration I/O failed
    IoError = 2,
}

impl ExitCode {
    /// Returns the numeric code passed to `std::process::exit`.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Builds a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Builds an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<BoardError> for CliError {
    fn from(err: BoardError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Picks the board file from `--board`, falling back to the configured default.
pub fn resolve_board_path(board: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = board {
        return Ok(path.to_path_buf());
    }

    let config = Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;
    config.paths.default_board.ok_or_else(|| {
        CliError::validation(format!(
            "No board file given. Pass --board <FILE> or run: {APP_BINARY_NAME} config set --default-board <FILE>"
        ))
    })
}

/// Loads a board that a command is about to write back.
///
/// Saving drops every line the loader skipped, so a board with skipped lines
/// is refused unless `force` is set.
pub fn load_board_for_edit(path: &Path, force: bool) -> CliResult<SymbolBoard> {
    let report = BoardService::load_with_report(path)
        .map_err(|e| CliError::io(format!("Failed to load board: {e:#}")))?;

    if !report.is_clean() {
        let count = report.skipped.len();
        if !force {
            return Err(CliError::validation(format!(
                "{count} line(s) in {} could not be loaded and would be dropped on save. \
                 Run `{APP_BINARY_NAME} validate` to see them, or pass --force to rewrite anyway",
                path.display()
            )));
        }
        eprintln!("Warning: dropping {count} line(s) that could not be loaded");
    }

    Ok(report.board)
}
