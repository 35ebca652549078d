//! Validation command for board files.

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::services::BoardService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Check a board file and report lines that cannot be loaded
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to board file (defaults to the configured board)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero if any line was skipped
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct SkippedItem {
    line: usize,
    content: String,
    reason: String,
}

#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    categories: usize,
    entries: usize,
    skipped: Vec<SkippedItem>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_deref())?;
        let report = BoardService::load_with_report(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e:#}")))?;

        let response = ValidationResponse {
            valid: report.is_clean(),
            categories: report.board.category_count(),
            entries: report.board.entry_count(),
            skipped: report
                .skipped
                .iter()
                .map(|s| SkippedItem {
                    line: s.line_number,
                    content: s.content.clone(),
                    reason: s.reason.to_string(),
                })
                .collect(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!(
                "{}: {} categories, {} symbols",
                path.display(),
                response.categories,
                response.entries
            );
            if response.valid {
                println!("✓ All lines loaded");
            } else {
                println!("⚠ {} line(s) skipped:", response.skipped.len());
                for item in &response.skipped {
                    println!("  line {}: {} ({})", item.line, item.reason, item.content);
                }
            }
        }

        if self.strict && !response.valid {
            return Err(CliError::validation(format!(
                "{} line(s) could not be loaded",
                response.skipped.len()
            )));
        }

        Ok(())
    }
}
