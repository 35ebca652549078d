//! Remove a category or a symbol from a board file.

use crate::cli::common::{load_board_for_edit, resolve_board_path, CliError, CliResult};
use crate::services::BoardService;
use clap::Args;
use std::path::PathBuf;

/// Remove a category, or a symbol inside a category
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Path to board file (defaults to the configured board)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Category holding the symbol (omit to remove a whole category)
    #[arg(short, long, value_name = "KEY")]
    pub category: Option<String>,

    /// Image key to remove
    #[arg(long, value_name = "KEY")]
    pub key: String,

    /// Rewrite the file even if some of its lines could not be loaded
    #[arg(long)]
    pub force: bool,
}

impl RemoveArgs {
    /// Execute the remove command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_deref())?;
        let mut board = load_board_for_edit(&path, self.force)?;

        if let Some(category) = &self.category {
            let text = board.category_mut(category)?.remove_entry(&self.key)?;
            println!("Symbol '{}' ({text}) removed successfully.", self.key);
        } else {
            let category = board.remove_category(&self.key)?;
            println!(
                "Category '{}' ({}, {} symbols) removed successfully.",
                self.key,
                category.name(),
                category.len()
            );
        }

        BoardService::save(&board, &path)
            .map_err(|e| CliError::io(format!("Failed to save board: {e:#}")))?;

        Ok(())
    }
}
