//! Add a category or a symbol to a board file.

use crate::cli::common::{load_board_for_edit, resolve_board_path, CliError, CliResult};
use crate::models::{AddOutcome, Page};
use crate::services::BoardService;
use clap::Args;
use std::path::PathBuf;

/// Add a category, or a symbol inside a category
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Path to board file (defaults to the configured board)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Category to add the symbol to (omit to add a new category)
    #[arg(short, long, value_name = "KEY")]
    pub category: Option<String>,

    /// Image key of the new symbol or category
    #[arg(long, value_name = "KEY")]
    pub key: String,

    /// Spoken text, or the category name when adding a category
    #[arg(long, value_name = "TEXT")]
    pub text: String,

    /// Rewrite the file even if some of its lines could not be loaded
    #[arg(long)]
    pub force: bool,
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_deref())?;
        let mut board = load_board_for_edit(&path, self.force)?;

        if let Some(category) = &self.category {
            board.select(category)?;
        }

        let outcome = board.add_entry(&self.key, &self.text);
        let what = if self.category.is_some() {
            "Symbol"
        } else {
            "Category"
        };

        match outcome {
            AddOutcome::Ignored(reason) => {
                return Err(CliError::validation(format!(
                    "{what} '{}' was not added: {reason}",
                    self.key
                )));
            }
            AddOutcome::Added => println!("{what} '{}' added successfully.", self.key),
            AddOutcome::Updated => println!("{what} '{}' updated successfully.", self.key),
        }

        BoardService::save(&board, &path)
            .map_err(|e| CliError::io(format!("Failed to save board: {e:#}")))?;

        Ok(())
    }
}
