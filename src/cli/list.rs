//! List the symbols on a page of a board.

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::models::{Page, SymbolBoard};
use crate::services::BoardService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List the categories of a board, or the symbols of one category
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Path to board file (defaults to the configured board)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Top-level key of the category to list
    #[arg(short, long, value_name = "KEY")]
    pub category: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct EntryItem {
    key: String,
    text: String,
}

#[derive(Debug, Serialize)]
struct ListResponse {
    label: String,
    entries: Vec<EntryItem>,
    count: usize,
}

/// Returns the text shown next to a key on the current page.
///
/// At the top level that is the category name; inside a category it is the
/// spoken text.
pub fn entry_text(board: &SymbolBoard, key: &str) -> String {
    let text = match board.current_category() {
        Ok(category) => category.text_for(key),
        Err(_) => board.category(key).map(|category| category.name()),
    };
    text.unwrap_or_default().to_string()
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_deref())?;
        let mut board = BoardService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e:#}")))?;

        if let Some(category) = &self.category {
            board.select(category)?;
        }

        let entries: Vec<EntryItem> = board
            .list_entries()
            .into_iter()
            .map(|key| EntryItem {
                text: entry_text(&board, &key),
                key,
            })
            .collect();

        let response = ListResponse {
            label: board.label().to_string(),
            count: entries.len(),
            entries,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("No entries.");
        } else {
            let heading = if response.label.is_empty() {
                "Categories"
            } else {
                response.label.as_str()
            };
            println!("{heading} ({}):", response.count);
            println!();
            for entry in &response.entries {
                println!("  {:<40} {}", entry.key, entry.text);
            }
        }

        Ok(())
    }
}
