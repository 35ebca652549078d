//! Replay symbol selections and print what would be spoken.

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::models::{Page, SymbolBoard};
use crate::services::BoardService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Select symbols from the top level and print the spoken text
#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
    /// Path to board file (defaults to the configured board)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Keys to select, in order (e.g. a category key, then a symbol key)
    #[arg(value_name = "KEY", required = true, num_args = 1..)]
    pub keys: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SelectResponse {
    label: String,
    spoken: String,
}

/// Selects each key in turn and returns the text of the last selection.
///
/// Stops at the first key that is not on the current page.
pub fn replay<P: Page + ?Sized>(page: &mut P, keys: &[String]) -> CliResult<String> {
    let mut spoken = String::new();
    for key in keys {
        spoken = page.select(key)?;
    }
    Ok(spoken)
}

impl SelectArgs {
    /// Execute the select command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_deref())?;
        let mut board: SymbolBoard = BoardService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e:#}")))?;

        let spoken = replay(&mut board, &self.keys)?;
        let response = SelectResponse {
            label: board.label().to_string(),
            spoken,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.spoken.is_empty() {
            println!("Opened category: {}", response.label);
        } else {
            println!("{}", response.spoken);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_board_str;

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_replay_category_then_symbol() {
        let mut board = parse_board_str(
            "img/food/plate.png food\n>img/food/fries.png french fries\n",
        )
        .board;

        let spoken = replay(&mut board, &keys(&["img/food/plate.png", "img/food/fries.png"]));
        assert_eq!(spoken.unwrap(), "french fries");
    }

    #[test]
    fn test_replay_category_only() {
        let mut board = parse_board_str("img/food/plate.png food\n").board;
        assert_eq!(replay(&mut board, &keys(&["img/food/plate.png"])).unwrap(), "");
        assert_eq!(board.label(), "food");
    }

    #[test]
    fn test_replay_miss() {
        let mut board = parse_board_str("img/food/plate.png food\n").board;
        let err = replay(&mut board, &keys(&["img/food/plate.png", "img/food/nope.png"]))
            .unwrap_err();
        assert!(err.message.contains("img/food/nope.png"));
    }
}
