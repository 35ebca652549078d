//! Shared test fixtures for board and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Board with two categories in the on-disk line format.
pub const SAMPLE_BOARD: &str = "\
img/food/plate.png food
>img/food/fries.png french fries
>img/food/watermelon.png watermelon
img/clothing/hanger.png clothing
>img/clothing/shirt.png collared shirt
>img/clothing/shoes.png shoes
";

/// Board with one line of every kind the loader skips.
pub const MESSY_BOARD: &str = "\
>img/orphan.png nobody owns me
img/food/plate.png food

>img/food/fries.png french fries
>img/food/bare.png
img/empty.png
>img/empty/cup.png cup
";

/// Line numbers of `MESSY_BOARD` that the loader skips.
pub const MESSY_SKIPPED_LINES: [usize; 4] = [1, 5, 6, 7];

/// Writes `content` as `board.txt` in a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped, so keep it
/// alive for as long as the path is used.
pub fn create_temp_board_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let board_path = temp_dir.path().join("board.txt");
    fs::write(&board_path, content).expect("Failed to write board file");
    (board_path, temp_dir)
}

/// Creates an empty config directory for isolating CLI runs.
pub fn create_temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Reads a board file back as a string.
pub fn read_board(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read board file")
}
