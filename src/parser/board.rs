//! Board file parsing.
//!
//! A board file is plain text. Each category header line is followed by the
//! lines of its symbols:
//!
//! ```text
//! img/food/plate.png food
//! >img/food/fries.png french fries
//! >img/food/watermelon.png watermelon
//! img/clothing/hanger.png clothing
//! >img/clothing/shirt.png collared shirt
//! ```
//!
//! The first whitespace-separated token of a line is the key. The remaining
//! tokens, joined by single spaces, are the category name or spoken text. A
//! leading `>` marks a symbol of the most recent category.
//!
//! Loading is permissive: a line that cannot be used is skipped and recorded
//! in the [`LoadReport`], and the rest of the file still loads.

use crate::constants::{APP_BINARY_NAME, CHILD_MARKER};
use crate::models::{AddOutcome, IgnoredReason, Page, SymbolBoard};
use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Why a line was left out of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The line had a key but nothing after it.
    MissingText,
    /// A symbol line appeared before any usable category header.
    NoCategory,
    /// The board refused the key or text.
    Ignored(IgnoredReason),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingText => f.write_str("missing text after key"),
            Self::NoCategory => f.write_str("symbol line has no category header"),
            Self::Ignored(reason) => write!(f, "entry ignored: {reason}"),
        }
    }
}

/// A line that did not make it into the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line_number: usize,
    /// The line as read
    pub content: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// A loaded board together with the lines that were skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// The board, positioned at the top level
    pub board: SymbolBoard,
    /// Lines left out, in file order
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    /// Returns true if every non-blank line was used.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// One classified line of a board file.
#[derive(Debug, PartialEq, Eq)]
enum BoardLine<'a> {
    Blank,
    Category { key: &'a str, name: String },
    Entry { key: &'a str, text: String },
}

/// Splits a line into its key and the single-spaced remainder.
fn classify_line(line: &str) -> BoardLine<'_> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return BoardLine::Blank;
    };

    let rest = tokens.collect::<Vec<_>>().join(" ");
    match first.strip_prefix(CHILD_MARKER) {
        Some(key) => BoardLine::Entry { key, text: rest },
        None => BoardLine::Category {
            key: first,
            name: rest,
        },
    }
}

/// Builds a board from a sequence of lines.
///
/// Unusable lines are dropped; see [`load_board_with_report`] to find out
/// which.
pub fn load_board<I, S>(lines: I) -> SymbolBoard
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    load_board_with_report(lines).board
}

/// Builds a board from a sequence of lines and reports skipped lines.
///
/// A repeated category key replaces the earlier category; the symbol lines
/// that follow attach to the new one.
pub fn load_board_with_report<I, S>(lines: I) -> LoadReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = LoadReport::default();
    let mut in_category = false;

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_number = idx + 1;

        let result = match classify_line(line) {
            BoardLine::Blank => Ok(()),
            BoardLine::Category { key, name } => {
                let board = &mut report.board;
                board.reset();
                in_category = false;
                if name.is_empty() {
                    Err(SkipReason::MissingText)
                } else {
                    match board.add_entry(key, &name) {
                        AddOutcome::Ignored(reason) => Err(SkipReason::Ignored(reason)),
                        AddOutcome::Added | AddOutcome::Updated => {
                            in_category = board.select(key).is_ok();
                            Ok(())
                        }
                    }
                }
            }
            BoardLine::Entry { key, text } => {
                if !in_category {
                    Err(SkipReason::NoCategory)
                } else if text.is_empty() {
                    Err(SkipReason::MissingText)
                } else {
                    match report.board.add_entry(key, &text) {
                        AddOutcome::Ignored(reason) => Err(SkipReason::Ignored(reason)),
                        AddOutcome::Added | AddOutcome::Updated => Ok(()),
                    }
                }
            }
        };

        if let Err(reason) = result {
            warn!(line_number, %reason, line, "skipped board line");
            report.skipped.push(SkippedLine {
                line_number,
                content: line.to_string(),
                reason,
            });
        }
    }

    report.board.reset();
    debug!(
        categories = report.board.category_count(),
        entries = report.board.entry_count(),
        skipped = report.skipped.len(),
        "loaded board"
    );
    report
}

/// Parses a board from a string.
pub fn parse_board_str(content: &str) -> LoadReport {
    load_board_with_report(content.lines())
}

/// Parses a board file.
///
/// # Errors
///
/// Returns errors for:
/// - File not found
/// - Path is a directory
/// - Read failures (including invalid UTF-8)
///
/// Malformed lines are not errors; they are listed in the report.
pub fn parse_board_file(path: &Path) -> Result<LoadReport> {
    if !path.exists() {
        anyhow::bail!(
            "Board file not found: {}\n\n\
             Please check the file path and try again.\n\
             To set a default board, run: {} config set --default-board <FILE>",
            path.display(),
            APP_BINARY_NAME
        );
    }

    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file: {}", path.display()))?;

    Ok(parse_board_str(&content))
}
