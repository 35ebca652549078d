//! Interactive board session on stdin/stdout.
//!
//! Each input line is either a key to select on the current page or a
//! command starting with `:`. Spoken text is printed as `say: <text>`.

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::models::{AddOutcome, Page, SymbolBoard};
use crate::services::BoardService;
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const HELP: &str = "\
commands:
  <key>             select a symbol on the current page
  :list             show the current page
  :label            show the current category name
  :reset            go back to the top level
  :has <key>        check whether a key is on the current page
  :add <key> <text> add a symbol (a category at the top level)
  :save             write the board back to its file
  :quit             end the session";

/// Drive a board interactively from standard input
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// Path to board file (defaults to the configured board)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,
}

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand<'a> {
    Select(&'a str),
    List,
    Label,
    Reset,
    Has(&'a str),
    Add { key: &'a str, text: &'a str },
    Save,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Option<SessionCommand<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if !line.starts_with(':') {
        return Some(SessionCommand::Select(line));
    }

    let (name, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(name, rest)| (name, rest.trim()));

    let command = match name {
        ":list" | ":ls" => SessionCommand::List,
        ":label" => SessionCommand::Label,
        ":reset" | ":top" => SessionCommand::Reset,
        ":has" if !rest.is_empty() => SessionCommand::Has(rest),
        ":add" => match rest.split_once(char::is_whitespace) {
            Some((key, text)) => SessionCommand::Add {
                key,
                text: text.trim(),
            },
            None => SessionCommand::Unknown(line),
        },
        ":save" => SessionCommand::Save,
        ":help" | ":?" => SessionCommand::Help,
        ":quit" | ":q" | ":exit" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(line),
    };
    Some(command)
}

/// Writes the title and keys of a page.
fn write_page(page: &dyn Page, out: &mut impl Write) -> io::Result<()> {
    let label = page.label();
    writeln!(out, "[{}]", if label.is_empty() { "top" } else { label })?;
    for key in page.list_entries() {
        writeln!(out, "  {key}")?;
    }
    Ok(())
}

/// State of one interactive session.
pub struct Session<'a> {
    board: &'a mut SymbolBoard,
    path: Option<&'a Path>,
    dirty: bool,
}

impl<'a> Session<'a> {
    /// Creates a session over a board. `path` is where `:save` writes.
    pub fn new(board: &'a mut SymbolBoard, path: Option<&'a Path>) -> Self {
        Self {
            board,
            path,
            dirty: false,
        }
    }

    /// Reads commands until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let Some(command) = parse_command(&line) else {
                continue;
            };
            if !self.handle(command, &mut out)? {
                return Ok(());
            }
        }
        self.finish(&mut out)
    }

    /// Runs one command. Returns false when the session should end.
    fn handle(&mut self, command: SessionCommand<'_>, out: &mut impl Write) -> Result<bool> {
        debug!(?command, "session command");
        match command {
            SessionCommand::Select(key) => match self.board.select(key) {
                Ok(spoken) if spoken.is_empty() => writeln!(out, "opened: {}", self.board.label())?,
                Ok(spoken) => writeln!(out, "say: {spoken}")?,
                Err(_) => writeln!(out, "not found: {key}")?,
            },
            SessionCommand::List => write_page(&*self.board, out)?,
            SessionCommand::Label => {
                let label = self.board.label();
                writeln!(out, "{}", if label.is_empty() { "(top)" } else { label })?;
            }
            SessionCommand::Reset => {
                self.board.reset();
                writeln!(out, "top")?;
            }
            SessionCommand::Has(key) => {
                let answer = if self.board.contains_key(key) { "yes" } else { "no" };
                writeln!(out, "{answer}")?;
            }
            SessionCommand::Add { key, text } => {
                let page: &mut dyn Page = &mut *self.board;
                let outcome = page.add_entry(key, text);
                match outcome {
                    AddOutcome::Added => writeln!(out, "added: {key}")?,
                    AddOutcome::Updated => writeln!(out, "updated: {key}")?,
                    AddOutcome::Ignored(reason) => writeln!(out, "ignored: {reason}")?,
                }
                self.dirty |= outcome.is_applied();
            }
            SessionCommand::Save => match self.path {
                Some(path) => match BoardService::save(self.board, path) {
                    Ok(()) => {
                        self.dirty = false;
                        writeln!(out, "saved: {}", path.display())?;
                    }
                    Err(err) => {
                        warn!(path = %path.display(), "session save failed: {err:#}");
                        writeln!(out, "save failed: {err:#}")?;
                    }
                },
                None => writeln!(out, "no board file to save to")?,
            },
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => {
                self.finish(out)?;
                return Ok(false);
            }
            SessionCommand::Unknown(line) => writeln!(out, "unknown command: {line}")?,
        }
        Ok(true)
    }

    fn finish(&self, out: &mut impl Write) -> Result<()> {
        if self.dirty {
            writeln!(out, "unsaved changes discarded")?;
        }
        out.flush()?;
        Ok(())
    }
}

impl SessionArgs {
    /// Execute the session command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_deref())?;
        let mut board = BoardService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e:#}")))?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        Session::new(&mut board, Some(path.as_path()))
            .run(stdin.lock(), stdout.lock())
            .map_err(|e| CliError::io(format!("Session failed: {e:#}")))
    }
}
