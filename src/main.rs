//! AAC Board - two-level picture symbol board for the terminal
//!
//! This application loads a board file, navigates its categories, and prints
//! the text a selected symbol would speak.

use aacboard::cli::{
    AddArgs, CliResult, ConfigArgs, ListArgs, RemoveArgs, SelectArgs, SessionArgs, ValidateArgs,
};
use aacboard::config::Config;
use aacboard::logging;
use clap::{Parser, Subcommand};

/// AAC Board - two-level picture symbol board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the categories of a board, or the symbols of one category
    List(ListArgs),
    /// Select symbols and print the spoken text
    Select(SelectArgs),
    /// Add a category or a symbol
    Add(AddArgs),
    /// Remove a category or a symbol
    Remove(RemoveArgs),
    /// Check a board file for lines that cannot be loaded
    Validate(ValidateArgs),
    /// Drive a board interactively from standard input
    Session(SessionArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::List(args) => args.execute(),
            Self::Select(args) => args.execute(),
            Self::Add(args) => args.execute(),
            Self::Remove(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Session(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // A broken config file is reported by the command that needs it
    let config_level = Config::load().ok().map(|config| config.logging.level);
    logging::init(cli.verbose, config_level.as_deref());

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
