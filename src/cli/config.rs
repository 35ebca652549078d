//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Board file used when --board is omitted
    #[arg(long, value_name = "FILE")]
    default_board: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: Option<String>,
    paths: PathsOutput,
    logging: LoggingOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    default_board: Option<String>,
}

#[derive(Serialize, Debug)]
struct LoggingOutput {
    level: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.default_board.is_none() && self.log_level.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --default-board or --log-level",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.default_board {
            if path.is_dir() {
                return Err(CliError::validation(format!(
                    "Default board must be a file, not a directory: {}",
                    path.display()
                )));
            }
            let path = std::path::absolute(path).unwrap_or_else(|_| path.clone());
            config.paths.default_board = Some(path);
        }

        if let Some(level) = &self.log_level {
            config
                .set_log_level(level)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        config_file: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        paths: PathsOutput {
            default_board: config
                .paths
                .default_board
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        logging: LoggingOutput {
            level: config.logging.level.clone(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let heading = format!("{APP_NAME} Configuration");
    println!("{heading}");
    println!("{}", "=".repeat(heading.len()));
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("Config file: {}", path.display());
        println!();
    }

    println!("Paths:");
    if let Some(board) = &config.paths.default_board {
        println!("  Default Board: {}", board.display());
    } else {
        println!("  Default Board: (not configured)");
    }
    println!();

    println!("Logging:");
    println!("  Level: {}", config.logging.level);
    println!();
}
