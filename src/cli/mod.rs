//! CLI command handlers for aacboard.
//!
//! This module provides headless, scriptable access to boards for
//! automation and testing, plus a line-based interactive session.

pub mod add;
pub mod common;
pub mod config;
pub mod list;
pub mod remove;
pub mod select;
pub mod session;
pub mod validate;

// Re-export types used by main.rs and tests
pub use add::AddArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use list::ListArgs;
pub use remove::RemoveArgs;
pub use select::SelectArgs;
pub use session::SessionArgs;
pub use validate::ValidateArgs;
