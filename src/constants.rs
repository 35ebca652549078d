//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the board file markers.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "AAC Board";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "aacboard";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "AacBoard";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "AACBOARD_CONFIG_DIR";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "AACBOARD_LOG";

/// Prefix that marks a symbol line in a board file.
pub const CHILD_MARKER: char = '>';
