//! Logging setup.
//!
//! Events are written to stderr so command output on stdout stays clean.

use crate::constants::LOG_ENV;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Picks the filter directive used when `AACBOARD_LOG` is not set.
///
/// `--verbose` wins over the configured level, which wins over `warn`.
pub fn default_directive(verbose: bool, config_level: Option<&str>) -> String {
    if verbose {
        return "debug".to_string();
    }
    config_level
        .filter(|level| !level.trim().is_empty())
        .map_or_else(|| "warn".to_string(), str::to_ascii_lowercase)
}

/// Installs the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool, config_level: Option<&str>) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, config_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
