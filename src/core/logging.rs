//! Log subscriber setup
//!
//! Board output goes to stdout, so log lines are written to stderr. `RUST_LOG`
//! wins over the configured level when set.

use crate::core::error::{CoreError, CoreResult};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Level used when the configured one does not parse
pub const FALLBACK_LEVEL: &str = "info";

/// Filter for a configured level, falling back to [`FALLBACK_LEVEL`]
///
/// The second value carries the parse error when the fallback was taken.
pub fn filter_for_level(level: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LEVEL), Some(e.to_string())),
    }
}

/// Install the global `tracing` subscriber
///
/// `default_level` is any `EnvFilter` directive, e.g. `info` or
/// `chess_engine=debug`. A directive that does not parse is logged and
/// replaced by [`FALLBACK_LEVEL`]. Fails only if a subscriber is already
/// installed.
pub fn init_logging(default_level: &str) -> CoreResult<()> {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => filter_for_level(default_level),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CoreError::Logging {
            message: e.to_string(),
        })?;

    if let Some(reason) = rejected {
        warn!(
            "[SETTINGS] Invalid log level '{}': {}. Using '{}'.",
            default_level, reason, FALLBACK_LEVEL
        );
    }
    Ok(())
}
