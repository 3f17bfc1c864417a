// src/config/validate.rs

use crate::config::model::LaunchConfig;
use crate::errors::{LaunchError, Result};

/// Check settings invariants before they are accepted into the scheduler or
/// written to disk.
///
/// - `interval_seconds` must be at least 1.
/// - `directory` must be non-empty.
///
/// Note that the directory is *not* required to exist: a missing or
/// unreadable folder is handled tolerantly at scan time (empty result), not
/// rejected here.
pub fn validate_config(config: &LaunchConfig) -> Result<()> {
    if config.interval_seconds == 0 {
        return Err(LaunchError::ConfigError(
            "interval_seconds must be >= 1 (got 0)".to_string(),
        ));
    }

    if config.directory.as_os_str().is_empty() {
        return Err(LaunchError::ConfigError(
            "directory must not be empty".to_string(),
        ));
    }

    Ok(())
}
