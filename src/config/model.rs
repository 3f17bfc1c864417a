// src/config/model.rs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings as read from (and written back to) the TOML settings file:
///
/// ```toml
/// directory = "/home/user/installers"
/// interval_seconds = 3600
/// shortcuts_enabled = false
/// ```
///
/// All fields are optional in the file and have defaults. The scheduler
/// treats this as an injected value object: it is only replaced by an
/// explicit save, and the armed timer interval is captured at start time,
/// so a save during a run does not rearm the live timer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LaunchConfig {
    /// Folder scanned for launchable programs.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Seconds between launches. Must be at least 1.
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,

    /// Whether `.lnk` shortcuts are launched after the executables.
    #[serde(default)]
    pub shortcuts_enabled: bool,
}

fn default_directory() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn default_interval_seconds() -> u64 {
    3600
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            interval_seconds: default_interval_seconds(),
            shortcuts_enabled: false,
        }
    }
}
