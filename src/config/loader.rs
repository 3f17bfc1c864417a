// src/config/loader.rs

use std::path::{Path, PathBuf};

use crate::config::model::LaunchConfig;
use crate::config::validate::validate_config;
use crate::errors::Result;
use crate::fs::FileSystem;

/// Load the settings file from a given path.
///
/// This performs TOML deserialization and validation; a file that parses but
/// carries a bad value (e.g. `interval_seconds = 0`) is rejected.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<LaunchConfig> {
    let contents = fs.read_to_string(path.as_ref())?;
    let config: LaunchConfig = toml::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load the settings file, falling back to defaults when it does not exist.
///
/// This is the recommended entry point: a first run without a settings file
/// behaves like the defaults (current directory, one hour interval, no
/// shortcuts). A file that exists but fails to parse is still an error.
pub fn load_or_default(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<LaunchConfig> {
    let path = path.as_ref();
    if !fs.exists(path) {
        return Ok(LaunchConfig::default());
    }
    load_from_path(fs, path)
}

/// Validate and persist settings back to the given path.
///
/// An invalid config is rejected before anything touches the disk, so a bad
/// save can never corrupt the stored settings.
pub fn save_to_path(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    config: &LaunchConfig,
) -> Result<()> {
    validate_config(config)?;
    let contents = toml::to_string_pretty(config)?;
    fs.write(path.as_ref(), contents.as_bytes())?;
    Ok(())
}

/// Default settings file path: `Driplaunch.toml` in the current working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Driplaunch.toml")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::errors::LaunchError;
    use crate::fs::mock::MockFileSystem;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let fs = MockFileSystem::new();
        let cfg = load_or_default(&fs, "Driplaunch.toml").unwrap();
        assert_eq!(cfg, LaunchConfig::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let fs = MockFileSystem::new();
        let cfg = LaunchConfig {
            directory: PathBuf::from("/apps"),
            interval_seconds: 120,
            shortcuts_enabled: true,
        };

        save_to_path(&fs, "Driplaunch.toml", &cfg).unwrap();
        let loaded = load_from_path(&fs, "Driplaunch.toml").unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn save_rejects_invalid_interval() {
        let fs = MockFileSystem::new();
        let cfg = LaunchConfig {
            interval_seconds: 0,
            ..LaunchConfig::default()
        };

        let err = save_to_path(&fs, "Driplaunch.toml", &cfg).unwrap_err();
        assert!(matches!(err, LaunchError::ConfigError(_)));
        assert!(!fs.exists(std::path::Path::new("Driplaunch.toml")));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let fs = MockFileSystem::new();
        fs.add_file("Driplaunch.toml", "interval_seconds = \"soon\"");

        let err = load_or_default(&fs, "Driplaunch.toml").unwrap_err();
        assert!(matches!(err, LaunchError::TomlError(_)));
    }
}
