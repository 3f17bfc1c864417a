#![allow(dead_code)]

use std::path::{Path, PathBuf};

use driplaunch::config::LaunchConfig;
use driplaunch::scan::{Artifact, ArtifactKind};

/// Builder for `LaunchConfig` to simplify test setup.
pub struct LaunchConfigBuilder {
    config: LaunchConfig,
}

impl LaunchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: LaunchConfig {
                directory: PathBuf::from("/apps"),
                interval_seconds: 5,
                shortcuts_enabled: false,
            },
        }
    }

    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.directory = dir.into();
        self
    }

    pub fn interval_seconds(mut self, secs: u64) -> Self {
        self.config.interval_seconds = secs;
        self
    }

    pub fn shortcuts_enabled(mut self, enabled: bool) -> Self {
        self.config.shortcuts_enabled = enabled;
        self
    }

    pub fn build(self) -> LaunchConfig {
        self.config
    }
}

impl Default for LaunchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An executable artifact resolved against `/apps`.
pub fn exe(name: &str) -> Artifact {
    Artifact::new(Path::new("/apps"), name, ArtifactKind::Executable)
}

/// A batch of executable artifacts, in the given order.
pub fn exes(names: &[&str]) -> Vec<Artifact> {
    names.iter().map(|n| exe(n)).collect()
}
