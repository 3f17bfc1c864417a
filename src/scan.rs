// src/scan.rs

//! Artifact discovery.
//!
//! Lists the immediate entries of the configured folder and classifies them
//! by filename suffix: executables first, then (when enabled) shortcut
//! files as a second pass over the same directory. The enumeration order of
//! the underlying filesystem is deliberately preserved, because downstream
//! launches happen in exactly this order.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::fs::FileSystem;

/// Filename suffix selecting directly executable artifacts.
pub const EXECUTABLE_SUFFIX: &str = ".exe";

/// Filename suffix selecting shortcut artifacts, which need an indirect
/// invocation rather than direct execution.
pub const SHORTCUT_SUFFIX: &str = ".lnk";

/// How an artifact has to be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Execute the file directly.
    Executable,
    /// Hand the file to the platform's shortcut-opening convention.
    ShortcutIndirect,
}

/// One discovered launchable item.
///
/// Artifacts are built fresh on every scan and never mutated; there is no
/// persistent identity across rescans. The path is resolved against the
/// scan directory at discovery time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// The filename within the scanned directory.
    pub name: String,
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

impl Artifact {
    pub fn new(directory: &Path, name: impl Into<String>, kind: ArtifactKind) -> Self {
        let name = name.into();
        let path = directory.join(&name);
        Self { name, kind, path }
    }
}

/// List `directory` and classify launchable artifacts.
///
/// A missing or unreadable directory yields an empty result rather than an
/// error; the scheduler treats "nothing to list" the same as "nothing to
/// launch".
pub fn scan_artifacts(
    fs: &dyn FileSystem,
    directory: &Path,
    shortcuts_enabled: bool,
) -> Vec<Artifact> {
    let mut artifacts =
        collect_with_suffix(fs, directory, EXECUTABLE_SUFFIX, ArtifactKind::Executable);

    if shortcuts_enabled {
        artifacts.extend(collect_with_suffix(
            fs,
            directory,
            SHORTCUT_SUFFIX,
            ArtifactKind::ShortcutIndirect,
        ));
    }

    debug!(
        directory = %directory.display(),
        count = artifacts.len(),
        shortcuts_enabled,
        "scan complete"
    );

    artifacts
}

fn collect_with_suffix(
    fs: &dyn FileSystem,
    directory: &Path,
    suffix: &str,
    kind: ArtifactKind,
) -> Vec<Artifact> {
    let entries = match fs.read_dir(directory) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(
                directory = %directory.display(),
                error = %err,
                "directory not listable; treating as empty"
            );
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            if name.ends_with(suffix) {
                Some(Artifact {
                    name: name.to_string(),
                    kind,
                    path: path.clone(),
                })
            } else {
                None
            }
        })
        .collect()
}
