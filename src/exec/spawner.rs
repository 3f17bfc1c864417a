// src/exec/spawner.rs

//! Production process spawner.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::Notification;
use crate::errors::{LaunchError, Result};
use crate::fs::FileSystem;
use crate::scan::{Artifact, ArtifactKind};

use super::backend::SpawnerBackend;

/// Spawns artifacts as detached OS processes.
///
/// The child handle is dropped immediately after a successful spawn; there
/// is no supervision, no exit-code handling and no cancellation. Spawn
/// failures are reported as [`Notification::SpawnError`] and never abort the
/// scheduler or re-queue the artifact.
pub struct ProcessSpawner {
    fs: Arc<dyn FileSystem>,
    notify_tx: mpsc::Sender<Notification>,
}

impl ProcessSpawner {
    pub fn new(fs: Arc<dyn FileSystem>, notify_tx: mpsc::Sender<Notification>) -> Self {
        Self { fs, notify_tx }
    }

    async fn spawn_detached(&self, artifact: Artifact) {
        // The file may have vanished between scan and launch; skip silently.
        // The artifact stays consumed, it is never revisited.
        if !self.fs.exists(&artifact.path) {
            debug!(
                artifact = %artifact.name,
                path = %artifact.path.display(),
                "artifact vanished before launch; skipping"
            );
            return;
        }

        let mut command = build_command(&artifact);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        match command.spawn() {
            Ok(child) => {
                info!(
                    artifact = %artifact.name,
                    pid = ?child.id(),
                    "process started"
                );
                // Fire-and-forget: drop the handle, leave the process alone.
                drop(child);
            }
            Err(source) => {
                let err = LaunchError::SpawnFailed {
                    artifact: artifact.name.clone(),
                    source,
                };
                warn!(error = %err, "spawn failed; continuing");
                let _ = self
                    .notify_tx
                    .send(Notification::SpawnError {
                        artifact,
                        message: err.to_string(),
                    })
                    .await;
            }
        }
    }
}

impl SpawnerBackend for ProcessSpawner {
    fn spawn(
        &mut self,
        artifact: Artifact,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            self.spawn_detached(artifact).await;
            Ok(())
        })
    }
}

/// Build the platform invocation for an artifact.
///
/// Executables run directly. Shortcut files go through the platform's
/// indirect convention: on Windows `cmd /C start "" <path>`, elsewhere the
/// path is handed to `sh` as an argument.
fn build_command(artifact: &Artifact) -> Command {
    match artifact.kind {
        ArtifactKind::Executable => Command::new(&artifact.path),
        ArtifactKind::ShortcutIndirect => {
            if cfg!(windows) {
                let mut c = Command::new("cmd");
                c.arg("/C").arg("start").arg("").arg(&artifact.path);
                c
            } else {
                let mut c = Command::new("sh");
                c.arg(&artifact.path);
                c
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use super::*;
    use crate::fs::mock::MockFileSystem;
    use crate::scan::{Artifact, ArtifactKind};

    #[tokio::test]
    async fn vanished_artifact_is_skipped_silently() {
        let fs = MockFileSystem::new();
        fs.add_dir("/apps");

        let (tx, mut rx) = mpsc::channel(8);
        let mut spawner = ProcessSpawner::new(Arc::new(fs), tx);

        // Never existed on the mock filesystem: no spawn attempt, no error.
        let artifact = Artifact::new(Path::new("/apps"), "gone.exe", ArtifactKind::Executable);
        spawner.spawn(artifact).await.unwrap();

        drop(spawner);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn failed_spawn_reports_spawn_error() {
        let fs = MockFileSystem::new();
        // Present on the mock filesystem, but not actually executable on
        // the real one, so the OS spawn fails.
        fs.add_file("/apps/bogus.exe", "");

        let (tx, mut rx) = mpsc::channel(8);
        let mut spawner = ProcessSpawner::new(Arc::new(fs), tx);

        let artifact = Artifact::new(Path::new("/apps"), "bogus.exe", ArtifactKind::Executable);
        spawner.spawn(artifact.clone()).await.unwrap();

        match rx.recv().await {
            Some(Notification::SpawnError { artifact: a, .. }) => assert_eq!(a, artifact),
            other => panic!("expected SpawnError, got {other:?}"),
        }
    }
}
