use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::time::Instant;

use driplaunch::engine::Notification;
use driplaunch::errors::Result;
use driplaunch::exec::SpawnerBackend;
use driplaunch::scan::Artifact;

/// One recorded launch attempt, with the (tokio) time it happened at, so
/// paused-clock tests can assert drip timing.
#[derive(Debug, Clone)]
pub struct SpawnRecord {
    pub name: String,
    pub at: Instant,
}

/// A fake spawner that:
/// - records which artifacts were "launched" and when
/// - never starts a real process
/// - emits a `SpawnError` notification for artifacts it was told to fail.
pub struct FakeSpawner {
    notify_tx: mpsc::Sender<Notification>,
    spawned: Arc<Mutex<Vec<SpawnRecord>>>,
    failing: HashSet<String>,
}

impl FakeSpawner {
    pub fn new(
        notify_tx: mpsc::Sender<Notification>,
        spawned: Arc<Mutex<Vec<SpawnRecord>>>,
    ) -> Self {
        Self {
            notify_tx,
            spawned,
            failing: HashSet::new(),
        }
    }

    /// Script a spawn failure for the given artifact name.
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }
}

impl SpawnerBackend for FakeSpawner {
    fn spawn(
        &mut self,
        artifact: Artifact,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let tx = self.notify_tx.clone();
        let spawned = Arc::clone(&self.spawned);
        let fails = self.failing.contains(&artifact.name);

        Box::pin(async move {
            {
                let mut guard = spawned.lock().unwrap();
                guard.push(SpawnRecord {
                    name: artifact.name.clone(),
                    at: Instant::now(),
                });
            }

            if fails {
                let _ = tx
                    .send(Notification::SpawnError {
                        artifact,
                        message: "scripted spawn failure".to_string(),
                    })
                    .await;
            }
            Ok(())
        })
    }
}
