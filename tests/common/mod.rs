#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use driplaunch::config::LaunchConfig;
use driplaunch::engine::{Command, CoreScheduler, Notification, Runtime, RuntimeOptions};
use driplaunch::fs::mock::MockFileSystem;

pub use driplaunch_test_utils::fake_spawner::{FakeSpawner, SpawnRecord};
pub use driplaunch_test_utils::init_tracing;

/// A running scheduler wired to a fake spawner and a mock filesystem.
pub struct Harness {
    pub cmd_tx: mpsc::Sender<Command>,
    pub notify_rx: mpsc::Receiver<Notification>,
    pub spawned: Arc<Mutex<Vec<SpawnRecord>>>,
    pub fs: MockFileSystem,
    pub runtime: JoinHandle<driplaunch::errors::Result<()>>,
}

impl Harness {
    /// Names recorded by the fake spawner so far, in launch order.
    pub fn spawned_names(&self) -> Vec<String> {
        self.spawned
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }

    pub async fn send(&self, command: Command) {
        self.cmd_tx.send(command).await.expect("runtime gone");
    }

    /// Rescan using the harness config's directory and flags.
    pub fn rescan_command(cfg: &LaunchConfig) -> Command {
        Command::Rescan {
            directory: cfg.directory.clone(),
            shortcuts_enabled: cfg.shortcuts_enabled,
        }
    }
}

/// Spawn a runtime task around a fresh core, fake spawner and mock fs.
///
/// The mock filesystem is cloned into the runtime (shared state), so tests
/// can add or remove files after startup to drive rescans.
pub fn start_harness(
    cfg: LaunchConfig,
    exit_on_exhausted: bool,
    failing: &[&str],
) -> Harness {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_dir(&cfg.directory);

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(16);
    let (notify_tx, notify_rx) = mpsc::channel::<Notification>(64);

    let spawned = Arc::new(Mutex::new(Vec::new()));
    let mut spawner = FakeSpawner::new(notify_tx.clone(), Arc::clone(&spawned));
    for name in failing {
        spawner = spawner.failing_on(name);
    }

    let core = CoreScheduler::new(cfg, RuntimeOptions { exit_on_exhausted });
    let runtime = Runtime::new(
        core,
        cmd_rx,
        spawner,
        notify_tx,
        Arc::new(fs.clone()),
        PathBuf::from("Driplaunch.toml"),
    );

    let handle = tokio::spawn(runtime.run());

    Harness {
        cmd_tx,
        notify_rx,
        spawned,
        fs,
        runtime: handle,
    }
}

/// Seed executable files into the mock directory, in order.
pub fn seed_exes(fs: &MockFileSystem, dir: &std::path::Path, names: &[&str]) {
    for name in names {
        fs.add_file(dir.join(name), "");
    }
}
