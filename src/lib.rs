// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod queue;
pub mod scan;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::LaunchConfig;
use crate::engine::{Command, CoreScheduler, Notification, Runtime, RuntimeOptions};
use crate::exec::ProcessSpawner;
use crate::fs::{FileSystem, RealFileSystem};
use crate::scan::scan_artifacts;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings loading (with CLI overrides)
/// - scheduler core / runtime / spawner
/// - the console presenter for notifications
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let config_path = PathBuf::from(&args.config);

    let mut cfg = config::load_or_default(fs.as_ref(), &config_path)?;
    apply_cli_overrides(&mut cfg, &args);
    config::validate_config(&cfg)?;

    info!(
        directory = %cfg.directory.display(),
        interval_seconds = cfg.interval_seconds,
        shortcuts_enabled = cfg.shortcuts_enabled,
        "starting with settings"
    );

    if args.save {
        config::save_to_path(fs.as_ref(), &config_path, &cfg)?;
        info!(path = %config_path.display(), "settings saved");
    }

    if args.list {
        print_available(fs.as_ref(), &cfg);
        return Ok(());
    }

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(16);
    let (notify_tx, notify_rx) = mpsc::channel::<Notification>(64);

    let spawner = ProcessSpawner::new(Arc::clone(&fs), notify_tx.clone());

    // Ctrl-C → graceful shutdown.
    {
        let tx = cmd_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(Command::Shutdown).await;
        });
    }

    let presenter = tokio::spawn(present_notifications(notify_rx));

    // Seed the initial scan and start drip-launching immediately.
    cmd_tx
        .send(Command::Rescan {
            directory: cfg.directory.clone(),
            shortcuts_enabled: cfg.shortcuts_enabled,
        })
        .await?;
    cmd_tx.send(Command::Start).await?;

    // The CLI exits once the pool is drained; a resident front end would
    // keep the loop alive instead.
    let options = RuntimeOptions {
        exit_on_exhausted: true,
    };

    let core = CoreScheduler::new(cfg, options);
    let runtime = Runtime::new(core, cmd_rx, spawner, notify_tx, fs, config_path);
    runtime.run().await?;

    drop(cmd_tx);
    let _ = presenter.await;
    Ok(())
}

/// CLI flags win over the settings file for this run. `--shortcuts` can only
/// enable; the file's `true` stays in effect when the flag is absent.
fn apply_cli_overrides(cfg: &mut LaunchConfig, args: &CliArgs) {
    if let Some(dir) = &args.dir {
        cfg.directory = dir.clone();
    }
    if let Some(interval) = args.interval {
        cfg.interval_seconds = interval;
    }
    if args.shortcuts {
        cfg.shortcuts_enabled = true;
    }
}

/// `--list` output: the artifacts a run would launch, in launch order.
fn print_available(fs: &dyn FileSystem, cfg: &LaunchConfig) {
    let artifacts = scan_artifacts(fs, &cfg.directory, cfg.shortcuts_enabled);

    println!(
        "{} launchable program(s) in {}",
        artifacts.len(),
        cfg.directory.display()
    );
    for artifact in &artifacts {
        println!("  {}", artifact.name);
    }
}

/// Console presenter: the only observer of the scheduler, fed exclusively
/// through notifications (it never sees the queue itself).
async fn present_notifications(mut rx: mpsc::Receiver<Notification>) {
    while let Some(note) = rx.recv().await {
        match note {
            Notification::QueueReset { pending } => {
                println!("{pending} program(s) queued for launch");
            }
            Notification::ArtifactLaunched(artifact) => {
                println!("launching {}", artifact.name);
            }
            Notification::Exhausted => {
                println!("there are no more programs left to launch");
            }
            Notification::SpawnError { artifact, message } => {
                eprintln!("failed to launch {}: {message}", artifact.name);
            }
        }
    }
}
