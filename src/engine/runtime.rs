// src/engine/runtime.rs

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::{self, LaunchConfig};
use crate::engine::core::CoreScheduler;
use crate::engine::{Command, ControlEvent, CoreCommand, Notification};
use crate::errors::Result;
use crate::exec::SpawnerBackend;
use crate::fs::FileSystem;
use crate::scan::scan_artifacts;

/// Async IO shell around [`CoreScheduler`].
///
/// One `tokio::select!` loop multiplexes the user command channel and the
/// (optionally armed) launch timer, so ticks and commands are serialized
/// onto a single control sequence: the queue is never touched concurrently.
/// Actual process spawning is delegated to a [`SpawnerBackend`].
pub struct Runtime<S: SpawnerBackend> {
    core: CoreScheduler,
    command_rx: mpsc::Receiver<Command>,
    spawner: S,
    notify_tx: mpsc::Sender<Notification>,
    fs: Arc<dyn FileSystem>,
    config_path: PathBuf,
    timer: Option<Interval>,
}

impl<S: SpawnerBackend> fmt::Debug for Runtime<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .field("timer_armed", &self.timer.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: SpawnerBackend> Runtime<S> {
    pub fn new(
        core: CoreScheduler,
        command_rx: mpsc::Receiver<Command>,
        spawner: S,
        notify_tx: mpsc::Sender<Notification>,
        fs: Arc<dyn FileSystem>,
        config_path: PathBuf,
    ) -> Self {
        Self {
            core,
            command_rx,
            spawner,
            notify_tx,
            fs,
            config_path,
            timer: None,
        }
    }

    /// Main event loop.
    ///
    /// - Waits for the next user command or timer tick, whichever comes
    ///   first.
    /// - Translates commands into control events (doing the scan / persist
    ///   work here, outside the pure core).
    /// - Feeds the event into the core and executes the returned commands.
    pub async fn run(mut self) -> Result<()> {
        info!("driplaunch runtime started");

        loop {
            let event = tokio::select! {
                maybe_cmd = self.command_rx.recv() => {
                    match maybe_cmd {
                        Some(command) => {
                            debug!(?command, "runtime received command");
                            match self.control_event_for(command) {
                                Some(event) => event,
                                None => continue,
                            }
                        }
                        None => {
                            info!("command channel closed; exiting");
                            break;
                        }
                    }
                }
                _ = tick_armed(&mut self.timer) => {
                    ControlEvent::Tick
                }
            };

            let step = self.core.step(event);

            for command in step.commands {
                self.execute_command(command).await?;
            }

            if !step.keep_running {
                info!("core requested exit; stopping runtime");
                break;
            }
        }

        info!("runtime exiting");
        Ok(())
    }

    /// Translate a user command into a control event for the core,
    /// performing any IO the command implies.
    ///
    /// Returns `None` when the command was fully handled (or rejected) here.
    fn control_event_for(&mut self, command: Command) -> Option<ControlEvent> {
        match command {
            Command::Start => Some(ControlEvent::Start),
            Command::Stop => Some(ControlEvent::Stop),
            Command::Shutdown => Some(ControlEvent::Shutdown),
            Command::Rescan {
                directory,
                shortcuts_enabled,
            } => {
                let artifacts = scan_artifacts(self.fs.as_ref(), &directory, shortcuts_enabled);
                Some(ControlEvent::QueueLoaded(artifacts))
            }
            Command::SaveConfig(new_config) => self.handle_save_config(new_config),
        }
    }

    /// Validate and persist new settings. An invalid save is rejected and
    /// never reaches the core; a persist failure is logged but the settings
    /// are still adopted for this process.
    fn handle_save_config(&mut self, new_config: LaunchConfig) -> Option<ControlEvent> {
        if let Err(err) = config::validate_config(&new_config) {
            warn!(error = %err, "rejecting invalid settings save");
            return None;
        }

        if let Err(err) = config::save_to_path(self.fs.as_ref(), &self.config_path, &new_config) {
            warn!(
                path = %self.config_path.display(),
                error = %err,
                "failed to persist settings"
            );
        } else {
            info!(path = %self.config_path.display(), "settings saved");
        }

        Some(ControlEvent::ConfigUpdated(new_config))
    }

    /// Execute a single command from the core.
    async fn execute_command(&mut self, command: CoreCommand) -> Result<()> {
        match command {
            CoreCommand::Spawn(artifact) => {
                self.spawner.spawn(artifact).await?;
            }
            CoreCommand::ArmTimer(period) => {
                self.arm_timer(period);
            }
            CoreCommand::DisarmTimer => {
                self.timer = None;
            }
            CoreCommand::Notify(notification) => {
                // A dropped presenter must not break the scheduler.
                if self.notify_tx.send(notification).await.is_err() {
                    debug!("notification receiver dropped");
                }
            }
        }
        Ok(())
    }

    /// Arm the repeating timer. The first tick fires one full period from
    /// now; the eager launch already happened inside the start transition.
    fn arm_timer(&mut self, period: Duration) {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.timer = Some(interval);
        debug!(period_secs = period.as_secs(), "timer armed");
    }
}

/// Await the next tick of an armed timer.
///
/// Pending forever while disarmed, so a stopped scheduler never wakes the
/// loop; `Interval::tick` is cancel-safe, so losing the race against a user
/// command does not lose a tick.
async fn tick_armed(timer: &mut Option<Interval>) {
    match timer {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
