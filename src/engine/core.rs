// src/engine/core.rs

//! Pure core scheduler state machine.
//!
//! This module contains a synchronous, deterministic core that consumes
//! [`ControlEvent`]s and produces:
//! - an updated scheduler state
//! - a list of [`CoreCommand`]s describing what the IO shell should do next
//!
//! The async shell (`engine::runtime::Runtime`) is responsible for reading
//! commands from channels, driving the actual tokio timer, and handing
//! artifacts to the spawner.
//!
//! The core is intended to be extensively unit tested without any Tokio,
//! channels, filesystem, or processes.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::LaunchConfig;
use crate::engine::{ControlEvent, CoreCommand, Notification, RuntimeOptions, SchedulerState};
use crate::queue::LaunchQueue;
use crate::scan::Artifact;

/// Decision returned by the core after handling a single [`ControlEvent`].
#[derive(Debug, Clone)]
pub struct CoreStep {
    /// Commands the IO shell should execute (spawn, arm/disarm timer, notify).
    pub commands: Vec<CoreCommand>,
    /// Whether the outer runtime loop should keep running.
    pub keep_running: bool,
}

impl CoreStep {
    fn noop() -> Self {
        Self {
            commands: Vec::new(),
            keep_running: true,
        }
    }
}

/// Pure scheduler state.
///
/// Owns the launch queue, the Idle/Running state and the current settings.
/// It has **no** channels, no Tokio types, and performs no IO.
#[derive(Debug)]
pub struct CoreScheduler {
    config: LaunchConfig,
    queue: LaunchQueue,
    state: SchedulerState,
    options: RuntimeOptions,
}

impl CoreScheduler {
    pub fn new(config: LaunchConfig, options: RuntimeOptions) -> Self {
        Self {
            config,
            queue: LaunchQueue::new(),
            state: SchedulerState::Idle,
            options,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SchedulerState::Idle
    }

    /// Read-only queue view (for tests and diagnostics).
    pub fn queue(&self) -> &LaunchQueue {
        &self.queue
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Handle a single control event, updating state and returning the
    /// resulting commands for the IO shell.
    pub fn step(&mut self, event: ControlEvent) -> CoreStep {
        match event {
            ControlEvent::Start => self.handle_start(),
            ControlEvent::Stop => self.handle_stop(),
            ControlEvent::Tick => self.handle_tick(),
            ControlEvent::QueueLoaded(artifacts) => self.handle_queue_loaded(artifacts),
            ControlEvent::ConfigUpdated(config) => self.handle_config_updated(config),
            ControlEvent::Shutdown => CoreStep {
                commands: vec![CoreCommand::DisarmTimer],
                keep_running: false,
            },
        }
    }

    /// `Idle --start--> Running`: launch immediately, then arm the repeating
    /// timer. The armed period is captured here; later config saves do not
    /// rearm the live timer.
    fn handle_start(&mut self) -> CoreStep {
        if self.state == SchedulerState::Running {
            debug!("start ignored; already running");
            return CoreStep::noop();
        }

        let interval = Duration::from_secs(self.config.interval_seconds);
        info!(
            interval_seconds = self.config.interval_seconds,
            pending = self.queue.pending_len(),
            "timer started"
        );

        self.state = SchedulerState::Running;

        let mut commands = Vec::new();
        let keep_running = self.launch_tick(&mut commands);

        // The eager launch may already have exhausted the queue, in which
        // case we are back in Idle and there is nothing to arm.
        if self.state == SchedulerState::Running {
            commands.push(CoreCommand::ArmTimer(interval));
        }

        CoreStep {
            commands,
            keep_running,
        }
    }

    /// `Running --stop--> Idle`: disarm the timer. No in-flight launch is
    /// interrupted.
    fn handle_stop(&mut self) -> CoreStep {
        if self.state == SchedulerState::Idle {
            debug!("stop ignored; already idle");
            return CoreStep::noop();
        }

        info!("timer stopped");
        self.state = SchedulerState::Idle;

        CoreStep {
            commands: vec![CoreCommand::DisarmTimer],
            keep_running: true,
        }
    }

    fn handle_tick(&mut self) -> CoreStep {
        // A tick that raced a stop must not launch.
        if self.state == SchedulerState::Idle {
            debug!("tick ignored; scheduler is idle");
            return CoreStep::noop();
        }

        let mut commands = Vec::new();
        let keep_running = self.launch_tick(&mut commands);

        CoreStep {
            commands,
            keep_running,
        }
    }

    /// Replace the queue with a fresh scan result.
    ///
    /// Allowed while running: progress resets (prior launches are forgotten)
    /// but the armed timer keeps ticking, so the next launch happens on the
    /// existing rhythm.
    fn handle_queue_loaded(&mut self, artifacts: Vec<Artifact>) -> CoreStep {
        self.queue.load(artifacts);
        let pending = self.queue.pending_len();
        info!(pending, "queue loaded");

        CoreStep {
            commands: vec![CoreCommand::Notify(Notification::QueueReset { pending })],
            keep_running: true,
        }
    }

    fn handle_config_updated(&mut self, config: LaunchConfig) -> CoreStep {
        debug!(
            interval_seconds = config.interval_seconds,
            directory = %config.directory.display(),
            shortcuts_enabled = config.shortcuts_enabled,
            "settings updated; armed timer unchanged until next start"
        );
        self.config = config;
        CoreStep::noop()
    }

    /// One launch attempt. Returns whether the runtime loop should keep
    /// running.
    ///
    /// Exhaustion is observed when a tick finds nothing left to take, i.e.
    /// on the tick *after* the last launch. The idle transition therefore
    /// lags the final launch by one interval; this mirrors the original
    /// behaviour and is kept deliberately.
    fn launch_tick(&mut self, commands: &mut Vec<CoreCommand>) -> bool {
        match self.queue.take_next() {
            Some(artifact) => {
                info!(artifact = %artifact.name, "launching");
                commands.push(CoreCommand::Spawn(artifact.clone()));
                commands.push(CoreCommand::Notify(Notification::ArtifactLaunched(
                    artifact,
                )));
                true
            }
            None => {
                info!("no more artifacts left to launch; stopping");
                self.state = SchedulerState::Idle;
                commands.push(CoreCommand::DisarmTimer);
                commands.push(CoreCommand::Notify(Notification::Exhausted));
                !self.options.exit_on_exhausted
            }
        }
    }
}
