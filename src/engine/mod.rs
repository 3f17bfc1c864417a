// src/engine/mod.rs

//! The launch scheduler.
//!
//! This module ties together:
//! - the launch queue (pending vs. launched partition)
//! - the repeating launch timer
//! - the main runtime loop that reacts to:
//!   - user commands (start/stop/rescan/save)
//!   - timer ticks
//!   - shutdown signals
//!
//! The pure core state machine lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`]. User commands and timer ticks are serialized
//! onto one control loop, so the queue is never mutated concurrently.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::LaunchConfig;
use crate::scan::Artifact;

/// Scheduler state. `Idle` is the initial state and the automatic target on
/// exhaustion; there is no distinct paused state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

/// User commands accepted by the runtime.
#[derive(Debug, Clone)]
pub enum Command {
    /// Begin (or resume) drip-launching: one immediate launch, then one per
    /// interval.
    Start,
    /// Disarm the timer. In-flight spawns are not interrupted.
    Stop,
    /// Rescan the directory and rebuild the queue. Allowed while running;
    /// progress resets but the live timer keeps its rhythm.
    Rescan {
        directory: PathBuf,
        shortcuts_enabled: bool,
    },
    /// Validate, persist and adopt new settings. A new interval takes effect
    /// on the next `Start`, not retroactively on the armed timer.
    SaveConfig(LaunchConfig),
    /// Graceful shutdown of the runtime loop.
    Shutdown,
}

/// Events flowing into the pure core, after the IO shell has done any
/// required work (scanning, persisting).
#[derive(Debug, Clone)]
pub enum ControlEvent {
    Start,
    Stop,
    /// The repeating timer fired.
    Tick,
    /// A rescan finished; replace the queue with this result.
    QueueLoaded(Vec<Artifact>),
    /// New settings were accepted and persisted.
    ConfigUpdated(LaunchConfig),
    Shutdown,
}

/// Commands produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone)]
pub enum CoreCommand {
    /// Fire-and-forget spawn of one artifact.
    Spawn(Artifact),
    /// Arm the repeating timer with the given period. The first tick fires a
    /// full period from now (the eager launch already happened).
    ArmTimer(Duration),
    DisarmTimer,
    Notify(Notification),
}

/// Notifications for the presentation layer, emitted on an mpsc channel.
/// The observer never gets a live reference to the queue; these append-only
/// signals are the whole observation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The queue was rebuilt; any rendered list should be cleared.
    QueueReset { pending: usize },
    /// One artifact moved from pending to launched.
    ArtifactLaunched(Artifact),
    /// The queue emptied; the scheduler stopped itself.
    Exhausted,
    /// A spawn failed. Non-fatal: the artifact stays consumed and the drip
    /// continues.
    SpawnError { artifact: Artifact, message: String },
}

/// Runtime options used by the core.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeOptions {
    /// If true, the runtime loop exits after the exhausted transition. The
    /// CLI sets this; a long-lived front end would keep the loop alive for
    /// a later rescan + start.
    pub exit_on_exhausted: bool,
}

pub mod core;
pub mod runtime;

pub use self::core::{CoreScheduler, CoreStep};
pub use self::runtime::Runtime;
