// src/exec/mod.rs

//! Process spawning layer.
//!
//! This module is responsible for actually starting the discovered programs,
//! using `tokio::process::Command`, fire-and-forget: the scheduler never
//! waits for a spawned process to start up, exit, or produce output.
//!
//! - [`backend`] provides the `SpawnerBackend` trait that the runtime uses,
//!   and which tests can replace with a fake implementation.
//! - [`spawner`] contains the production `ProcessSpawner`.

pub mod backend;
pub mod spawner;

pub use backend::SpawnerBackend;
pub use spawner::ProcessSpawner;
