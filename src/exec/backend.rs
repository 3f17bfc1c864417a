// src/exec/backend.rs

//! Pluggable spawner backend abstraction.
//!
//! The runtime talks to a `SpawnerBackend` instead of spawning processes
//! itself. This keeps the production spawning code in [`super::spawner`]
//! while tests can provide a backend that only records which artifacts were
//! launched (and at what time), without starting real processes.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::scan::Artifact;

/// Trait abstracting how one artifact is launched.
///
/// Implementations must be fire-and-forget: the returned future resolves
/// once the spawn has been *attempted*, never once the process finishes. A
/// failed spawn is reported out-of-band (as a `SpawnError` notification)
/// and must not surface as an `Err` here; `Err` is reserved for
/// infrastructure faults that should stop the runtime.
pub trait SpawnerBackend: Send {
    fn spawn(&mut self, artifact: Artifact)
    -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}
