// src/queue.rs

//! Launch queue: the scheduler's working set.
//!
//! Discovered artifacts are partitioned into `pending` (not yet launched)
//! and `launched` (append-only, in launch order). Keeping two sequences
//! rather than one list with a cursor makes "already launched" directly
//! enumerable for a presenter, and makes exhaustion a pure length check.

use std::collections::VecDeque;

use tracing::debug;

use crate::scan::Artifact;

/// Ordered partition of discovered artifacts into pending and launched.
///
/// Invariant: every artifact is in exactly one of the two sequences, and
/// their union is fixed between `load` calls. The only mutation during a run
/// is [`LaunchQueue::take_next`], and the runtime serializes all callers, so
/// it is never invoked concurrently with itself or with [`LaunchQueue::load`].
#[derive(Debug, Default)]
pub struct LaunchQueue {
    pending: VecDeque<Artifact>,
    launched: Vec<Artifact>,
}

impl LaunchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `pending` with a fresh scan result and clear `launched`.
    ///
    /// Prior run identity is not preserved across a reload; a rescan during
    /// an active run resets progress.
    pub fn load(&mut self, artifacts: Vec<Artifact>) {
        debug!(
            pending = artifacts.len(),
            discarded_launched = self.launched.len(),
            "reloading launch queue"
        );
        self.pending = artifacts.into();
        self.launched.clear();
    }

    /// Pop the head of `pending`, record it as launched, and return it.
    ///
    /// Returns `None` when there is nothing left to launch.
    pub fn take_next(&mut self) -> Option<Artifact> {
        let artifact = self.pending.pop_front()?;
        self.launched.push(artifact.clone());
        Some(artifact)
    }

    /// True iff no pending artifacts remain.
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Artifact> {
        self.pending.iter()
    }

    /// Artifacts launched so far, in launch order.
    pub fn launched(&self) -> &[Artifact] {
        &self.launched
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::scan::{Artifact, ArtifactKind};

    fn artifacts(names: &[&str]) -> Vec<Artifact> {
        names
            .iter()
            .map(|n| Artifact::new(Path::new("/apps"), *n, ArtifactKind::Executable))
            .collect()
    }

    #[test]
    fn load_partitions_everything_as_pending() {
        let mut queue = LaunchQueue::new();
        queue.load(artifacts(&["a.exe", "b.exe", "c.exe"]));

        assert_eq!(queue.pending_len(), 3);
        assert!(queue.launched().is_empty());
        assert!(!queue.is_exhausted());
    }

    #[test]
    fn take_next_drains_in_scan_order() {
        let mut queue = LaunchQueue::new();
        queue.load(artifacts(&["a.exe", "b.exe", "c.exe"]));

        let mut taken = Vec::new();
        while let Some(artifact) = queue.take_next() {
            // Partition invariant holds at every step.
            assert_eq!(queue.pending_len() + queue.launched().len(), 3);
            taken.push(artifact.name);
        }

        assert_eq!(taken, vec!["a.exe", "b.exe", "c.exe"]);
        assert!(queue.is_exhausted());
        assert_eq!(queue.launched().len(), 3);
        assert!(queue.take_next().is_none());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut queue = LaunchQueue::new();
        queue.load(artifacts(&["a.exe", "a.exe"]));

        assert_eq!(queue.take_next().unwrap().name, "a.exe");
        assert_eq!(queue.take_next().unwrap().name, "a.exe");
        assert!(queue.is_exhausted());
    }

    #[test]
    fn reload_clears_launched() {
        let mut queue = LaunchQueue::new();
        queue.load(artifacts(&["a.exe", "b.exe"]));
        queue.take_next();

        queue.load(artifacts(&["c.exe"]));
        assert!(queue.launched().is_empty());
        assert_eq!(queue.pending_len(), 1);
        assert_eq!(queue.take_next().unwrap().name, "c.exe");
    }
}
