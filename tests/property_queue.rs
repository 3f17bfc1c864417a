// tests/property_queue.rs
//
// Property tests for the launch queue partition invariant.

use proptest::prelude::*;

use driplaunch::queue::LaunchQueue;
use driplaunch_test_utils::builders::exes;

proptest! {
    /// Draining the queue preserves scan order exactly, and at every step
    /// each artifact is in exactly one of pending/launched.
    #[test]
    fn drain_preserves_order_and_partition(
        names in proptest::collection::vec("[a-z]{1,8}\\.exe", 0..40)
    ) {
        let name_refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        let artifacts = exes(&name_refs);
        let total = artifacts.len();

        let mut queue = LaunchQueue::new();
        queue.load(artifacts.clone());

        prop_assert!(queue.launched().is_empty());
        prop_assert_eq!(queue.pending_len(), total);

        let mut drained = Vec::new();
        while let Some(artifact) = queue.take_next() {
            prop_assert_eq!(queue.pending_len() + queue.launched().len(), total);
            drained.push(artifact);
        }

        prop_assert!(queue.is_exhausted());
        prop_assert!(queue.take_next().is_none());
        prop_assert_eq!(queue.launched().len(), total);
        prop_assert_eq!(drained, artifacts);
    }

    /// Reloading at any point resets launched and replaces pending wholesale.
    #[test]
    fn reload_resets_partition(
        first in proptest::collection::vec("[a-z]{1,8}\\.exe", 1..20),
        takes in 0usize..20,
        second in proptest::collection::vec("[a-z]{1,8}\\.exe", 0..20)
    ) {
        let first_refs: Vec<&str> = first.iter().map(|s| s.as_str()).collect();
        let second_refs: Vec<&str> = second.iter().map(|s| s.as_str()).collect();

        let mut queue = LaunchQueue::new();
        queue.load(exes(&first_refs));

        for _ in 0..takes.min(first.len()) {
            queue.take_next();
        }

        queue.load(exes(&second_refs));

        prop_assert!(queue.launched().is_empty());
        prop_assert_eq!(queue.pending_len(), second.len());
    }
}
