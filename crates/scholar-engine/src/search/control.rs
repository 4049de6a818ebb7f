//! Search budgets and cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// External bounds on a search: a shared stop flag, a wall-clock
/// deadline, and a node budget. All are optional; the default is
/// unlimited.
///
/// The flag makes a running search cancellable from another thread,
/// which is what lets callers push a search onto a worker without
/// losing control of it.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    pub stop: Option<Arc<AtomicBool>>,
    pub deadline: Option<Instant>,
    pub max_nodes: Option<u64>,
}

impl SearchLimits {
    /// No limits at all.
    pub fn none() -> SearchLimits {
        SearchLimits::default()
    }

    /// Stop after roughly `duration` of wall-clock time.
    pub fn move_time(mut self, duration: Duration) -> SearchLimits {
        self.deadline = Some(Instant::now() + duration);
        self
    }

    /// Stop after visiting `nodes` tree nodes.
    pub fn node_budget(mut self, nodes: u64) -> SearchLimits {
        self.max_nodes = Some(nodes);
        self
    }

    /// Stop when `flag` becomes true.
    pub fn stop_flag(mut self, flag: Arc<AtomicBool>) -> SearchLimits {
        self.stop = Some(flag);
        self
    }

    /// Whether the search should wind down. Called periodically from
    /// inside the tree, not on every node.
    pub(crate) fn should_stop(&self, nodes: u64) -> bool {
        if let Some(flag) = &self.stop {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        if let Some(max) = self.max_nodes {
            if nodes >= max {
                return true;
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return true;
            }
        }
        false
    }
}
