//! Shared best-bound tracking across concurrent search branches.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use parking_lot::Mutex;

use crate::model::Walk;

/// Concurrently shared record of every covering walk found so far.
///
/// The running minimum lives in a lock-free atomic so branches can read the
/// bound without touching the log; the walks themselves go into an
/// append-only log consulted once, at the end, to select the final answer.
/// Bound propagation between branches is eventually consistent: a branch
/// may briefly search against a stale bound, which costs efficiency but
/// never correctness.
#[derive(Debug)]
pub struct SharedBest {
    best: AtomicU64,
    walks: Mutex<Vec<Walk>>,
}

impl SharedBest {
    /// Creates a tracker seeded with the initial bound (the graph's maximum
    /// traversal weight).
    #[must_use]
    pub fn new(initial_bound: u64) -> Self {
        Self {
            best: AtomicU64::new(initial_bound),
            walks: Mutex::new(Vec::new()),
        }
    }

    /// Records a verified covering walk and tightens the running minimum.
    pub fn record(&self, walk: Walk) {
        let weight = walk.weight();
        self.walks.lock().push(walk);
        self.best.fetch_min(weight, AtomicOrdering::AcqRel);
    }

    /// The best (lowest) covering-walk weight seen so far, or the initial
    /// bound if nothing has been recorded yet.
    #[must_use]
    pub fn current_min(&self) -> u64 {
        self.best.load(AtomicOrdering::Acquire)
    }

    /// Number of walks recorded.
    #[must_use]
    pub fn recorded(&self) -> usize {
        self.walks.lock().len()
    }

    /// Consumes the tracker and selects the final answer: minimum weight,
    /// ties broken by ascending canonical rendering so repeated runs agree.
    #[must_use]
    pub fn into_best(self) -> Option<Walk> {
        self.walks.into_inner().into_iter().min_by(|a, b| {
            a.weight()
                .cmp(&b.weight())
                .then_with(|| a.to_string().cmp(&b.to_string()))
        })
    }
}
