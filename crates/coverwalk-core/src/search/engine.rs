//! The branch-and-bound recursion and its public entry point.

use std::fmt;
use std::time::Instant;

use crossbeam_channel::{bounded, Receiver};

use crate::error::{Error, Result};
use crate::model::{Graph, Vertex, Walk};

use super::bound::SharedBest;
use super::SearchConfig;

/// Branch-and-bound solver for the minimum covering walk of a graph.
///
/// The solver owns the (immutable) graph and a thread configuration; a
/// single solver can run any number of searches, from any start vertex.
#[derive(Debug)]
pub struct Solver {
    graph: Graph,
    config: SearchConfig,
}

impl Solver {
    /// Creates a solver with the default configuration.
    #[must_use]
    pub fn new(graph: Graph) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn with_config(graph: Graph, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Returns the graph this solver searches over.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Finds the minimum-weight walk from `start` that covers every edge.
    ///
    /// Runs the full branch-and-bound search on a dedicated work-stealing
    /// pool and blocks until it completes. Repeated calls with the same
    /// inputs return the same walk: equal-weight candidates are tie-broken
    /// by their canonical rendering.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownVertex` if `start` is not part of the graph,
    /// `Error::NoSolution` if no covering walk was recorded within the
    /// traversal bound, and `Error::ThreadPool` if the worker pool cannot
    /// be built.
    pub fn solve(&self, start: &Vertex) -> Result<Solution> {
        if !self.graph.contains_vertex(start) {
            return Err(Error::UnknownVertex(start.label().to_string()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.effective_threads())
            .build()
            .map_err(|e| Error::ThreadPool(e.to_string()))?;

        let bound = self.graph.max_traversal_weight();
        let best = SharedBest::new(bound);
        let started = Instant::now();
        tracing::debug!(
            graph = %self.graph,
            start = %start,
            bound,
            threads = self.config.effective_threads(),
            "search starting"
        );

        pool.install(|| self.expand(start, &Walk::new(), &best, bound))?;

        let recorded = best.recorded();
        let walk = best.into_best().ok_or(Error::NoSolution)?;
        tracing::info!(
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            weight = walk.weight(),
            recorded,
            "search finished"
        );
        Ok(Solution { walk })
    }

    /// One branch of the recursion.
    ///
    /// Returns the best covering-walk weight proven by this subtree, or the
    /// (possibly refreshed) bound when the subtree was pruned away.
    fn expand(&self, current: &Vertex, walk: &Walk, best: &SharedBest, mut bound: u64) -> Result<u64> {
        let walk_weight = walk.weight();

        // Success: the walk covers the graph within the bound.
        if walk_weight <= bound && self.graph.covers_all_edges(walk) {
            best.record(walk.clone());
            tracing::debug!(weight = walk_weight, len = walk.len(), "covering walk recorded");
            return Ok(walk_weight);
        }

        // Pick up bounds discovered by branches running elsewhere. Equal
        // weights are never pruned: every minimum-weight cover must reach
        // the log, or the tie-break would depend on which branch recorded
        // first.
        bound = bound.min(best.current_min());

        if walk_weight > bound || !walk.should_continue() {
            return Ok(bound);
        }

        let mut receivers: Vec<Receiver<Result<u64>>> = Vec::new();
        let mut branch_min = bound;

        let spawned: Result<()> = rayon::scope(|s| {
            for edge in self.graph.ordered_edges_incident_to(current, walk) {
                // Completed siblings tighten the bound for edges admitted
                // later in this same loop; in-flight ones stay invisible
                // until the final join.
                for rx in &receivers {
                    for finished in rx.try_iter() {
                        branch_min = branch_min.min(finished?);
                    }
                }

                let beats_best = walk_weight.saturating_add(edge.weight()) <= branch_min;
                let enough_left = self.graph.uncovered_weight(walk)
                    <= branch_min.saturating_sub(walk_weight);
                if !beats_best || !enough_left {
                    continue;
                }

                let child_walk = walk.append(edge.clone())?;
                let next = edge.end().clone();
                let child_bound = branch_min;
                let (tx, rx) = bounded(1);
                s.spawn(move |_| {
                    let _ = tx.send(self.expand(&next, &child_walk, best, child_bound));
                });
                receivers.push(rx);
            }
            Ok(())
        });
        // The scope has joined every child; surface admission errors first.
        spawned?;

        let mut result = branch_min;
        for rx in receivers {
            for finished in rx.try_iter() {
                result = result.min(finished?);
            }
        }
        Ok(result)
    }
}

/// The outcome of a successful search: the best covering walk found.
#[derive(Debug, Clone)]
pub struct Solution {
    walk: Walk,
}

impl Solution {
    /// Returns the covering walk.
    #[must_use]
    pub fn walk(&self) -> &Walk {
        &self.walk
    }

    /// Total weight of the covering walk.
    #[must_use]
    pub fn weight(&self) -> u64 {
        self.walk.weight()
    }

    /// Vertex-by-vertex trace of the walk, starting vertex included.
    #[must_use]
    pub fn trace(&self) -> Vec<Vertex> {
        self.walk.trace()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trace: Vec<String> = self.trace().iter().map(ToString::to_string).collect();
        write!(f, "{} (weight = {})", trace.join(" -> "), self.weight())
    }
}
