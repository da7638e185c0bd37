//! Parallel branch-and-bound search for minimum covering walks.
//!
//! Each admitted extension of the current walk is spawned as a rayon task,
//! so the recursion tree is also the task dependency tree: a parent blocks
//! only at its final join. Branches share one mutable resource, the
//! [`SharedBest`] bound tracker; everything else is immutable.
//!
//! # Example
//!
//! ```rust
//! use coverwalk_core::model::{Edge, Graph, Vertex};
//! use coverwalk_core::search::{SearchConfig, Solver};
//!
//! let a = Vertex::new("A").unwrap();
//! let b = Vertex::new("B").unwrap();
//! let c = Vertex::new("C").unwrap();
//!
//! let graph = Graph::new(vec![
//!     Edge::new(a.clone(), b.clone(), 1),
//!     Edge::new(b, c.clone(), 1),
//!     Edge::new(c, a.clone(), 1),
//! ])
//! .unwrap();
//!
//! let solver = Solver::with_config(graph, SearchConfig::new().with_fixed_threads(2));
//! let solution = solver.solve(&a).unwrap();
//! assert_eq!(solution.weight(), 3);
//! ```

mod bound;
mod engine;

#[cfg(test)]
mod bound_tests;
#[cfg(test)]
mod engine_tests;

pub use bound::SharedBest;
pub use engine::{Solution, Solver};

/// Thread configuration for the search pool.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThreadConfig {
    /// Automatically size the pool from the CPU count.
    #[default]
    Auto,
    /// Use a fixed number of threads.
    Fixed(usize),
}

impl ThreadConfig {
    /// Returns the effective number of threads to use.
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        match self {
            ThreadConfig::Auto => {
                let cpus = std::thread::available_parallelism()
                    .map(std::num::NonZeroUsize::get)
                    .unwrap_or(1);
                // Leave 1 core for other work, minimum 1 thread
                (cpus.saturating_sub(1)).max(1)
            }
            ThreadConfig::Fixed(n) => (*n).max(1),
        }
    }
}

/// Configuration for a solver run.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Thread configuration (auto or fixed).
    pub threads: ThreadConfig,
}

impl SearchConfig {
    /// Creates a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set thread config.
    #[must_use]
    pub fn with_threads(mut self, threads: ThreadConfig) -> Self {
        self.threads = threads;
        self
    }

    /// Builder: set a fixed thread count.
    #[must_use]
    pub fn with_fixed_threads(mut self, count: usize) -> Self {
        self.threads = ThreadConfig::Fixed(count);
        self
    }

    /// Gets the effective thread count for this config.
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        self.threads.effective_threads()
    }
}
