//! # coverwalk-core
//!
//! Minimum covering-walk search engine for small undirected weighted graphs.
//!
//! Given a graph and a starting vertex, the solver finds the lightest walk
//! that traverses every edge at least once (edges may be revisited). This is
//! a route-inspection variant answered by an exhaustive, pruned, parallel
//! branch-and-bound search rather than by construction.
//!
//! ## Features
//!
//! - **Immutable data model**: vertices, undirected edges, and persistent
//!   walks with structural sharing, safe to share across threads
//! - **Heuristic edge ordering**: prefer-new-territory sorting with a bounded
//!   depth-first distance probe to improve pruning
//! - **Parallel search**: each admitted branch runs as a rayon task; the best
//!   bound is shared through a lock-free atomic minimum
//! - **Deterministic results**: equal-weight solutions are tie-broken by
//!   their canonical rendering, so repeated runs agree
//!
//! ## Quick Start
//!
//! ```rust
//! use coverwalk_core::{Edge, Graph, Solver, Vertex};
//!
//! fn main() -> coverwalk_core::Result<()> {
//!     let graph = Graph::new(vec![
//!         Edge::new(Vertex::new("A")?, Vertex::new("B")?, 1),
//!         Edge::new(Vertex::new("B")?, Vertex::new("C")?, 1),
//!         Edge::new(Vertex::new("A")?, Vertex::new("C")?, 1),
//!     ])?;
//!
//!     let solver = Solver::new(graph);
//!     let solution = solver.solve(&Vertex::new("A")?)?;
//!
//!     assert_eq!(solution.weight(), 3);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod search;

pub use config::CoreConfig;
pub use error::{Error, Result};
pub use model::{Edge, Graph, Vertex, Walk};
pub use parse::{parse_edge, parse_graph};
pub use search::{SearchConfig, Solution, Solver, ThreadConfig};
