//! Immutable data model for the covering-walk problem.
//!
//! Provides vertices, undirected weighted edges, persistent walks, and the
//! validated graph the search engine runs against. All types are immutable
//! once built and freely shareable across threads.
//!
//! # Example
//!
//! ```rust
//! use coverwalk_core::model::{Edge, Graph, Vertex, Walk};
//!
//! let a = Vertex::new("A").unwrap();
//! let b = Vertex::new("B").unwrap();
//! let c = Vertex::new("C").unwrap();
//!
//! let graph = Graph::new(vec![
//!     Edge::new(a.clone(), b.clone(), 2),
//!     Edge::new(b.clone(), c.clone(), 3),
//! ])
//! .unwrap();
//!
//! let walk = Walk::new().append(Edge::new(a, b, 2)).unwrap();
//! assert_eq!(walk.weight(), 2);
//! assert!(!graph.covers_all_edges(&walk));
//! ```

mod graph;
mod types;
mod walk;


pub use graph::Graph;
pub use types::{Edge, Vertex};
pub use walk::Walk;
