//! Vertex and edge types.
//!
//! Edges are undirected: equality and hashing ignore both orientation and
//! weight, matching how the search decides whether a graph edge has already
//! been covered. [`Edge::exact_match`] is the stricter comparison for the
//! few places where orientation matters.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named point in the graph.
///
/// Identity is the label alone; two vertices with the same label are the
/// same vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex {
    label: String,
}

impl Vertex {
    /// Creates a vertex with the given label.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyLabel` if the label is empty or whitespace-only.
    pub fn new(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyLabel);
        }
        Ok(Self {
            label: trimmed.to_string(),
        })
    }

    /// Returns the vertex label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// An undirected weighted connection between two vertices.
///
/// The `start`/`end` naming reflects the orientation an edge carries while
/// sitting inside a [`Walk`](super::Walk); as a graph edge the orientation
/// is meaningless and equality treats both orders as the same edge.
///
/// # Example
///
/// ```rust
/// use coverwalk_core::model::{Edge, Vertex};
///
/// let a = Vertex::new("A").unwrap();
/// let b = Vertex::new("B").unwrap();
/// let edge = Edge::new(a, b, 4);
///
/// assert_eq!(edge, edge.flip());
/// assert!(!edge.exact_match(&edge.flip()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    start: Vertex,
    end: Vertex,
    weight: u64,
}

impl Edge {
    /// Creates an edge between two vertices with the given weight.
    #[must_use]
    pub fn new(start: Vertex, end: Vertex, weight: u64) -> Self {
        Self { start, end, weight }
    }

    /// Returns the start vertex under the current orientation.
    #[must_use]
    pub fn start(&self) -> &Vertex {
        &self.start
    }

    /// Returns the end vertex under the current orientation.
    #[must_use]
    pub fn end(&self) -> &Vertex {
        &self.end
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Returns the same edge with its endpoints swapped.
    #[must_use]
    pub fn flip(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
            weight: self.weight,
        }
    }

    /// Returns true if the current orientation starts at `vertex`.
    #[must_use]
    pub fn starts_at(&self, vertex: &Vertex) -> bool {
        &self.start == vertex
    }

    /// Returns true if the current orientation ends at `vertex`.
    #[must_use]
    pub fn ends_at(&self, vertex: &Vertex) -> bool {
        &self.end == vertex
    }

    /// Returns true if either endpoint is `vertex`.
    #[must_use]
    pub fn touches(&self, vertex: &Vertex) -> bool {
        self.starts_at(vertex) || self.ends_at(vertex)
    }

    /// Returns true if this edge shares at least one endpoint with `other`.
    #[must_use]
    pub fn shares_endpoint_with(&self, other: &Self) -> bool {
        self.touches(&other.start) || self.touches(&other.end)
    }

    /// Returns this edge oriented to start at `vertex`, or `None` if the
    /// edge does not touch `vertex`.
    #[must_use]
    pub fn oriented_from(&self, vertex: &Vertex) -> Option<Self> {
        if self.starts_at(vertex) {
            Some(self.clone())
        } else if self.ends_at(vertex) {
            Some(self.flip())
        } else {
            None
        }
    }

    /// Strict comparison: same orientation and same weight.
    ///
    /// Unlike `==`, which treats `A-B` and `B-A` as the same edge and
    /// ignores weight, this only holds for an identical record.
    #[must_use]
    pub fn exact_match(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.weight == other.weight
    }
}

/// Direction-insensitive equality: endpoints match in either order.
///
/// Weight is deliberately not compared; a graph edge is identified by its
/// endpoint pair, and coverage checks must not distinguish orientations.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

impl Eq for Edge {}

/// Hash must agree with the direction-insensitive equality, so it combines
/// the endpoint labels in a fixed order and leaves out the weight.
impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (lo, hi) = if self.start.label() <= self.end.label() {
            (&self.start, &self.end)
        } else {
            (&self.end, &self.start)
        };
        lo.hash(state);
        hi.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, self.end, self.weight)
    }
}
