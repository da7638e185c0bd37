//! Persistent, append-only walks.
//!
//! A walk is an ordered sequence of oriented edges where every edge starts
//! at the vertex the previous edge ended on. Walks are never mutated in
//! place: `append` returns a new walk whose links structurally share the
//! predecessor, so concurrent search branches extending a common prefix
//! never copy or race on it.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

use super::types::{Edge, Vertex};

/// An edge appearing at most this many times keeps a walk alive; at three
/// repetitions the walk is oscillating and gets cut off.
const MAX_EDGE_REPEATS: usize = 3;

#[derive(Debug)]
struct Link {
    edge: Edge,
    prev: Option<Arc<Link>>,
    len: usize,
    weight: u64,
}

/// An ordered, continuity-respecting sequence of edges.
///
/// # Example
///
/// ```rust
/// use coverwalk_core::model::{Edge, Vertex, Walk};
///
/// let a = Vertex::new("A").unwrap();
/// let b = Vertex::new("B").unwrap();
/// let c = Vertex::new("C").unwrap();
///
/// let walk = Walk::new()
///     .append(Edge::new(a.clone(), b.clone(), 1))
///     .unwrap()
///     // Arrives reversed; append flips it to keep the walk continuous.
///     .append(Edge::new(c.clone(), b.clone(), 2))
///     .unwrap();
///
/// assert_eq!(walk.weight(), 3);
/// assert_eq!(walk.last_vertex(), Some(&c));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Walk {
    head: Option<Arc<Link>>,
}

impl Walk {
    /// Creates an empty walk.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a walk from edges in order, normalizing orientation link by
    /// link.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnconnectedAppend` if some edge connects to the
    /// previous one in neither orientation.
    pub fn from_edges<I: IntoIterator<Item = Edge>>(edges: I) -> Result<Self> {
        let mut walk = Self::new();
        for edge in edges {
            walk = walk.append(edge)?;
        }
        Ok(walk)
    }

    /// Returns a new walk extended by `edge`.
    ///
    /// An empty walk accepts any edge in its given orientation. Otherwise
    /// the edge is kept as-is if it starts at the walk's last vertex,
    /// flipped if its other endpoint does.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnconnectedAppend` if neither orientation connects.
    pub fn append(&self, edge: Edge) -> Result<Self> {
        let oriented = match self.last_vertex() {
            None => edge,
            Some(last) => edge.oriented_from(last).ok_or_else(|| {
                Error::UnconnectedAppend {
                    walk_end: last.label().to_string(),
                    edge: edge.to_string(),
                }
            })?,
        };

        let (len, weight) = match &self.head {
            Some(link) => (link.len + 1, link.weight.saturating_add(oriented.weight())),
            None => (1, oriented.weight()),
        };

        Ok(Self {
            head: Some(Arc::new(Link {
                edge: oriented,
                prev: self.head.clone(),
                len,
                weight,
            })),
        })
    }

    /// Total weight of the walk, counting repeated edges every time.
    /// Saturates at `u64::MAX`.
    #[must_use]
    pub fn weight(&self) -> u64 {
        self.head.as_ref().map_or(0, |link| link.weight)
    }

    /// Number of edges in the walk.
    #[must_use]
    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |link| link.len)
    }

    /// Returns true if the walk has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The vertex the walk currently ends at, if any.
    #[must_use]
    pub fn last_vertex(&self) -> Option<&Vertex> {
        self.head.as_ref().map(|link| link.edge.end())
    }

    /// Counts how many edges along the walk end at `vertex`.
    #[must_use]
    pub fn visit_count_of(&self, vertex: &Vertex) -> usize {
        self.links().filter(|e| e.ends_at(vertex)).count()
    }

    /// Returns true if the walk contains `edge` (direction-insensitive).
    #[must_use]
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.links().any(|e| e == edge)
    }

    /// Returns true if any edge of the walk touches `vertex`.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.links().any(|e| e.touches(vertex))
    }

    /// Cycle-avoidance heuristic: returns false once any single edge has
    /// been traversed three or more times. An empty walk always continues.
    #[must_use]
    pub fn should_continue(&self) -> bool {
        let mut counts: FxHashMap<&Edge, usize> = FxHashMap::default();
        for edge in self.links() {
            let count = counts.entry(edge).or_insert(0);
            *count += 1;
            if *count >= MAX_EDGE_REPEATS {
                return false;
            }
        }
        true
    }

    /// Materializes the edges in walk order.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.links().cloned().collect();
        edges.reverse();
        edges
    }

    /// Vertex-by-vertex trace: the start of the first edge followed by the
    /// end of every edge.
    #[must_use]
    pub fn trace(&self) -> Vec<Vertex> {
        let edges = self.edges();
        let mut vertices = Vec::with_capacity(edges.len() + 1);
        if let Some(first) = edges.first() {
            vertices.push(first.start().clone());
        }
        for edge in &edges {
            vertices.push(edge.end().clone());
        }
        vertices
    }

    /// Iterates the links newest-first (reverse walk order).
    fn links(&self) -> LinkIter<'_> {
        LinkIter {
            next: self.head.as_deref(),
        }
    }
}

struct LinkIter<'a> {
    next: Option<&'a Link>,
}

impl<'a> Iterator for LinkIter<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.prev.as_deref();
        Some(&link.edge)
    }
}

/// Canonical rendering: edge renderings joined in walk order. Used as the
/// deterministic tie-break key when several covering walks share the
/// minimum weight.
impl fmt::Display for Walk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for edge in self.edges() {
            if !first {
                f.write_str("-")?;
            }
            write!(f, "{edge}")?;
            first = false;
        }
        Ok(())
    }
}
