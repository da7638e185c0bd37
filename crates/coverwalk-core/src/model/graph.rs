//! The validated, immutable problem instance.

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};

use super::types::{Edge, Vertex};
use super::walk::Walk;

/// An immutable set of undirected weighted edges.
///
/// Construction validates connectivity; afterwards the graph is read-only
/// and shared without synchronization for the lifetime of a search. The
/// aggregate bounds the search prunes against are computed once here.
///
/// # Example
///
/// ```rust
/// use coverwalk_core::model::{Edge, Graph, Vertex};
///
/// let a = Vertex::new("A").unwrap();
/// let b = Vertex::new("B").unwrap();
/// let c = Vertex::new("C").unwrap();
///
/// let graph = Graph::new(vec![
///     Edge::new(a, b.clone(), 1),
///     Edge::new(b, c, 2),
/// ])
/// .unwrap();
///
/// assert_eq!(graph.total_weight(), 3);
/// assert_eq!(graph.max_traversal_weight(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    edges: Vec<Edge>,
    total_weight: u64,
}

impl Graph {
    /// Creates a graph from the given edges.
    ///
    /// A single-edge graph is always valid. With two or more edges, every
    /// edge must share an endpoint with at least one other edge, and all
    /// edges must belong to a single connected component. The second check
    /// is stricter than pairwise linkage alone: it rules out a graph made
    /// of two internally-linked islands, for which no covering walk exists
    /// from any start vertex.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyGraph` for an empty edge list,
    /// `Error::DisconnectedEdge` when either connectivity check fails, and
    /// `Error::WeightOverflow` when the doubled total weight does not fit
    /// in a `u64`.
    pub fn new(edges: Vec<Edge>) -> Result<Self> {
        if edges.is_empty() {
            return Err(Error::EmptyGraph);
        }

        if edges.len() > 1 {
            for (i, edge) in edges.iter().enumerate() {
                let linked = edges
                    .iter()
                    .enumerate()
                    .any(|(j, other)| i != j && edge.shares_endpoint_with(other));
                if !linked {
                    return Err(Error::DisconnectedEdge(edge.to_string()));
                }
            }
            Self::check_single_component(&edges)?;
        }

        // The search seeds its bound with 2x the total, so the doubled sum
        // must fit too.
        let total_weight = edges
            .iter()
            .try_fold(0u64, |acc, e| acc.checked_add(e.weight()))
            .ok_or(Error::WeightOverflow)?;
        if total_weight.checked_mul(2).is_none() {
            return Err(Error::WeightOverflow);
        }

        Ok(Self {
            edges,
            total_weight,
        })
    }

    /// BFS over vertex adjacency; every edge must be reachable from the
    /// first edge's start vertex.
    fn check_single_component(edges: &[Edge]) -> Result<()> {
        let mut reached: FxHashSet<&Vertex> = FxHashSet::default();
        let mut queue: VecDeque<&Vertex> = VecDeque::new();

        let origin = edges[0].start();
        reached.insert(origin);
        queue.push_back(origin);

        while let Some(vertex) = queue.pop_front() {
            for edge in edges {
                let neighbor = if edge.starts_at(vertex) {
                    edge.end()
                } else if edge.ends_at(vertex) {
                    edge.start()
                } else {
                    continue;
                };
                if reached.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        for edge in edges {
            if !reached.contains(edge.start()) || !reached.contains(edge.end()) {
                return Err(Error::DisconnectedEdge(edge.to_string()));
            }
        }
        Ok(())
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns all edges in definition order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of all edge weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Upper bound on a covering walk's weight: every edge traversed at
    /// most twice.
    #[must_use]
    pub fn max_traversal_weight(&self) -> u64 {
        self.total_weight * 2
    }

    /// Upper bound on a covering walk's length in edges.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.edges.len() * 2
    }

    /// Returns true if any edge touches `vertex`.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.edges.iter().any(|e| e.touches(vertex))
    }

    /// Returns true if the graph contains `edge` (direction-insensitive).
    #[must_use]
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// All edges touching `vertex`, each oriented to start at `vertex`.
    /// Unordered.
    #[must_use]
    pub fn edges_incident_to(&self, vertex: &Vertex) -> Vec<Edge> {
        self.edges
            .iter()
            .filter_map(|e| e.oriented_from(vertex))
            .collect()
    }

    /// Incident edges sorted to favor pruning: edges leading to
    /// less-visited vertices first, then edges whose destination is closer
    /// (by the probe below) to territory the walk has not covered yet.
    ///
    /// Heuristic only; it improves average pruning, not worst-case.
    #[must_use]
    pub fn ordered_edges_incident_to(&self, vertex: &Vertex, walk: &Walk) -> Vec<Edge> {
        let mut edges = self.edges_incident_to(vertex);
        edges.sort_by_key(|e| {
            (
                walk.visit_count_of(e.end()),
                self.distance_to_uncovered(walk, e.end()),
            )
        });
        edges
    }

    /// Returns true if every graph edge appears in `walk`
    /// (direction-insensitive). The walk may contain extra repeats.
    #[must_use]
    pub fn covers_all_edges(&self, walk: &Walk) -> bool {
        self.edges.iter().all(|e| walk.contains_edge(e))
    }

    /// Sum of weights of graph edges absent from `walk`, an optimistic
    /// lower bound on the cost still required to finish covering.
    #[must_use]
    pub fn uncovered_weight(&self, walk: &Walk) -> u64 {
        self.edges
            .iter()
            .filter(|e| !walk.contains_edge(e))
            .map(Edge::weight)
            .sum()
    }

    /// Depth-first probe from `from`: length in edges to the first edge
    /// absent from both the probe's own visited set and `walk`. Returns 0
    /// when such an edge is directly incident, and also 0 when none is
    /// reachable (no signal either way).
    fn distance_to_uncovered(&self, walk: &Walk, from: &Vertex) -> usize {
        let mut visited: FxHashSet<Edge> = FxHashSet::default();
        self.probe(walk, from, &mut visited).unwrap_or(0)
    }

    fn probe(&self, walk: &Walk, at: &Vertex, visited: &mut FxHashSet<Edge>) -> Option<usize> {
        for edge in self.edges_incident_to(at) {
            if visited.contains(&edge) {
                continue;
            }
            if !walk.contains_edge(&edge) {
                return Some(0);
            }
            visited.insert(edge.clone());
            if let Some(depth) = self.probe(walk, edge.end(), visited) {
                return Some(depth + 1);
            }
        }
        None
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.edges.iter().map(ToString::to_string).collect();
        f.write_str(&rendered.join(" -- "))
    }
}
