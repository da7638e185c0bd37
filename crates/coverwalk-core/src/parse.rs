//! Text parsing for graph definitions.
//!
//! A definition is a sequence of lines, each either empty or a single edge:
//! two single-character vertex labels with optional comma separators and a
//! non-negative integer weight (`AB3`, `A,B,3`, and `AB,3` are equivalent).

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Edge, Graph, Vertex};

fn edge_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z]),?([A-Za-z]),?([0-9]+)$").expect("edge pattern is valid")
    })
}

/// Returns true if `line` is a well-formed edge definition.
#[must_use]
pub fn is_valid_edge_line(line: &str) -> bool {
    edge_pattern().is_match(line.trim())
}

/// Parses a single edge definition line.
///
/// # Errors
///
/// Returns `Error::MalformedEdge` if the line does not match the edge
/// grammar or the weight does not fit in a `u64`.
///
/// # Example
///
/// ```rust
/// use coverwalk_core::parse_edge;
///
/// let edge = parse_edge("A,B,12").unwrap();
/// assert_eq!(edge.weight(), 12);
/// assert!(parse_edge("AB").is_err());
/// ```
pub fn parse_edge(line: &str) -> Result<Edge> {
    let trimmed = line.trim();
    let caps = edge_pattern()
        .captures(trimmed)
        .ok_or_else(|| Error::MalformedEdge(trimmed.to_string()))?;

    let weight: u64 = caps[3]
        .parse()
        .map_err(|_| Error::MalformedEdge(trimmed.to_string()))?;

    Ok(Edge::new(
        Vertex::new(&caps[1])?,
        Vertex::new(&caps[2])?,
        weight,
    ))
}

/// Parses a whole graph definition.
///
/// Lines that do not match the edge grammar are skipped rather than
/// reported, so definitions may carry blank separator lines or stray text;
/// the surviving edges still have to form a valid [`Graph`].
///
/// # Errors
///
/// Returns a graph-construction error if the parsed edges are empty or
/// fail the connectivity checks.
pub fn parse_graph(text: &str) -> Result<Graph> {
    let edges: Vec<Edge> = text
        .lines()
        .map(str::trim)
        .filter(|line| is_valid_edge_line(line))
        .map(parse_edge)
        .collect::<Result<_>>()?;
    Graph::new(edges)
}
