//! Error types for coverwalk-core.

use thiserror::Error;

/// Solver error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Vertex label was empty.
    #[error("Vertex label cannot be empty")]
    EmptyLabel,

    /// A graph-definition line did not match the edge grammar.
    #[error("Malformed edge definition: {0}")]
    MalformedEdge(String),

    /// Graph construction was attempted with no edges.
    #[error("Graph must contain at least one edge")]
    EmptyGraph,

    /// An edge shares no endpoint with the rest of the graph.
    #[error("Edge {0} is not connected to any other edge in the graph")]
    DisconnectedEdge(String),

    /// The doubled total edge weight does not fit in a `u64`.
    #[error("Combined edge weight exceeds the supported range")]
    WeightOverflow,

    /// A walk extension was attempted with a non-incident edge.
    #[error("Edge {edge} does not connect to the walk ending at {walk_end}")]
    UnconnectedAppend {
        /// Label of the vertex the walk currently ends at.
        walk_end: String,
        /// Rendering of the rejected edge.
        edge: String,
    },

    /// The starting vertex does not belong to the graph.
    #[error("Vertex {0} is not part of the graph")]
    UnknownVertex(String),

    /// The search completed without recording any covering walk. A
    /// validated graph always admits the walk that doubles every edge
    /// within the initial bound, so for graphs that pass construction this
    /// guards the empty-log path rather than any reachable input.
    #[error("No covering walk exists within the traversal bound")]
    NoSolution,

    /// Worker-pool construction failure.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Configuration layer failure.
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
