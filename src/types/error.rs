//! Error types for the maze-graph library.

use thiserror::Error;

/// All errors that can occur in the maze-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex with this ID is already in the graph.
    #[error("Vertex {0} already exists")]
    DuplicateVertex(String),

    /// Vertex not found by ID.
    #[error("Vertex {0} not found")]
    UnknownVertex(String),

    /// Token outside the n/s/e/w alphabet, or not an exit of the current room.
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    /// Exploration needed a random move from a room with no exits.
    #[error("Vertex {0} has no exits")]
    NoExits(String),

    /// Map file declares no rooms.
    #[error("Map contains no rooms")]
    EmptyMap,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Build an `UnknownVertex` error from any displayable vertex ID.
    pub fn unknown_vertex(id: &impl std::fmt::Display) -> Self {
        Self::UnknownVertex(id.to_string())
    }

    /// Build a `DuplicateVertex` error from any displayable vertex ID.
    pub fn duplicate_vertex(id: &impl std::fmt::Display) -> Self {
        Self::DuplicateVertex(id.to_string())
    }
}

/// Convenience result type for maze-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
