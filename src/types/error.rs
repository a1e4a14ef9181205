//! Error types for the adjacency-graph library.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur in the adjacency-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An operation referenced a vertex that is not in the vertex set.
    #[error("Vertex {0} not found")]
    UnknownVertex(String),

    /// Both endpoints exist but no edge connects them.
    #[error("No edge from {from} to {to}")]
    EdgeNotFound { from: String, to: String },

    /// A file could not be opened for reading or writing.
    #[error("Cannot open {}: {source}", .path.display())]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted line could not be parsed into a record.
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// IO error on an already opened stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Build a [`GraphError::UnknownVertex`] from any debuggable vertex.
    pub fn unknown_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::UnknownVertex(format!("{vertex:?}"))
    }

    /// Build a [`GraphError::EdgeNotFound`] from any debuggable endpoints.
    pub fn edge_not_found<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Self::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
