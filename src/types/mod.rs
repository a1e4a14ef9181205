//! All data types for the adjacency-graph library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Token that starts a comment line in the triple format.
pub const COMMENT_PREFIX: char = '#';

/// Token count of an edge record: source, destination, weight.
pub const EDGE_RECORD_TOKENS: usize = 3;

/// Token count of a vertex declaration record.
pub const VERTEX_RECORD_TOKENS: usize = 1;
