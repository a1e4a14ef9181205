//! adjacency-graph — a weighted, directed, adjacency-list graph container.
//!
//! A [`Graph`] owns a set of vertices and, for each vertex, the ordered list of
//! its outgoing edges. Every failure (unknown vertex, missing edge, unreadable
//! file, malformed record) is returned as a [`GraphError`] and leaves the graph
//! as it was before the call.
//!
//! Graphs persist as line-oriented text, one `<source> <destination> <weight>`
//! record per line; see [`format`].

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{Record, TripleReader, TripleWriter};
pub use graph::{Graph, GraphBuilder};
pub use types::{Edge, GraphError, GraphResult};
