//! In-memory graph operations — the core data structure.

pub mod adjacency_graph;
pub mod builder;

pub use adjacency_graph::Graph;
pub use builder::GraphBuilder;
