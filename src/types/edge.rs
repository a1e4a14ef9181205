//! The edge record stored in a source vertex's adjacency list.

use std::fmt;

use serde::Serialize;

/// A directed, weighted edge as seen from its source vertex.
///
/// The source is implied by the adjacency list that owns the edge, so only
/// the destination and the weight are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<V, W> {
    /// Destination vertex.
    pub target: V,
    /// Payload carried by the edge.
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    /// Create a new edge pointing at `target`.
    pub fn new(target: V, weight: W) -> Self {
        Self { target, weight }
    }

    /// True if this edge points at `vertex`.
    pub fn points_to(&self, vertex: &V) -> bool
    where
        V: PartialEq,
    {
        self.target == *vertex
    }

    /// Split the edge into its `(target, weight)` pair.
    pub fn into_parts(self) -> (V, W) {
        (self.target, self.weight)
    }
}

impl<V, W> From<(V, W)> for Edge<V, W> {
    fn from((target, weight): (V, W)) -> Self {
        Self::new(target, weight)
    }
}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for Edge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-> {} ({})", self.target, self.weight)
    }
}
