//! Fluent API for building Graph instances.

use std::fmt::Debug;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Unlike [`Graph::insert_edge`], [`GraphBuilder::edge`] declares missing
/// endpoints on the fly. Parallel edges are kept.
pub struct GraphBuilder<V, W> {
    graph: Graph<V, W>,
}

impl<V, W> GraphBuilder<V, W>
where
    V: Ord + Clone + Debug,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Declare a vertex, possibly isolated.
    pub fn vertex(&mut self, vertex: V) -> &mut Self {
        self.graph.add_vertex(vertex);
        self
    }

    /// Declare several vertices at once.
    pub fn vertices(&mut self, vertices: impl IntoIterator<Item = V>) -> &mut Self {
        for vertex in vertices {
            self.graph.add_vertex(vertex);
        }
        self
    }

    /// Add an edge `source -> target`.
    pub fn edge(&mut self, source: V, target: V, weight: W) -> &mut Self {
        self.graph.append_edge(source, target, weight);
        self
    }

    /// Add a self-loop on `vertex`.
    pub fn self_loop(&mut self, vertex: V, weight: W) -> &mut Self {
        self.graph.append_edge(vertex.clone(), vertex, weight);
        self
    }

    /// Build the final Graph.
    pub fn build(&mut self) -> Graph<V, W> {
        self.graph.take()
    }
}

impl<V, W> Default for GraphBuilder<V, W>
where
    V: Ord + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
