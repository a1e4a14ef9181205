//! Core graph structure — a vertex set plus per-vertex outgoing edge lists.

use std::collections::{btree_set, BTreeMap, BTreeSet};
use std::fmt::Debug;

use crate::types::{Edge, GraphError, GraphResult};

/// A weighted, directed graph stored as adjacency lists.
///
/// Every vertex in the vertex set owns an entry in the adjacency map (possibly
/// an empty list), and every edge target is itself a member of the vertex set.
/// Parallel edges between the same ordered pair are kept in insertion order.
///
/// `Clone` produces a fully independent graph. Moving a graph out with
/// [`Graph::take`] leaves the source empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V, W> {
    /// Outgoing edges, keyed by source vertex.
    adjacency: BTreeMap<V, Vec<Edge<V, W>>>,
    /// All known vertices, including isolated ones.
    vertices: BTreeSet<V>,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            vertices: BTreeSet::new(),
        }
    }
}

impl<V, W> Graph<V, W> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges across all adjacency lists.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Iterate over the vertex set in ascending order.
    pub fn vertices(&self) -> btree_set::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Same as [`Graph::vertices`].
    pub fn iter(&self) -> btree_set::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Iterate over every edge as `(source, edge)`, sources in ascending order
    /// and each source's edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &Edge<V, W>)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(source, list)| list.iter().map(move |edge| (source, edge)))
    }

    /// Remove every edge. The vertex set is untouched.
    pub fn clear_edges(&mut self) {
        for list in self.adjacency.values_mut() {
            list.clear();
        }
    }

    /// Remove every vertex and every edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.vertices.clear();
    }

    /// Move the contents out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Exchange the contents of two graphs.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<V, W> Graph<V, W>
where
    V: Ord + Clone + Debug,
{
    /// Add a vertex with an empty edge list. Returns false if it already existed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if !self.vertices.insert(vertex.clone()) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// True if `vertex` is in the vertex set.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// True if at least one edge `source -> target` exists.
    pub fn contains_edge(&self, source: &V, target: &V) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|list| list.iter().any(|e| e.points_to(target)))
    }

    /// Append an edge `source -> target`. Both endpoints must already exist;
    /// otherwise nothing is recorded.
    pub fn insert_edge(&mut self, source: V, target: V, weight: W) -> GraphResult<()> {
        self.require(&source)?;
        self.require(&target)?;
        self.adjacency
            .entry(source)
            .or_default()
            .push(Edge::new(target, weight));
        Ok(())
    }

    /// Replace the weight of the first edge `source -> target`, or append a new
    /// edge if there is none. Returns the replaced weight.
    pub fn insert_or_assign_edge(
        &mut self,
        source: V,
        target: V,
        weight: W,
    ) -> GraphResult<Option<W>> {
        self.require(&source)?;
        self.require(&target)?;
        Ok(self.assign(source, target, weight))
    }

    /// Append an edge carrying `W::default()`.
    pub fn connect(&mut self, source: V, target: V) -> GraphResult<()>
    where
        W: Default,
    {
        self.insert_edge(source, target, W::default())
    }

    /// Remove a vertex, its own edges, and every edge pointing at it.
    /// Returns false if the vertex was unknown.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if !self.vertices.remove(vertex) {
            log::debug!("remove_vertex: {vertex:?} not found");
            return false;
        }
        self.adjacency.remove(vertex);
        for list in self.adjacency.values_mut() {
            list.retain(|e| !e.points_to(vertex));
        }
        true
    }

    /// Remove the first edge `source -> target` and return its weight.
    /// Later parallel edges stay in place.
    pub fn remove_edge(&mut self, source: &V, target: &V) -> Option<W> {
        let list = self.adjacency.get_mut(source)?;
        let pos = list.iter().position(|e| e.points_to(target))?;
        Some(list.remove(pos).weight)
    }

    /// Drop every edge leaving `vertex`. Returns false if the vertex was unknown.
    pub fn erase_edges_go_from(&mut self, vertex: &V) -> bool {
        if !self.vertices.contains(vertex) {
            log::debug!("erase_edges_go_from: {vertex:?} not found");
            return false;
        }
        if let Some(list) = self.adjacency.get_mut(vertex) {
            list.clear();
        }
        true
    }

    /// Drop every edge arriving at `vertex`. Returns false if the vertex was unknown.
    pub fn erase_edges_go_to(&mut self, vertex: &V) -> bool {
        if !self.vertices.contains(vertex) {
            log::debug!("erase_edges_go_to: {vertex:?} not found");
            return false;
        }
        for list in self.adjacency.values_mut() {
            list.retain(|e| !e.points_to(vertex));
        }
        true
    }

    /// Outgoing edges of `vertex`, in insertion order.
    pub fn edges_from(&self, vertex: &V) -> GraphResult<&[Edge<V, W>]> {
        self.require(vertex)?;
        Ok(self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or_default())
    }

    /// Number of edges leaving `vertex`, parallel edges included.
    pub fn degree_out(&self, vertex: &V) -> GraphResult<usize> {
        Ok(self.edges_from(vertex)?.len())
    }

    /// Number of edges arriving at `vertex` from other vertices. Self-loops on
    /// `vertex` are not counted. Scans every adjacency list.
    pub fn degree_in(&self, vertex: &V) -> GraphResult<usize> {
        self.require(vertex)?;
        Ok(self
            .adjacency
            .iter()
            .filter(|(source, _)| *source != vertex)
            .flat_map(|(_, list)| list)
            .filter(|e| e.points_to(vertex))
            .count())
    }

    /// True if `vertex` has an edge to itself.
    pub fn has_loop(&self, vertex: &V) -> GraphResult<bool> {
        Ok(self.edges_from(vertex)?.iter().any(|e| e.points_to(vertex)))
    }

    /// Weight of the first edge `source -> target`.
    pub fn get_weight(&self, source: &V, target: &V) -> GraphResult<&W> {
        let edges = self.edges_from(source)?;
        self.require(target)?;
        edges
            .iter()
            .find(|e| e.points_to(target))
            .map(|e| &e.weight)
            .ok_or_else(|| GraphError::edge_not_found(source, target))
    }

    /// Destinations of the edges leaving `vertex`, one item per edge.
    pub fn adjacent_vertices<'a>(
        &'a self,
        vertex: &V,
    ) -> GraphResult<impl Iterator<Item = &'a V> + 'a> {
        Ok(self.edges_from(vertex)?.iter().map(|e| &e.target))
    }

    /// Check that the adjacency map and vertex set agree and that no edge
    /// targets an unknown vertex.
    pub fn is_consistent(&self) -> bool {
        self.adjacency.len() == self.vertices.len()
            && self.adjacency.keys().all(|v| self.vertices.contains(v))
            && self
                .adjacency
                .values()
                .flatten()
                .all(|e| self.vertices.contains(&e.target))
    }

    /// Append an edge, declaring both endpoints first.
    pub(crate) fn append_edge(&mut self, source: V, target: V, weight: W) {
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());
        self.adjacency
            .entry(source)
            .or_default()
            .push(Edge::new(target, weight));
    }

    /// Upsert an edge, declaring both endpoints first.
    pub(crate) fn upsert_edge(&mut self, source: V, target: V, weight: W) -> Option<W> {
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());
        self.assign(source, target, weight)
    }

    fn assign(&mut self, source: V, target: V, weight: W) -> Option<W> {
        let list = self.adjacency.entry(source).or_default();
        match list.iter_mut().find(|e| e.points_to(&target)) {
            Some(edge) => Some(std::mem::replace(&mut edge.weight, weight)),
            None => {
                list.push(Edge::new(target, weight));
                None
            }
        }
    }

    fn require(&self, vertex: &V) -> GraphResult<()> {
        if self.vertices.contains(vertex) {
            Ok(())
        } else {
            log::debug!("vertex {vertex:?} not found");
            Err(GraphError::unknown_vertex(vertex))
        }
    }
}

impl<'a, V, W> IntoIterator for &'a Graph<V, W> {
    type Item = &'a V;
    type IntoIter = btree_set::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl<V, W> FromIterator<(V, V, W)> for Graph<V, W>
where
    V: Ord + Clone + Debug,
{
    /// Collect `(source, target, weight)` triples, declaring endpoints as needed.
    fn from_iter<I: IntoIterator<Item = (V, V, W)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<V, W> Extend<(V, V, W)> for Graph<V, W>
where
    V: Ord + Clone + Debug,
{
    fn extend<I: IntoIterator<Item = (V, V, W)>>(&mut self, iter: I) {
        for (source, target, weight) in iter {
            self.append_edge(source, target, weight);
        }
    }
}
