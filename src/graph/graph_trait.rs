//! Core capability trait for weighted directed graphs.
//!
//! This module defines the [`Graph`] trait: vertex and edge CRUD plus size
//! queries and detached snapshots. Failures of the "unknown vertex",
//! "missing edge" and "duplicate" kind are reported through `bool` returns;
//! implementations are free to offer richer `try_*` variants on top.

use std::collections::HashSet;
use std::hash::Hash;

use super::edge::{Edge, Weight};

/// Weighted directed graph with unique edges per ordered vertex pair.
///
/// # Associated Types
/// - `Vertex`: the caller-facing vertex identity.
///
/// # Provided Methods
/// - [`contains_edge`](Graph::contains_edge) via [`edge_weight`](Graph::edge_weight)
/// - [`is_empty`](Graph::is_empty) via [`vertex_size`](Graph::vertex_size)
/// - [`add_vertices`](Graph::add_vertices) bulk insertion
pub trait Graph {
    type Vertex: Clone + Eq + Hash;

    /// Adds `vertex`; `false` if it is already present.
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// Removes `vertex` and every edge touching it; `false` if it is unknown.
    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> bool;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Number of vertices.
    fn vertex_size(&self) -> usize;

    /// Detached snapshot of every vertex.
    fn vertices(&self) -> HashSet<Self::Vertex>;

    /// Adds `source → destination` with `weight`.
    ///
    /// `false` if either endpoint is unknown or the edge already exists.
    /// An existing edge is never overwritten.
    fn add_edge(
        &mut self,
        source: &Self::Vertex,
        destination: &Self::Vertex,
        weight: Weight,
    ) -> bool;

    /// Removes `source → destination`; `false` if there is no such edge.
    fn remove_edge(&mut self, source: &Self::Vertex, destination: &Self::Vertex) -> bool;

    /// Weight of `source → destination`, or `None` if either endpoint is
    /// unknown or no such edge exists.
    fn edge_weight(&self, source: &Self::Vertex, destination: &Self::Vertex) -> Option<Weight>;

    /// Number of edges.
    fn edge_size(&self) -> usize;

    /// Detached snapshot of every edge.
    fn edges(&self) -> HashSet<Edge<Self::Vertex>>;

    /// Removes every vertex and edge.
    fn clear(&mut self);

    fn contains_edge(&self, source: &Self::Vertex, destination: &Self::Vertex) -> bool {
        self.edge_weight(source, destination).is_some()
    }

    fn is_empty(&self) -> bool {
        self.vertex_size() == 0
    }

    /// Adds every vertex from `vertices`; returns how many were new.
    fn add_vertices<I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = Self::Vertex>,
        Self: Sized,
    {
        vertices
            .into_iter()
            .map(|v| self.add_vertex(v))
            .filter(|&added| added)
            .count()
    }
}
