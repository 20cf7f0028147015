//! Adjacency-matrix implementation of the [`Graph`] trait.
//!
//! [`MatrixDigraph`] keeps three pieces of state that move together:
//! - a [`BijectiveIndex`] translating vertex identities to dense indices,
//! - a square [`WeightMatrix`] addressed by those indices,
//! - an [`IndexPool`] recycling the indices of removed vertices.
//!
//! Edge lookup, insertion and removal are O(1) after the two hash lookups.
//! Removing a vertex clears its row and column, so a recycled index always
//! starts with no edges. The matrix grows by [`GraphConfig::growth_factor`]
//! once the assigned-vertex count passes [`GraphConfig::load_factor`] of the
//! current dimension; growth never moves an existing cell.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

use super::config::GraphConfig;
use super::edge::{Edge, Weight};
use super::graph_trait::Graph;
use super::index_pool::IndexPool;
use super::matrix::WeightMatrix;
use crate::bijection::BijectiveIndex;
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;

/// A weighted digraph stored as a dense adjacency matrix.
///
/// # Type Parameters
/// - `V`: vertex identity. Must be hashable and cloneable; `Debug` is used
///   to render identities in [`GraphError`] messages.
///
/// # Example
/// ```rust
/// use matrix_digraph::prelude::*;
///
/// let mut g = MatrixDigraph::new();
/// g.add_vertex("A");
/// g.add_vertex("B");
/// assert!(g.add_edge(&"A", &"B", 15));
/// assert!(g.contains_edge(&"A", &"B"));
/// assert!(!g.contains_edge(&"B", &"A"));
/// assert_eq!(g.edge_weight(&"A", &"B"), Some(15));
/// assert_eq!(g.edge_size(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MatrixDigraph<V> {
    config: GraphConfig,
    identity_table: BijectiveIndex<V, usize>,
    matrix: WeightMatrix,
    free_indices: IndexPool,
    edge_count: usize,
}

impl<V> Default for MatrixDigraph<V> {
    fn default() -> Self {
        let config = GraphConfig::default();
        Self {
            identity_table: BijectiveIndex::default(),
            matrix: WeightMatrix::new(config.initial_capacity),
            free_indices: IndexPool::new(),
            edge_count: 0,
            config,
        }
    }
}

impl<V> MatrixDigraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Creates an empty graph with [`GraphConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph whose matrix starts at `capacity` (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let config = GraphConfig::default().with_initial_capacity(capacity.max(1));
        Self::build(config)
    }

    /// Creates an empty graph with a caller-supplied sizing policy.
    pub fn with_config(config: GraphConfig) -> Result<Self, GraphError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GraphConfig) -> Self {
        Self {
            identity_table: BijectiveIndex::with_capacity(config.initial_capacity),
            matrix: WeightMatrix::new(config.initial_capacity),
            free_indices: IndexPool::new(),
            edge_count: 0,
            config,
        }
    }

    /// Builds a graph from `(source, destination, weight)` triples, adding
    /// endpoints as needed. A repeated pair keeps its first weight.
    ///
    /// # Example
    /// ```rust
    /// use matrix_digraph::prelude::*;
    /// let g = MatrixDigraph::from_edges([(1, 2, 4), (2, 3, 1), (1, 2, 9)]);
    /// assert_eq!(g.vertex_size(), 3);
    /// assert_eq!(g.edge_size(), 2);
    /// assert_eq!(g.edge_weight(&1, &2), Some(4));
    /// ```
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, Weight)>,
    {
        let mut graph = Self::new();
        for (source, destination, weight) in edges {
            graph.add_vertex(source.clone());
            graph.add_vertex(destination.clone());
            let _ = graph.add_edge(&source, &destination, weight);
        }
        graph
    }

    #[inline]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Current matrix dimension.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.matrix.dimension()
    }

    /// Dense index currently assigned to `vertex`.
    #[inline]
    pub fn vertex_index(&self, vertex: &V) -> Option<usize> {
        self.identity_table.get_value(vertex).copied()
    }

    /// Number of released indices waiting for reuse.
    #[inline]
    pub fn free_index_count(&self) -> usize {
        self.free_indices.free_len()
    }

    #[inline]
    fn resolve(&self, source: &V, destination: &V) -> Option<(usize, usize)> {
        Some((self.vertex_index(source)?, self.vertex_index(destination)?))
    }

    fn try_resolve(&self, source: &V, destination: &V) -> Result<(usize, usize), GraphError> {
        let row = self
            .vertex_index(source)
            .ok_or_else(|| GraphError::unknown(source))?;
        let column = self
            .vertex_index(destination)
            .ok_or_else(|| GraphError::unknown(destination))?;
        Ok((row, column))
    }

    fn needs_growth(&self) -> bool {
        let capacity = self.matrix.dimension();
        self.identity_table.len() > self.config.load_threshold(capacity)
            || self.free_indices.peek() >= capacity
    }

    fn grow(&mut self) -> Result<(), GraphError> {
        let old = self.matrix.dimension();
        let new = self
            .config
            .grown_capacity(old)
            .ok_or(GraphError::CapacityExhausted { dimension: old })?;
        log::debug!(
            "growing adjacency matrix {old} -> {new} ({} vertices assigned)",
            self.identity_table.len()
        );
        self.matrix.grow_to(new);
        crate::debug_invariants!(self.validate_invariants(), "MatrixDigraph invalid after resize");
        Ok(())
    }

    /// Adds `source → destination`, reporting why it was refused.
    pub fn try_add_edge(
        &mut self,
        source: &V,
        destination: &V,
        weight: Weight,
    ) -> Result<(), GraphError> {
        let (row, column) = self.try_resolve(source, destination)?;
        if self.matrix.get(row, column).is_some() {
            return Err(GraphError::duplicate(source, destination));
        }
        self.matrix.set(row, column, weight);
        self.edge_count += 1;
        Ok(())
    }

    /// Removes `source → destination` and returns its weight.
    pub fn try_remove_edge(&mut self, source: &V, destination: &V) -> Result<Weight, GraphError> {
        let (row, column) = self.try_resolve(source, destination)?;
        let weight = self
            .matrix
            .take(row, column)
            .ok_or_else(|| GraphError::missing(source, destination))?;
        self.edge_count -= 1;
        Ok(weight)
    }

    /// Weight of `source → destination`, distinguishing an unknown endpoint
    /// from a missing edge.
    pub fn try_edge_weight(&self, source: &V, destination: &V) -> Result<Weight, GraphError> {
        let (row, column) = self.try_resolve(source, destination)?;
        self.matrix
            .get(row, column)
            .ok_or_else(|| GraphError::missing(source, destination))
    }

    /// Removes `vertex` and returns the number of incident edges dropped
    /// with it (a self loop counts once).
    pub fn try_remove_vertex(&mut self, vertex: &V) -> Result<usize, GraphError> {
        let index = self
            .vertex_index(vertex)
            .ok_or_else(|| GraphError::unknown(vertex))?;

        let cleared = self.matrix.clear_row(index) + self.matrix.clear_column(index);
        self.edge_count -= cleared;
        self.identity_table.remove_by_key(vertex);
        self.free_indices.release(index);
        log::trace!("removed vertex {vertex:?} at index {index}, {cleared} incident edges cleared");

        crate::debug_invariants!(
            self.validate_invariants(),
            "MatrixDigraph invalid after vertex removal"
        );
        Ok(cleared)
    }
}

impl<V> Graph for MatrixDigraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Vertex = V;

    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.identity_table.contains_key(&vertex) {
            return false;
        }
        while self.needs_growth() {
            if let Err(e) = self.grow() {
                log::warn!("vertex {vertex:?} refused: {e}");
                return false;
            }
        }
        let (index, recycled) = self.free_indices.acquire();
        log::trace!(
            "vertex {vertex:?} -> index {index} ({})",
            if recycled { "recycled" } else { "fresh" }
        );
        self.identity_table.add(vertex, index)
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        self.try_remove_vertex(vertex).is_ok()
    }

    #[inline]
    fn contains_vertex(&self, vertex: &V) -> bool {
        self.identity_table.contains_key(vertex)
    }

    #[inline]
    fn vertex_size(&self) -> usize {
        self.identity_table.len()
    }

    fn vertices(&self) -> HashSet<V> {
        self.identity_table.key_set()
    }

    fn add_edge(&mut self, source: &V, destination: &V, weight: Weight) -> bool {
        self.try_add_edge(source, destination, weight).is_ok()
    }

    fn remove_edge(&mut self, source: &V, destination: &V) -> bool {
        self.try_remove_edge(source, destination).is_ok()
    }

    #[inline]
    fn edge_weight(&self, source: &V, destination: &V) -> Option<Weight> {
        let (row, column) = self.resolve(source, destination)?;
        self.matrix.get(row, column)
    }

    #[inline]
    fn edge_size(&self) -> usize {
        self.edge_count
    }

    /// Scans the sub-matrix of assigned indices; O(`vertex_size`²).
    fn edges(&self) -> HashSet<Edge<V>> {
        let assigned: Vec<(usize, &V)> = self
            .identity_table
            .iter()
            .map(|(vertex, &index)| (index, vertex))
            .collect();
        assigned
            .iter()
            .cartesian_product(assigned.iter())
            .filter_map(|(&(row, source), &(column, destination))| {
                self.matrix
                    .get(row, column)
                    .map(|weight| Edge::new(source.clone(), destination.clone(), weight))
            })
            .collect()
    }

    fn clear(&mut self) {
        log::debug!(
            "clearing graph: {} vertices, {} edges, capacity {} -> {}",
            self.identity_table.len(),
            self.edge_count,
            self.matrix.dimension(),
            self.config.initial_capacity
        );
        self.matrix.reset(self.config.initial_capacity);
        self.free_indices.clear();
        self.identity_table.clear();
        self.edge_count = 0;
    }
}

impl<V> DebugInvariants for MatrixDigraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "MatrixDigraph invalid");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        self.identity_table.validate_invariants()?;
        self.free_indices.validate_invariants()?;

        // 1) pool and table agree on how many slots are live
        if self.free_indices.assigned() != self.identity_table.len() {
            return Err(GraphError::IndexPoolCorrupt(format!(
                "pool reports {} assigned slots, table holds {} vertices",
                self.free_indices.assigned(),
                self.identity_table.len()
            )));
        }

        // 2) every assigned index is addressable, handed out, and not free
        let dimension = self.matrix.dimension();
        let free = self.free_indices.free_mask();
        let mut assigned = vec![false; dimension];
        for (vertex, &index) in self.identity_table.iter() {
            if index >= dimension {
                return Err(GraphError::MatrixOutOfBounds { index, dimension });
            }
            if free.get(index).is_none_or(|&is_free| is_free) {
                return Err(GraphError::IndexPoolCorrupt(format!(
                    "{vertex:?} holds index {index}, which the pool does not consider assigned"
                )));
            }
            assigned[index] = true;
        }

        // 3) only assigned rows/columns hold edges, and the counter matches
        let mut counted = 0;
        for (row, column, _) in self.matrix.occupied() {
            if !assigned[row] || !assigned[column] {
                return Err(GraphError::StaleCell { row, column });
            }
            counted += 1;
        }
        if counted != self.edge_count {
            return Err(GraphError::EdgeCountMismatch {
                counted,
                recorded: self.edge_count,
            });
        }
        Ok(())
    }
}
