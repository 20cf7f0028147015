//! # matrix-digraph
//!
//! matrix-digraph is a weighted, directed graph stored as a dense adjacency
//! matrix. Vertex identities of any hashable type are translated into dense
//! matrix indices through a [`BijectiveIndex`](bijection::BijectiveIndex),
//! and the indices of removed vertices are recycled so the matrix never
//! fragments and live vertices are never renumbered.
//!
//! ## Features
//! - O(1) edge insertion, removal, existence and weight lookup
//! - Two-way identity/index table with uniqueness enforced on both sides
//! - Amortized matrix growth (default ×1.5 once half full) that keeps every
//!   existing cell in place
//! - LIFO reuse of freed indices, with rows and columns wiped on removal
//! - Boolean capability API ([`Graph`](graph::Graph)) plus `try_*` methods
//!   returning [`GraphError`](graph_error::GraphError) reasons
//! - [`DebugInvariants`] validators, enforced after resizes and removals in
//!   debug builds or with the `strict-invariants` feature
//!
//! ## Weights
//! Weights are [`u32`]; a negative weight cannot be stored. Absence of an
//! edge is a `None` cell, never a reserved weight value, so zero is an
//! ordinary weight.
//!
//! ## Usage
//! ```rust
//! use matrix_digraph::prelude::*;
//!
//! let mut g = MatrixDigraph::new();
//! g.add_vertices(["A", "B", "C"]);
//! g.add_edge(&"A", &"B", 15);
//! g.add_edge(&"B", &"C", 2);
//! assert_eq!(g.edge_size(), 2);
//!
//! g.remove_vertex(&"B");
//! assert_eq!(g.edge_size(), 0);
//! assert!(g.add_vertex("D")); // takes over B's matrix slot, with no edges
//! assert!(!g.contains_edge(&"A", &"D"));
//! ```
//!
//! ## Logging
//! The crate logs through the [`log`] facade: `debug` on matrix growth and
//! `clear`, `trace` on every index assignment and vertex removal. Install any
//! `log` backend to see them.

pub mod bijection;
pub mod debug_invariants;
pub mod graph;
pub mod graph_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::bijection::BijectiveIndex;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph::{Edge, Graph, GraphConfig, MatrixDigraph, Weight};
    pub use crate::graph_error::GraphError;
}
