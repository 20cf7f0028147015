//! Top-level module for the weighted digraph.
//!
//! It includes:
//! - The [`Graph`] capability trait and the [`Edge`] value object
//! - [`MatrixDigraph`], the adjacency-matrix implementation
//! - [`GraphConfig`] sizing policy
//! - The dense [`WeightMatrix`](matrix::WeightMatrix) and
//!   [`IndexPool`](index_pool::IndexPool) building blocks
//!
//! Most users will interact with the `Graph` trait and `MatrixDigraph`.

pub mod config;
pub mod edge;
pub mod graph_trait;
pub mod index_pool;
pub mod matrix;
pub mod matrix_digraph;

pub use config::GraphConfig;
pub use edge::{Edge, Weight};
pub use graph_trait::Graph;
pub use matrix_digraph::MatrixDigraph;
