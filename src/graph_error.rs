//! GraphError: Unified error type for matrix-digraph public APIs
//!
//! The graph capability contract reports not-found and duplicate conditions
//! with plain `bool` returns. The inherent `try_*` methods and the invariant
//! validators use this type when a caller needs the reason.

use thiserror::Error;

/// Unified error type for matrix-digraph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The vertex has no assigned index in the graph.
    #[error("unknown vertex `{0}`")]
    UnknownVertex(String),
    /// An edge already occupies the `(source, destination)` cell.
    #[error("edge `{from}` -> `{to}` already exists")]
    DuplicateEdge { from: String, to: String },
    /// No edge occupies the `(source, destination)` cell.
    #[error("no edge `{from}` -> `{to}`")]
    MissingEdge { from: String, to: String },
    /// A [`GraphConfig`](crate::graph::config::GraphConfig) field is out of range.
    #[error("invalid graph configuration: {0}")]
    InvalidConfig(&'static str),
    /// The forward and backward maps of a bijection disagree.
    #[error("bijection mismatch: {0}")]
    BijectionMismatch(String),
    /// The free-index pool disagrees with the assigned index set.
    #[error("index pool corrupt: {0}")]
    IndexPoolCorrupt(String),
    /// An assigned index cannot be addressed by the matrix.
    #[error("index {index} out of bounds for matrix dimension {dimension}")]
    MatrixOutOfBounds { index: usize, dimension: usize },
    /// The maintained edge counter disagrees with the matrix contents.
    #[error("edge count mismatch: matrix holds {counted}, counter says {recorded}")]
    EdgeCountMismatch { counted: usize, recorded: usize },
    /// Growing the matrix past `dimension` would overflow its allocation.
    #[error("adjacency matrix cannot grow past dimension {dimension}")]
    CapacityExhausted { dimension: usize },
    /// A cell on an unassigned row or column still holds a weight.
    #[error("stale edge at cell ({row}, {column}) outside the assigned index set")]
    StaleCell { row: usize, column: usize },
}

impl GraphError {
    pub(crate) fn unknown<V: std::fmt::Debug>(v: &V) -> Self {
        GraphError::UnknownVertex(format!("{v:?}"))
    }

    pub(crate) fn duplicate<V: std::fmt::Debug>(source: &V, destination: &V) -> Self {
        GraphError::DuplicateEdge {
            from: format!("{source:?}"),
            to: format!("{destination:?}"),
        }
    }

    pub(crate) fn missing<V: std::fmt::Debug>(source: &V, destination: &V) -> Self {
        GraphError::MissingEdge {
            from: format!("{source:?}"),
            to: format!("{destination:?}"),
        }
    }
}
