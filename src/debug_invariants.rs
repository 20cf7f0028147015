//! Structural self-checks for the graph's building blocks.
//!
//! [`BijectiveIndex`](crate::bijection::BijectiveIndex),
//! [`IndexPool`](crate::graph::index_pool::IndexPool) and
//! [`MatrixDigraph`](crate::graph::MatrixDigraph) implement
//! [`DebugInvariants`]. `MatrixDigraph` runs its check after every matrix
//! resize and vertex removal through [`debug_invariants!`](crate::debug_invariants).

use crate::graph_error::GraphError;

/// A structure that can verify its own internal consistency.
pub trait DebugInvariants {
    /// Panics on the first broken invariant when checks are enabled.
    fn debug_assert_invariants(&self);
    /// Returns the first broken invariant as a [`GraphError`].
    fn validate_invariants(&self) -> Result<(), GraphError>;
}

/// Runs a `validate_invariants()`-style expression and panics with the given
/// context if it returns `Err`.
///
/// Compiled in under `debug_assertions` or the `strict-invariants` feature;
/// otherwise the expression is not evaluated.
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $($context:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        if let Err(e) = $check {
            panic!(concat!("[matrix-digraph invariants] ", $($context)*, ": {}"), e);
        }
    };
}
