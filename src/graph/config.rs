//! Sizing policy for [`MatrixDigraph`](super::MatrixDigraph).

use super::matrix::WeightMatrix;
use crate::graph_error::GraphError;

/// Largest accepted [`GraphConfig::growth_factor`].
pub const MAX_GROWTH_FACTOR: f64 = 4.0;

/// Smallest accepted [`GraphConfig::load_factor`].
pub const MIN_LOAD_FACTOR: f64 = 0.1;

/// Initial matrix dimension, growth factor and load threshold.
///
/// Deserializing a partial document fills the missing fields from
/// [`GraphConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Matrix dimension on construction and after `clear`.
    pub initial_capacity: usize,
    /// Multiplier applied to the dimension on every resize, in
    /// `(1, MAX_GROWTH_FACTOR]`.
    pub growth_factor: f64,
    /// Fraction of the dimension that may be assigned before the next
    /// insertion triggers a resize, in `[MIN_LOAD_FACTOR, 1]`.
    pub load_factor: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 10,
            growth_factor: 1.5,
            load_factor: 0.5,
        }
    }
}

impl GraphConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks every field is in range.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.initial_capacity == 0 {
            return Err(GraphError::InvalidConfig("initial_capacity must be at least 1"));
        }
        if !WeightMatrix::addressable(self.initial_capacity) {
            return Err(GraphError::InvalidConfig(
                "initial_capacity is too large to allocate",
            ));
        }
        if !(self.growth_factor > 1.0 && self.growth_factor <= MAX_GROWTH_FACTOR) {
            return Err(GraphError::InvalidConfig(
                "growth_factor must lie in (1, MAX_GROWTH_FACTOR]",
            ));
        }
        if !(self.load_factor >= MIN_LOAD_FACTOR && self.load_factor <= 1.0) {
            return Err(GraphError::InvalidConfig(
                "load_factor must lie in [MIN_LOAD_FACTOR, 1]",
            ));
        }
        Ok(())
    }

    /// Largest assigned-vertex count that does not force a resize at `capacity`.
    #[inline]
    pub(crate) fn load_threshold(&self, capacity: usize) -> usize {
        (capacity as f64 * self.load_factor).floor() as usize
    }

    /// Dimension after one resize step from `capacity`, always strictly
    /// larger. `None` once the grown matrix could no longer be allocated.
    pub(crate) fn grown_capacity(&self, capacity: usize) -> Option<usize> {
        let scaled = (capacity as f64 * self.growth_factor).ceil();
        if !(scaled < usize::MAX as f64) {
            return None;
        }
        let grown = (scaled as usize).max(capacity.checked_add(1)?);
        WeightMatrix::addressable(grown).then_some(grown)
    }
}
