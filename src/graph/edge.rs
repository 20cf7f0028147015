//! `Edge`: the immutable `(source, destination, weight)` triple handed out by
//! [`Graph::edges`](super::Graph::edges).

use std::fmt;

/// Edge weight. Unsigned, so a negative weight cannot be stored.
pub type Weight = u32;

/// A weighted, directed edge between two vertex identities.
///
/// Edges carry no identity of their own: two edges are equal iff source,
/// destination and weight all match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Edge<V> {
    source: V,
    destination: V,
    weight: Weight,
}

impl<V> Edge<V> {
    pub fn new(source: V, destination: V, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    #[inline]
    pub fn source(&self) -> &V {
        &self.source
    }

    #[inline]
    pub fn destination(&self) -> &V {
        &self.destination
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Splits the edge into `(source, destination, weight)`.
    pub fn into_parts(self) -> (V, V, Weight) {
        (self.source, self.destination, self.weight)
    }
}

impl<V> From<(V, V, Weight)> for Edge<V> {
    fn from((source, destination, weight): (V, V, Weight)) -> Self {
        Self::new(source, destination, weight)
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.destination, self.weight)
    }
}
