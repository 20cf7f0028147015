//! Two-way key/value table with uniqueness on both sides.
//!
//! [`BijectiveIndex`] pairs every key with exactly one value and every value
//! with exactly one key. Both directions are backed by hash maps, so lookups
//! either way are O(1). The maps are private: `add`, the `remove_by_*`
//! methods and `clear` are the only mutators, and each updates both sides
//! before returning.
//!
//! [`MatrixDigraph`](crate::graph::MatrixDigraph) uses it to translate vertex
//! identities into dense matrix indices and back.

use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use hashbrown::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// A one-to-one correspondence between keys `K` and values `I`.
#[derive(Clone, Debug)]
pub struct BijectiveIndex<K, I> {
    forward: HashMap<K, I>,
    backward: HashMap<I, K>,
}

impl<K, I> Default for BijectiveIndex<K, I> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            backward: HashMap::new(),
        }
    }
}

impl<K, I> BijectiveIndex<K, I>
where
    K: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with room for `capacity` pairs on each side.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: HashMap::with_capacity(capacity),
            backward: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts `(key, value)` if neither side is already present.
    ///
    /// Returns `false` and leaves the table untouched when either the key or
    /// the value collides with an existing pair.
    ///
    /// # Example
    /// ```rust
    /// use matrix_digraph::bijection::BijectiveIndex;
    /// let mut table = BijectiveIndex::new();
    /// assert!(table.add("a", 0));
    /// assert!(!table.add("a", 1));
    /// assert!(!table.add("b", 0));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn add(&mut self, key: K, value: I) -> bool {
        if self.forward.contains_key(&key) || self.backward.contains_key(&value) {
            return false;
        }
        self.forward.insert(key.clone(), value.clone());
        self.backward.insert(value, key);
        true
    }

    /// Returns the value paired with `key`.
    #[inline]
    pub fn get_value(&self, key: &K) -> Option<&I> {
        self.forward.get(key)
    }

    /// Returns the key paired with `value`.
    #[inline]
    pub fn get_key(&self, value: &I) -> Option<&K> {
        self.backward.get(value)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }

    #[inline]
    pub fn contains_value(&self, value: &I) -> bool {
        self.backward.contains_key(value)
    }

    /// Snapshot of every key. Later mutation of the table does not affect it.
    ///
    /// Snapshots are `std::collections::HashSet`, the set type
    /// [`Graph::vertices`](crate::graph::Graph::vertices) returns; the
    /// `hashbrown` maps behind the table are not exposed.
    pub fn key_set(&self) -> HashSet<K> {
        self.forward.keys().cloned().collect()
    }

    /// Snapshot of every value. Later mutation of the table does not affect it.
    pub fn value_set(&self) -> HashSet<I> {
        self.backward.keys().cloned().collect()
    }

    /// Borrowed iterator over keys, in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.forward.keys()
    }

    /// Borrowed iterator over values, in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &I> {
        self.backward.keys()
    }

    /// Borrowed iterator over `(key, value)` pairs, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &I)> {
        self.forward.iter()
    }

    /// Removes the pair whose key is `key`.
    pub fn remove_by_key(&mut self, key: &K) -> bool {
        match self.forward.remove(key) {
            Some(value) => {
                self.backward.remove(&value);
                true
            }
            None => false,
        }
    }

    /// Removes the pair whose value is `value`.
    pub fn remove_by_value(&mut self, value: &I) -> bool {
        match self.backward.remove(value) {
            Some(key) => {
                self.forward.remove(&key);
                true
            }
            None => false,
        }
    }

    /// Removes every pair.
    pub fn clear(&mut self) {
        self.forward.clear();
        self.backward.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Collects pairs, dropping any pair that collides with an earlier one.
impl<K, I> FromIterator<(K, I)> for BijectiveIndex<K, I>
where
    K: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut table = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            let _ = table.add(key, value);
        }
        table
    }
}

/// Prints `key - value` pairs separated by `, `.
impl<K, I> fmt::Display for BijectiveIndex<K, I>
where
    K: fmt::Display,
    I: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, (key, value)) in self.forward.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key} - {value}")?;
        }
        Ok(())
    }
}

impl<K, I> DebugInvariants for BijectiveIndex<K, I>
where
    K: Eq + Hash + Clone + fmt::Debug,
    I: Eq + Hash + Clone + fmt::Debug,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "BijectiveIndex invalid");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        if self.forward.len() != self.backward.len() {
            return Err(GraphError::BijectionMismatch(format!(
                "forward holds {} pairs, backward holds {}",
                self.forward.len(),
                self.backward.len()
            )));
        }
        for (key, value) in &self.forward {
            if self.backward.get(value) != Some(key) {
                return Err(GraphError::BijectionMismatch(format!(
                    "{key:?} -> {value:?} has no mirror"
                )));
            }
        }
        Ok(())
    }
}
