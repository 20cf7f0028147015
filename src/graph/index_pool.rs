//! Dense index allocation with LIFO reuse of released slots.
//!
//! An [`IndexPool`] hands out `usize` slots for matrix rows/columns. Released
//! slots go on a stack and are handed out again before any fresh slot, so the
//! assigned set stays packed into `0..next_fresh` without renumbering live
//! entries.

use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;

#[derive(Clone, Debug, Default)]
pub struct IndexPool {
    free: Vec<usize>,
    next_fresh: usize,
}

impl IndexPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a released slot if one exists, else the next never-used slot.
    ///
    /// The second field is `true` when the slot was recycled.
    pub fn acquire(&mut self) -> (usize, bool) {
        if let Some(index) = self.free.pop() {
            return (index, true);
        }
        let index = self.next_fresh;
        self.next_fresh += 1;
        (index, false)
    }

    /// Index the next [`acquire`](Self::acquire) will return, without taking it.
    #[inline]
    pub fn peek(&self) -> usize {
        self.free.last().copied().unwrap_or(self.next_fresh)
    }

    /// Puts `index` back for reuse. The caller guarantees it was acquired
    /// and not already released.
    #[inline]
    pub fn release(&mut self, index: usize) {
        debug_assert!(index < self.next_fresh, "release of never-acquired slot {index}");
        self.free.push(index);
    }

    /// Number of slots currently handed out.
    #[inline]
    pub fn assigned(&self) -> usize {
        self.next_fresh - self.free.len()
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// One past the highest slot ever handed out.
    #[inline]
    pub fn next_fresh(&self) -> usize {
        self.next_fresh
    }

    /// `mask[i]` is `true` when slot `i` (below `next_fresh`) is released.
    pub fn free_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.next_fresh];
        for &index in &self.free {
            if let Some(slot) = mask.get_mut(index) {
                *slot = true;
            }
        }
        mask
    }

    /// Forgets every slot; the next acquire returns 0.
    pub fn clear(&mut self) {
        self.free.clear();
        self.next_fresh = 0;
    }
}

impl DebugInvariants for IndexPool {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "IndexPool invalid");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        let mut seen = vec![false; self.next_fresh];
        for &index in &self.free {
            let Some(slot) = seen.get_mut(index) else {
                return Err(GraphError::IndexPoolCorrupt(format!(
                    "free slot {index} was never handed out (next fresh {})",
                    self.next_fresh
                )));
            };
            if *slot {
                return Err(GraphError::IndexPoolCorrupt(format!(
                    "slot {index} released twice"
                )));
            }
            *slot = true;
        }
        Ok(())
    }
}
