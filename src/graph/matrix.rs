//! Dense square matrix of optional edge weights.
//!
//! A cell holds `Some(weight)` when an edge is present and `None` otherwise,
//! so absence is never encoded as a magic weight. Rows are stored as separate
//! vectors; growing the matrix extends every row in place and appends new
//! empty rows, leaving every existing cell at its address.

use super::edge::Weight;

/// One matrix cell: `None` means "no edge".
pub type Cell = Option<Weight>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightMatrix {
    rows: Vec<Vec<Cell>>,
}

impl WeightMatrix {
    /// Creates a `dimension × dimension` matrix with every cell empty.
    pub fn new(dimension: usize) -> Self {
        Self {
            rows: vec![vec![None; dimension]; dimension],
        }
    }

    /// Whether a `dimension × dimension` matrix fits in one allocation.
    pub(crate) fn addressable(dimension: usize) -> bool {
        dimension
            .checked_mul(dimension)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<Cell>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize)
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.rows[row][column]
    }

    /// Stores `weight` at `(row, column)` and returns the previous cell.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, weight: Weight) -> Cell {
        self.rows[row][column].replace(weight)
    }

    /// Empties `(row, column)` and returns what it held.
    #[inline]
    pub fn take(&mut self, row: usize, column: usize) -> Cell {
        self.rows[row][column].take()
    }

    /// Empties every cell of `row`; returns how many held an edge.
    pub fn clear_row(&mut self, row: usize) -> usize {
        self.rows[row]
            .iter_mut()
            .filter_map(Option::take)
            .count()
    }

    /// Empties every cell of `column`; returns how many held an edge.
    pub fn clear_column(&mut self, column: usize) -> usize {
        self.rows
            .iter_mut()
            .filter_map(|row| row[column].take())
            .count()
    }

    /// Grows to `new_dimension`. Existing cells keep their value and address;
    /// every newly exposed cell is empty. Never shrinks.
    pub fn grow_to(&mut self, new_dimension: usize) {
        if new_dimension <= self.dimension() {
            return;
        }
        for row in &mut self.rows {
            row.resize(new_dimension, None);
        }
        self.rows
            .resize_with(new_dimension, || vec![None; new_dimension]);
    }

    /// Drops all content and reallocates at `dimension`.
    pub fn reset(&mut self, dimension: usize) {
        *self = Self::new(dimension);
    }

    #[cfg(test)]
    pub(crate) fn count_occupied(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_some()).count())
            .sum()
    }

    /// `(row, column, weight)` for every non-empty cell, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|w| (r, c, w)))
        })
    }
}
