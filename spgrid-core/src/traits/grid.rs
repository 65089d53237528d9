//! Core grid abstraction traits
//!
//! This module defines the fundamental traits that all sparse grid storage
//! forms must satisfy, regardless of internal representation.

use alloc::vec::Vec;

use super::value::GridValue;
use crate::access::{RowMut, RowRef};

/// Core sparse grid trait for storage-agnostic access
///
/// A sparse grid behaves as a total function from `(row, col)` to a value:
/// every coordinate pair reads as the grid's default value until a
/// non-default value is written to it. Only non-default cells occupy
/// storage, so memory is proportional to the number of such cells.
pub trait SparseGrid {
    /// The value type stored in this grid
    type Value: GridValue;

    /// Iterator over stored cells, see [`SparseGrid::cells`]
    type Cells<'a>: Iterator<Item = (usize, usize, Self::Value)>
    where
        Self: 'a;

    /// The value representing an unset cell
    fn default_value(&self) -> Self::Value;

    /// Read the value at the given position
    ///
    /// Returns the stored value if the cell is set, the default value
    /// otherwise. Never mutates the grid; any coordinate pair is valid.
    fn get(&self, row: usize, col: usize) -> Self::Value;

    /// Write a value at the given position
    ///
    /// Writing a non-default value inserts or overwrites the cell. Writing
    /// the default value removes the cell; removing an absent cell is a
    /// no-op. `len` changes by exactly +1, -1 or 0 accordingly.
    fn set(&mut self, row: usize, col: usize, value: Self::Value);

    /// Number of stored (non-default) cells
    fn len(&self) -> usize;

    /// Whether no cell is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every stored cell exactly once as `(row, col, value)`
    ///
    /// Rows are visited in ascending order, columns in ascending order
    /// within a row. Triples are produced by value; the iterator borrows
    /// the grid, so the grid cannot be mutated while one is live.
    fn cells(&self) -> Self::Cells<'_>;

    /// Read-only accessor for one row, see [`RowRef`]
    fn at(&self, row: usize) -> RowRef<'_, Self>
    where
        Self: Sized,
    {
        RowRef::new(self, row)
    }

    /// Mutable accessor for one row, see [`RowMut`]
    fn at_mut(&mut self, row: usize) -> RowMut<'_, Self>
    where
        Self: Sized,
    {
        RowMut::new(self, row)
    }
}

/// Extension trait for row/column collection
///
/// These operations allocate; they are provided for every grid via the
/// blanket implementation below.
pub trait GridOperations: SparseGrid {
    /// All stored cells of a row as `(col, value)`, columns ascending
    fn row_cells(&self, row: usize) -> Vec<(usize, Self::Value)> {
        self.cells()
            .filter(|&(r, _, _)| r == row)
            .map(|(_, c, v)| (c, v))
            .collect()
    }

    /// All stored cells of a column as `(row, value)`, rows ascending
    fn col_cells(&self, col: usize) -> Vec<(usize, Self::Value)> {
        self.cells()
            .filter(|&(_, c, _)| c == col)
            .map(|(r, _, v)| (r, v))
            .collect()
    }
}

impl<G: SparseGrid> GridOperations for G {}
