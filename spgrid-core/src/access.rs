//! Transient two-level cell accessors
//!
//! `grid.at(r).cell(c).read()` and `grid.at_mut(r).cell(c).write(v)` give
//! subscript-style access without exposing references into storage. Each
//! accessor carries only the grid borrow plus its coordinates and is meant
//! to live for a single expression; the borrow it holds keeps it from
//! outliving the grid or coexisting with a conflicting access.

use crate::traits::SparseGrid;

/// Read-only accessor for one row of a grid
pub struct RowRef<'a, G: SparseGrid> {
    grid: &'a G,
    row: usize,
}

impl<'a, G: SparseGrid> RowRef<'a, G> {
    pub(crate) fn new(grid: &'a G, row: usize) -> Self {
        Self { grid, row }
    }

    /// The row index this accessor is bound to
    pub fn index(&self) -> usize {
        self.row
    }

    /// Narrow the accessor to one cell of the row
    pub fn cell(&self, col: usize) -> CellRef<'a, G> {
        CellRef {
            grid: self.grid,
            row: self.row,
            col,
        }
    }
}

/// Read-only accessor for one cell
pub struct CellRef<'a, G: SparseGrid> {
    grid: &'a G,
    row: usize,
    col: usize,
}

impl<G: SparseGrid> CellRef<'_, G> {
    /// Read the cell, yielding the default value if it is unset
    pub fn read(&self) -> G::Value {
        self.grid.get(self.row, self.col)
    }

    /// Whether the cell holds a non-default value
    pub fn is_set(&self) -> bool {
        self.read() != self.grid.default_value()
    }
}

/// Mutable accessor for one row of a grid
pub struct RowMut<'a, G: SparseGrid> {
    grid: &'a mut G,
    row: usize,
}

impl<'a, G: SparseGrid> RowMut<'a, G> {
    pub(crate) fn new(grid: &'a mut G, row: usize) -> Self {
        Self { grid, row }
    }

    /// The row index this accessor is bound to
    pub fn index(&self) -> usize {
        self.row
    }

    /// Narrow the accessor to one cell of the row
    pub fn cell(&mut self, col: usize) -> CellMut<'_, G> {
        CellMut {
            grid: &mut *self.grid,
            row: self.row,
            col,
        }
    }
}

/// Mutable accessor for one cell
pub struct CellMut<'a, G: SparseGrid> {
    grid: &'a mut G,
    row: usize,
    col: usize,
}

impl<G: SparseGrid> CellMut<'_, G> {
    /// Read the cell, yielding the default value if it is unset
    pub fn read(&self) -> G::Value {
        self.grid.get(self.row, self.col)
    }

    /// Whether the cell holds a non-default value
    pub fn is_set(&self) -> bool {
        self.read() != self.grid.default_value()
    }

    /// Write the cell; writing the default value removes it
    pub fn write(self, value: G::Value) {
        self.grid.set(self.row, self.col, value);
    }

    /// Remove the cell by writing the default value
    pub fn clear(self) {
        let default = self.grid.default_value();
        self.grid.set(self.row, self.col, default);
    }

    /// Write the cell and return the value it held before
    pub fn replace(self, value: G::Value) -> G::Value {
        let old = self.read();
        self.grid.set(self.row, self.col, value);
        old
    }
}
