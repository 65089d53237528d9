//! Display adapters for grids
//!
//! `Block` prints a rectangular window of a grid with right-aligned,
//! fixed-width cells; `CellList` prints one stored cell per line. Both
//! read through the grid surface only, so unset coordinates render as the
//! default value.

use std::fmt::{self, Display};
use std::ops::Range;

use spgrid_core::SparseGrid;

/// Fixed-width view of a rectangular window of a grid
///
/// Every coordinate in the window is printed, stored or not; the default
/// value fills the gaps. Cells are right-aligned in `width` columns
/// (4 unless overridden) with one line per row.
pub struct Block<'a, G> {
    grid: &'a G,
    rows: Range<usize>,
    cols: Range<usize>,
    width: usize,
}

impl<'a, G: SparseGrid> Block<'a, G> {
    pub fn new(grid: &'a G, rows: Range<usize>, cols: Range<usize>) -> Self {
        Self {
            grid,
            rows,
            cols,
            width: 4,
        }
    }

    /// Override the column width
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl<G: SparseGrid> Display for Block<'_, G>
where
    G::Value: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.clone() {
            for col in self.cols.clone() {
                write!(f, "{:>width$}", self.grid.get(row, col), width = self.width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One-line-per-cell listing of every stored cell, in traversal order
pub struct CellList<'a, G> {
    grid: &'a G,
}

impl<'a, G: SparseGrid> CellList<'a, G> {
    pub fn new(grid: &'a G) -> Self {
        Self { grid }
    }
}

impl<G: SparseGrid> Display for CellList<'_, G>
where
    G::Value: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, col, value) in self.grid.cells() {
            writeln!(f, "value = {value}, row = {row}, col = {col}")?;
        }
        Ok(())
    }
}
