//! Copying cell contents between storage forms

use spgrid_core::{CsrGrid, SparseGrid};

use crate::map::MapGrid;

/// Copy every stored cell of `src` into `dst`
///
/// `dst` keeps its own default value; cells of `src` whose value equals it
/// are deleted from `dst` rather than stored.
pub fn copy_into<S, D>(src: &S, dst: &mut D)
where
    S: SparseGrid,
    D: SparseGrid<Value = S::Value>,
{
    for (row, col, value) in src.cells() {
        dst.set(row, col, value);
    }
}

/// Rebuild any grid in compressed row-offset form
pub fn to_csr<G: SparseGrid>(grid: &G) -> CsrGrid<G::Value> {
    CsrGrid::from_triples(grid.default_value(), grid.cells())
}

/// Rebuild any grid in nested-map form
pub fn to_map<G: SparseGrid>(grid: &G) -> MapGrid<G::Value> {
    MapGrid::from_triples(grid.default_value(), grid.cells())
}
