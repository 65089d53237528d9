//! Compressed row-offset sparse grid storage
//!
//! Non-default cells live in three parallel vectors: a row-offset table,
//! a column-index vector and a value vector. Entry `r` of the offset table
//! is where row `r`'s slice starts in the column/value vectors, entry
//! `r + 1` is where it ends. Column indices are kept strictly increasing
//! within each row slice so lookups can binary search the slice, and
//! traversal is a single pass over the value vector.
//!
//! Space is proportional to the number of stored cells plus the highest
//! occupied row index; rows past the last occupied one are trimmed from
//! the table on removal, and reads never grow it.

use alloc::vec;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::Index;

use crate::traits::{GridValue, SparseGrid};

/// Sparse grid in compressed row-offset form
///
/// Cheap to traverse and compact per entry; writes into the middle of a
/// populated row shift the tail of the column/value vectors. Prefer
/// `spgrid`'s map-backed form when writes dominate and order matters only
/// at traversal time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CsrGrid<T> {
    default: T,
    offsets: Vec<usize>,
    cols: Vec<usize>,
    values: Vec<T>,
}

impl<T: GridValue> CsrGrid<T> {
    /// Create an empty grid whose unset cells read as `default`
    pub fn new(default: T) -> Self {
        Self {
            default,
            offsets: vec![0],
            cols: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build a grid from `(row, col, value)` triples
    ///
    /// Triples may arrive in any order; default-valued triples delete, so
    /// later triples win over earlier ones at the same coordinate.
    pub fn from_triples<I>(default: T, triples: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut grid = Self::new(default);
        for (row, col, value) in triples {
            grid.set(row, col, value);
        }
        grid
    }

    /// Number of rows the offset table currently spans
    fn row_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Bounds of `row`'s slice in `cols`/`values`, if the row is in range
    fn row_span(&self, row: usize) -> Option<(usize, usize)> {
        if row < self.row_count() {
            Some((self.offsets[row], self.offsets[row + 1]))
        } else {
            None
        }
    }

    /// Index into `values` for the cell, if it is stored
    fn position(&self, row: usize, col: usize) -> Option<usize> {
        let (start, end) = self.row_span(row)?;
        self.cols[start..end]
            .binary_search(&col)
            .ok()
            .map(|i| start + i)
    }

    fn insert(&mut self, row: usize, col: usize, value: T) {
        let nnz = self.values.len();
        if row >= self.row_count() {
            // Appending past the table: pad the intervening empty rows
            // with the current end offset, then take the tail slot.
            self.offsets.resize(row + 2, nnz);
            self.cols.push(col);
            self.values.push(value);
            self.offsets[row + 1] = nnz + 1;
            return;
        }
        let (start, end) = (self.offsets[row], self.offsets[row + 1]);
        match self.cols[start..end].binary_search(&col) {
            Ok(i) => self.values[start + i] = value,
            Err(i) => {
                self.cols.insert(start + i, col);
                self.values.insert(start + i, value);
                for offset in &mut self.offsets[row + 1..] {
                    *offset += 1;
                }
            }
        }
    }

    fn remove(&mut self, row: usize, col: usize) {
        let i = match self.position(row, col) {
            Some(i) => i,
            None => return,
        };
        self.cols.remove(i);
        self.values.remove(i);
        for offset in &mut self.offsets[row + 1..] {
            *offset -= 1;
        }
        // Trim rows left empty at the tail so the table tracks the highest
        // occupied row, not the highest row ever written.
        while self.offsets.len() > 1
            && self.offsets[self.offsets.len() - 1] == self.offsets[self.offsets.len() - 2]
        {
            self.offsets.pop();
        }
    }
}

impl<T: GridValue> SparseGrid for CsrGrid<T> {
    type Value = T;
    type Cells<'a>
        = CsrCells<'a, T>
    where
        Self: 'a;

    fn default_value(&self) -> T {
        self.default
    }

    fn get(&self, row: usize, col: usize) -> T {
        match self.position(row, col) {
            Some(i) => self.values[i],
            None => self.default,
        }
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        if value == self.default {
            self.remove(row, col);
        } else {
            self.insert(row, col, value);
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn cells(&self) -> CsrCells<'_, T> {
        CsrCells {
            grid: self,
            row: 0,
            idx: 0,
        }
    }
}

impl<T: GridValue> Index<(usize, usize)> for CsrGrid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.position(row, col) {
            Some(i) => &self.values[i],
            None => &self.default,
        }
    }
}

/// In-order cursor over the stored cells of a [`CsrGrid`]
///
/// Walks the value vector front to back, advancing the row whenever the
/// offset table says the current row's slice has ended.
#[derive(Debug, Clone)]
pub struct CsrCells<'a, T> {
    grid: &'a CsrGrid<T>,
    row: usize,
    idx: usize,
}

impl<T: GridValue> Iterator for CsrCells<'_, T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.grid.values.len() {
            return None;
        }
        // idx < nnz guarantees a row slice containing it exists.
        while self.grid.offsets[self.row + 1] <= self.idx {
            self.row += 1;
        }
        let item = (self.row, self.grid.cols[self.idx], self.grid.values[self.idx]);
        self.idx += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.values.len() - self.idx;
        (remaining, Some(remaining))
    }
}

impl<T: GridValue> ExactSizeIterator for CsrCells<'_, T> {}
impl<T: GridValue> FusedIterator for CsrCells<'_, T> {}

impl<'a, T: GridValue> IntoIterator for &'a CsrGrid<T> {
    type Item = (usize, usize, T);
    type IntoIter = CsrCells<'a, T>;

    fn into_iter(self) -> CsrCells<'a, T> {
        self.cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Assert the structural invariants of the compressed form.
    fn check_layout<T: GridValue>(grid: &CsrGrid<T>) {
        assert!(!grid.offsets.is_empty());
        assert_eq!(grid.offsets[0], 0);
        assert_eq!(*grid.offsets.last().unwrap(), grid.values.len());
        assert_eq!(grid.cols.len(), grid.values.len());
        for pair in grid.offsets.windows(2) {
            assert!(pair[0] <= pair[1], "offsets must be non-decreasing");
        }
        if grid.offsets.len() > 1 {
            let last = grid.offsets.len() - 1;
            assert!(
                grid.offsets[last] > grid.offsets[last - 1],
                "trailing empty rows must be trimmed"
            );
        }
        for row in 0..grid.offsets.len() - 1 {
            let slice = &grid.cols[grid.offsets[row]..grid.offsets[row + 1]];
            for pair in slice.windows(2) {
                assert!(pair[0] < pair[1], "columns must be strictly increasing");
            }
        }
    }

    #[test]
    fn test_empty_grid_reads_default() {
        let grid = CsrGrid::new(-1i16);
        assert_eq!(grid.get(0, 0), -1);
        assert_eq!(grid.get(1_000_000, 1_000_000), -1);
        assert_eq!(grid.len(), 0);
        assert!(grid.is_empty());
        check_layout(&grid);
    }

    #[test]
    fn test_insert_then_read_back() {
        let mut grid = CsrGrid::new(0i32);
        grid.set(3, 7, 42);
        assert_eq!(grid.get(3, 7), 42);
        assert_eq!(grid.get(3, 8), 0);
        assert_eq!(grid.get(7, 3), 0);
        assert_eq!(grid.len(), 1);
        check_layout(&grid);
    }

    #[test]
    fn test_overwrite_keeps_len() {
        let mut grid = CsrGrid::new(0i32);
        grid.set(1, 1, 10);
        grid.set(1, 1, 20);
        assert_eq!(grid.get(1, 1), 20);
        assert_eq!(grid.len(), 1);
        check_layout(&grid);
    }

    #[test]
    fn test_default_write_deletes() {
        let mut grid = CsrGrid::new(-1i16);
        grid.set(100, 100, 314);
        assert_eq!(grid.len(), 1);
        grid.set(100, 100, -1);
        assert_eq!(grid.len(), 0);
        assert_eq!(grid.get(100, 100), -1);
        // The table must shrink back to its empty shape.
        assert_eq!(grid.offsets, vec![0]);
        check_layout(&grid);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut grid = CsrGrid::new(0u8);
        grid.set(2, 2, 9);
        grid.set(2, 3, 0);
        grid.set(50, 50, 0);
        assert_eq!(grid.len(), 1);
        check_layout(&grid);
    }

    #[test]
    fn test_unsorted_inserts_keep_columns_ordered() {
        let mut grid = CsrGrid::new(0i32);
        for &col in &[9usize, 1, 5, 3, 7] {
            grid.set(0, col, col as i32);
        }
        let cols: Vec<usize> = grid.cells().map(|(_, c, _)| c).collect();
        assert_eq!(cols, vec![1, 3, 5, 7, 9]);
        check_layout(&grid);
    }

    #[test]
    fn test_high_row_pads_table_once() {
        let mut grid = CsrGrid::new(0i32);
        grid.set(5, 0, 1);
        // Rows 0..5 exist as empty slices, row 5 holds the cell.
        assert_eq!(grid.offsets.len(), 7);
        grid.set(2, 4, 2);
        assert_eq!(grid.get(2, 4), 2);
        assert_eq!(grid.get(5, 0), 1);
        assert_eq!(grid.len(), 2);
        check_layout(&grid);
    }

    #[test]
    fn test_removal_trims_trailing_rows() {
        let mut grid = CsrGrid::new(0i32);
        grid.set(1, 1, 1);
        grid.set(8, 8, 8);
        grid.set(8, 8, 0);
        // Row 8 and the padding rows above row 1 are gone.
        assert_eq!(grid.offsets.len(), 3);
        assert_eq!(grid.get(1, 1), 1);
        assert_eq!(grid.len(), 1);
        check_layout(&grid);
    }

    #[test]
    fn test_traversal_is_row_major() {
        let mut grid = CsrGrid::new(0i32);
        grid.set(2, 0, 5);
        grid.set(0, 3, 1);
        grid.set(0, 1, 2);
        grid.set(2, 2, 4);
        grid.set(1, 9, 3);

        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![(0, 1, 2), (0, 3, 1), (1, 9, 3), (2, 0, 5), (2, 2, 4)]
        );
        assert_eq!(grid.cells().len(), 5);
    }

    #[test]
    fn test_traversal_skips_empty_rows() {
        let mut grid = CsrGrid::new(0i32);
        grid.set(0, 0, 1);
        grid.set(4, 0, 2);
        let rows: Vec<usize> = grid.cells().map(|(r, _, _)| r).collect();
        assert_eq!(rows, vec![0, 4]);
    }

    #[test]
    fn test_index_by_pair() {
        let mut grid = CsrGrid::new(-1i64);
        grid.set(2, 2, 7);
        assert_eq!(grid[(2, 2)], 7);
        assert_eq!(grid[(0, 0)], -1);
    }

    #[test]
    fn test_from_triples_last_write_wins() {
        let grid = CsrGrid::from_triples(0i32, [(0, 0, 1), (1, 1, 2), (0, 0, 3), (1, 1, 0)]);
        assert_eq!(grid.get(0, 0), 3);
        assert_eq!(grid.get(1, 1), 0);
        assert_eq!(grid.len(), 1);
        check_layout(&grid);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let mut grid = CsrGrid::new(0i32);
        grid.set(0, 0, 1);
        grid.set(1, 1, 2);
        let mut seen = Vec::new();
        for (row, col, value) in &grid {
            seen.push((row, col, value));
        }
        assert_eq!(seen, vec![(0, 0, 1), (1, 1, 2)]);
    }
}
