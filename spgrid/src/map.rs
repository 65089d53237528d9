//! Map-backed sparse grid storage
//!
//! Rows live in a hash map keyed by row index; each row is a hash map from
//! column index to value. Lookups and writes are O(1) amortized for any
//! coordinate, at the cost of per-entry overhead and a sort at traversal
//! time. A row's inner map is dropped the moment its last cell is removed,
//! so empty rows never accumulate.

use std::ops::Index;

use hashbrown::HashMap;

use spgrid_core::{GridValue, SparseGrid};

/// Sparse grid in nested-map form
///
/// Cheap to write anywhere; traversal snapshots and sorts the keys to
/// deliver the same row-major, column-ascending order as the compressed
/// form. A running counter keeps `len` O(1).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapGrid<T> {
    default: T,
    rows: HashMap<usize, HashMap<usize, T>>,
    len: usize,
}

impl<T: GridValue> MapGrid<T> {
    /// Create an empty grid whose unset cells read as `default`
    pub fn new(default: T) -> Self {
        Self {
            default,
            rows: HashMap::new(),
            len: 0,
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

    /// Number of rows holding at least one stored cell
    pub fn occupied_rows(&self) -> usize {
        self.rows.len()
    }
}

impl<T: GridValue> SparseGrid for MapGrid<T> {
    type Value = T;
    type Cells<'a>
        = MapCells<'a, T>
    where
        Self: 'a;

    fn default_value(&self) -> T {
        self.default
    }

    fn get(&self, row: usize, col: usize) -> T {
        self.rows
            .get(&row)
            .and_then(|cells| cells.get(&col))
            .copied()
            .unwrap_or(self.default)
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        if value == self.default {
            if let Some(cells) = self.rows.get_mut(&row) {
                if cells.remove(&col).is_some() {
                    self.len -= 1;
                    if cells.is_empty() {
                        self.rows.remove(&row);
                    }
                }
            }
        } else if self.rows.entry(row).or_default().insert(col, value).is_none() {
            self.len += 1;
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn cells(&self) -> MapCells<'_, T> {
        let mut rows: Vec<usize> = self.rows.keys().copied().collect();
        rows.sort_unstable();
        MapCells {
            grid: self,
            rows: rows.into_iter(),
            current: None,
            emitted: 0,
        }
    }
}

impl<T: GridValue> Index<(usize, usize)> for MapGrid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.rows
            .get(&row)
            .and_then(|cells| cells.get(&col))
            .unwrap_or(&self.default)
    }
}

/// In-order cursor over the stored cells of a [`MapGrid`]
///
/// Row keys are sorted up front; each row's columns are sorted as the
/// cursor enters the row. Triples are owned copies, not references into
/// the maps.
pub struct MapCells<'a, T> {
    grid: &'a MapGrid<T>,
    rows: std::vec::IntoIter<usize>,
    current: Option<(usize, std::vec::IntoIter<(usize, T)>)>,
    emitted: usize,
}

impl<T: GridValue> Iterator for MapCells<'_, T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((row, cols)) = &mut self.current {
                if let Some((col, value)) = cols.next() {
                    self.emitted += 1;
                    return Some((*row, col, value));
                }
                self.current = None;
            }
            let row = self.rows.next()?;
            let mut cols: Vec<(usize, T)> = self.grid.rows[&row]
                .iter()
                .map(|(&col, &value)| (col, value))
                .collect();
            cols.sort_unstable_by_key(|&(col, _)| col);
            self.current = Some((row, cols.into_iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.len - self.emitted;
        (remaining, Some(remaining))
    }
}

impl<T: GridValue> ExactSizeIterator for MapCells<'_, T> {}

impl<'a, T: GridValue> IntoIterator for &'a MapGrid<T> {
    type Item = (usize, usize, T);
    type IntoIter = MapCells<'a, T>;

    fn into_iter(self) -> MapCells<'a, T> {
        self.cells()
    }
}
