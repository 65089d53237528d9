//! Sparse Grid - a two-dimensional associative container
//!
//! A sparse grid stores only cells whose value differs from a per-instance
//! default while behaving as if every cell already holds that default.
//! Memory stays proportional to the number of non-default cells, and
//! traversal visits exactly the stored cells in row-major,
//! column-ascending order.
//!
//! ## Architecture
//!
//! The workspace separates definitions from richer-dependency pieces:
//!
//! - **spgrid-core**: access traits, transient accessors and the
//!   compressed row-offset form (no_std + alloc, no I/O)
//! - **spgrid**: the hashbrown-backed nested-map form, display adapters
//!   and conversions between forms
//!
//! ## Quick Start
//!
//! ```rust
//! use spgrid::{MapGrid, SparseGrid};
//!
//! let mut grid = MapGrid::new(-1i16);
//! assert_eq!(grid.get(0, 0), -1);
//!
//! grid.at_mut(100).cell(100).write(314);
//! assert_eq!(grid.at(100).cell(100).read(), 314);
//! assert_eq!(grid.len(), 1);
//!
//! // Writing the default value deletes the cell.
//! grid.at_mut(100).cell(100).write(-1);
//! assert!(grid.is_empty());
//! ```

// Re-export core abstractions and the compressed storage form
pub use spgrid_core::{
    // Core traits
    GridOperations, GridValue, SparseGrid,
    // Transient accessors
    CellMut, CellRef, RowMut, RowRef,
    // Compressed row-offset form
    CsrCells, CsrGrid,
};

// Implementation modules
pub mod convert;
pub mod map;
pub mod render;

// Public exports
pub use convert::{copy_into, to_csr, to_map};
pub use map::{MapCells, MapGrid};
pub use render::{Block, CellList};
