//! Core traits for sparse grid access

pub mod grid;
pub mod value;

pub use grid::*;
pub use value::*;
