#![no_std]

//! Sparse Grid Core - traits and compressed storage
//!
//! This crate provides the access traits for sparse two-dimensional grids
//! and the compressed row-offset storage form. Map-backed storage and
//! formatting helpers live in the `spgrid` crate.

extern crate alloc;

pub mod access;
pub mod csr;
pub mod traits;

pub use access::*;
pub use csr::*;
pub use traits::*;
