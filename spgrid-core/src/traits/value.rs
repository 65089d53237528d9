//! Cell value type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored in a sparse grid cell.

/// Trait for types that can be stored as grid cell values
///
/// A value type must be:
/// - Copy: Cells hand out values by copy, never by reference into storage
/// - PartialEq: Equality against the default value decides whether a cell
///   is stored at all
/// - Sized: Have a known size at compile time
///
/// Every type meeting these bounds is a valid cell value; the blanket
/// implementation below makes the trait an alias rather than an opt-in.
pub trait GridValue: Copy + PartialEq + Sized {}

impl<T: Copy + PartialEq + Sized> GridValue for T {}
