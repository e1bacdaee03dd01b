//! Two-dimensional windowing for data tables, built on `virtual-window`.
//!
//! Rows are windowed on the vertical axis and columns on the horizontal axis, each with its own
//! offset index and scroll tracker. Columns can be fixed to the left or right edge; fixed
//! columns are always reported as visible and do not take part in horizontal scrolling.
//!
//! Like `virtual-window`, this crate holds no UI objects and never fails: hosts feed it scroll
//! offsets and measured sizes and apply the ranges it returns.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod columns;
mod config;
mod table;
mod types;

#[cfg(test)]
mod tests;

pub use config::TableConfig;
pub use table::VirtualTable;
pub use types::{Column, ColumnPosition, FixedSide, TableRange, TableUpdate};
