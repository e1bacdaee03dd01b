//! A headless virtual-scroll windowing engine.
//!
//! Given an ordered collection with a default item size and optional per-item sizes, a viewport
//! size and a scroll offset, this crate computes which contiguous run of items must be rendered,
//! where to translate the rendered block, and how tall the scroll spacer must be. It does so in
//! `O(log n)` per frame without re-scanning the collection.
//!
//! The pieces, leaf first:
//! - [`OffsetIndex`]: index ↔ offset mapping with size overrides (prefix sums).
//! - [`calculate_window`]: scroll offset + viewport + margin → index window.
//! - [`ScrollTracker`]: remembers the last window and reports whether a new one differs.
//! - [`VirtualList`]: the one-dimensional facade hosts drive per scroll frame.
//!
//! The two-dimensional (table) form lives in the `virtual-window-table` crate.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - the container size (through the config)
//! - scroll offsets, at most once per animation frame
//! - measured item sizes, when items are not uniform
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod fenwick;
mod key;
mod list;
mod offsets;
mod range;
mod tracker;
mod types;


pub use config::ListConfig;
pub use key::WindowKey;
pub use list::VirtualList;
pub use offsets::OffsetIndex;
pub use range::{calculate_window, visible_span};
pub use tracker::{ScrollTracker, WindowUpdate};
pub use types::{Align, Item, ItemKey, ItemPosition, ListRange, ListUpdate, Span, Window};
