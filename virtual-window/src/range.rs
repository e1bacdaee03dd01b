use core::cmp;

use crate::key::WindowKey;
use crate::{OffsetIndex, Span, Window};

/// Computes the index window to render for one axis.
///
/// The window starts at the item under `scroll_offset`, ends at the item under
/// `scroll_offset + viewport` (clamped to the last item), and is widened by `margin` items on
/// both sides without leaving the collection. `offset` is the start offset of the first
/// rendered item, i.e. the translation the host applies to the rendered block.
///
/// The window always covers `[scroll_offset, scroll_offset + viewport]` for any offset up to
/// `total_size - viewport`. A zero viewport still yields the item under `scroll_offset` plus
/// margins. Returns [`Window::EMPTY`] for an empty index.
pub fn calculate_window<K: WindowKey>(
    index: &OffsetIndex<K>,
    scroll_offset: u64,
    viewport: u32,
    margin: usize,
) -> Window {
    let Some(first) = index.index_at(scroll_offset) else {
        return Window::EMPTY;
    };
    let last = index
        .index_at(scroll_offset.saturating_add(viewport as u64))
        .unwrap_or(first);

    let start_index = first.saturating_sub(margin);
    let end_index = cmp::min(index.len() - 1, last.saturating_add(margin));
    Window {
        span: Some(Span {
            start_index,
            end_index,
        }),
        offset: index.offset_of(start_index),
    }
}

/// Indexes that intersect `[scroll_offset, scroll_offset + viewport)`, without margins.
///
/// Unlike [`calculate_window`], an item that merely starts at the viewport's far edge is not
/// included.
pub fn visible_span<K: WindowKey>(
    index: &OffsetIndex<K>,
    scroll_offset: u64,
    viewport: u32,
) -> Option<Span> {
    let start_index = index.index_at(scroll_offset)?;
    let last_pixel = scroll_offset.saturating_add((viewport as u64).saturating_sub(1));
    let end_index = index.index_at(last_pixel)?.max(start_index);
    Some(Span {
        start_index,
        end_index,
    })
}
