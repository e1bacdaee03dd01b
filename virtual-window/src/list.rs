use alloc::vec::Vec;

use crate::key::WindowKey;
use crate::range::visible_span;
use crate::tracker::ScrollTracker;
use crate::{
    Align, Item, ItemKey, ItemPosition, ListConfig, ListRange, ListUpdate, OffsetIndex, Span,
};

/// A windowed vertical list.
///
/// The host owns the scroll container and the DOM (or terminal, or canvas). Per animation frame
/// it forwards the container's scroll offset to [`VirtualList::update_scroll_top`], and when the
/// returned `needs_update` is set it renders [`VirtualList::visible_items`] translated by
/// `range.offset_top` inside a spacer of `scroll_height`.
///
/// All operations are synchronous and never fail: out-of-range indexes are clamped, unknown ids
/// are ignored, and an empty list yields empty ranges.
#[derive(Clone, Debug)]
pub struct VirtualList<T, K = ItemKey> {
    config: ListConfig,
    items: Vec<Item<K, T>>,
    offsets: OffsetIndex<K>,
    tracker: ScrollTracker,
}

impl<T, K: WindowKey + Clone> VirtualList<T, K> {
    pub fn new(config: ListConfig) -> Self {
        let config = config.sanitized();
        vdebug!(
            item_height = config.item_height,
            container_height = config.container_height,
            buffer_size = config.buffer_size,
            overscan = config.overscan,
            "VirtualList::new"
        );
        Self {
            offsets: OffsetIndex::new(config.item_height),
            config,
            items: Vec::new(),
            tracker: ScrollTracker::new(),
        }
    }

    pub fn with_items(config: ListConfig, items: Vec<Item<K, T>>) -> Self {
        let mut list = Self::new(config);
        list.set_items(items);
        list
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn items(&self) -> &[Item<K, T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn offsets(&self) -> &OffsetIndex<K> {
        &self.offsets
    }

    /// Replaces the collection.
    ///
    /// Sizes are re-derived from each item's `height` and the default item height; overrides
    /// applied through [`VirtualList::set_item_height`] are not carried over. The scroll offset
    /// is kept, the last range is dropped.
    pub fn set_items(&mut self, items: Vec<Item<K, T>>) {
        self.offsets.rebuild(
            items.iter().map(|it| (it.id.clone(), it.height)),
            self.config.item_height,
        );
        self.items = items;
        self.tracker.reset();
    }

    /// Applies a partial configuration change.
    ///
    /// Nothing is recomputed here; the next [`VirtualList::update_scroll_top`] uses the new
    /// values and reports `needs_update`.
    pub fn update_config(&mut self, f: impl FnOnce(&mut ListConfig)) {
        let prev = self.config;
        let mut next = prev;
        f(&mut next);
        let next = next.sanitized();
        if next == prev {
            return;
        }
        vtrace!(
            item_height = next.item_height,
            container_height = next.container_height,
            buffer_size = next.buffer_size,
            overscan = next.overscan,
            "VirtualList::update_config"
        );
        self.config = next;
        if next.item_height != prev.item_height {
            self.offsets.set_default_size(next.item_height);
        }
        self.tracker.invalidate();
    }

    /// Feeds a new scroll offset and returns the window to render.
    pub fn update_scroll_top(&mut self, scroll_top: u64) -> ListUpdate {
        let update = self.tracker.update(
            &self.offsets,
            scroll_top,
            self.config.container_height,
            self.config.margin(),
        );
        vtrace!(
            scroll_top,
            needs_update = update.needs_update,
            "VirtualList::update_scroll_top"
        );
        let scroll_height = self.offsets.total_size();
        ListUpdate {
            needs_update: update.needs_update,
            range: ListRange {
                span: update.window.span,
                offset_top: update.window.offset,
                total_height: scroll_height,
            },
            scroll_height,
        }
    }

    /// Recomputes the window at the last known scroll offset.
    pub fn refresh(&mut self) -> ListUpdate {
        self.update_scroll_top(self.tracker.scroll_offset())
    }

    pub fn scroll_top(&self) -> u64 {
        self.tracker.scroll_offset()
    }

    pub fn scroll_height(&self) -> u64 {
        self.offsets.total_size()
    }

    pub fn max_scroll_top(&self) -> u64 {
        self.scroll_height()
            .saturating_sub(self.config.container_height as u64)
    }

    /// The last computed range, or an empty one before the first update after
    /// [`VirtualList::set_items`].
    pub fn visible_range(&self) -> ListRange {
        let window = self.tracker.last_window().unwrap_or_default();
        ListRange {
            span: window.span,
            offset_top: window.offset,
            total_height: self.offsets.total_size(),
        }
    }

    /// Items in the last computed range, in collection order.
    pub fn visible_items(&self) -> &[Item<K, T>] {
        let span = self.tracker.last_window().and_then(|w| w.span);
        match span {
            Some(span) => self.items.get(span.indexes()).unwrap_or(&[]),
            None => &[],
        }
    }

    /// Indexes intersecting the viewport at the current scroll offset, without buffer or
    /// overscan.
    pub fn viewport_span(&self) -> Option<Span> {
        visible_span(
            &self.offsets,
            self.tracker.scroll_offset(),
            self.config.container_height,
        )
    }

    /// Scroll offset that puts `index` (clamped) at the top of the viewport.
    ///
    /// Nothing is moved; the host assigns the value to its scroll container.
    pub fn scroll_to_index(&self, index: usize) -> u64 {
        self.offsets.offset_of(index)
    }

    /// Scroll offset that places `index` (clamped) according to `align`, clamped to
    /// [`VirtualList::max_scroll_top`].
    pub fn scroll_to_index_aligned(&self, index: usize, align: Align) -> u64 {
        if self.offsets.is_empty() {
            return 0;
        }
        let index = index.min(self.offsets.len() - 1);
        let Some(pos) = self.item_position(index) else {
            return 0;
        };
        let view = self.config.container_height as u64;

        let target = match align {
            Align::Start => pos.top,
            Align::End => pos.bottom().saturating_sub(view),
            Align::Center => {
                let center = pos.top.saturating_add(pos.height as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.tracker.scroll_offset();
                let cur_end = cur.saturating_add(view);
                if pos.top >= cur && pos.bottom() <= cur_end {
                    cur
                } else if pos.top < cur {
                    pos.top
                } else {
                    pos.bottom().saturating_sub(view)
                }
            }
        };
        target.min(self.max_scroll_top())
    }

    pub fn item_position(&self, index: usize) -> Option<ItemPosition> {
        let height = self.offsets.size_of(index)?;
        Some(ItemPosition {
            top: self.offsets.offset_of(index),
            height,
        })
    }

    pub fn index_of(&self, id: &K) -> Option<usize> {
        self.offsets.index_of(id)
    }

    /// The item whose span contains `offset` (clamped to the last item).
    pub fn item_at_offset(&self, offset: u64) -> Option<&Item<K, T>> {
        let index = self.offsets.index_at(offset)?;
        self.items.get(index)
    }

    /// Records a measured height for the item with `id`.
    ///
    /// Only offsets after that item move. Returns the change in `scroll_height`; unknown ids and
    /// zero heights return 0 and change nothing. A height equal to the current one moves nothing
    /// but is kept as a measurement across default-height changes.
    pub fn set_item_height(&mut self, id: &K, height: u32) -> i64 {
        let Some(index) = self.offsets.index_of(id) else {
            vtrace!(height, "VirtualList::set_item_height: unknown id");
            return 0;
        };
        if height == 0 {
            vwarn!(index, "VirtualList::set_item_height: ignoring zero height");
            return 0;
        }
        let delta = self.offsets.set_size_at(index, height);
        if let Some(item) = self.items.get_mut(index) {
            item.height = Some(height);
        }
        if delta != 0 {
            self.tracker.invalidate();
        }
        delta
    }
}
