use core::ops::RangeInclusive;

/// Default id type for items keyed by position or numeric id.
pub type ItemKey = u64;

/// One entry of a windowed collection.
///
/// `height` is an optional explicit size in the scroll axis; items without one use the
/// configured default.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<K, T> {
    pub id: K,
    pub data: T,
    pub height: Option<u32>,
}

impl<K, T> Item<K, T> {
    pub fn new(id: K, data: T) -> Self {
        Self {
            id,
            data,
            height: None,
        }
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }
}

/// Where to place an item when computing a scroll-to offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    /// Keep the current offset if the item is fully visible, otherwise scroll the least.
    Auto,
}

/// A non-empty, inclusive run of indexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl Span {
    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index <= self.end_index
    }

    pub fn indexes(&self) -> RangeInclusive<usize> {
        self.start_index..=self.end_index
    }
}

/// Output of the range calculator for one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    /// Indexes to render, `None` for an empty collection.
    pub span: Option<Span>,
    /// Start offset of `span.start_index` (0 when empty).
    pub offset: u64,
}

impl Window {
    pub const EMPTY: Self = Self {
        span: None,
        offset: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.span.is_none()
    }
}

/// Position of one item in the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPosition {
    pub top: u64,
    pub height: u32,
}

impl ItemPosition {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}

/// The range a vertical list should render.
///
/// The host slices its items by `span`, translates the rendered block by `offset_top`, and
/// sizes its scroll spacer to `total_height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListRange {
    pub span: Option<Span>,
    pub offset_top: u64,
    pub total_height: u64,
}

/// Result of feeding a scroll position into [`crate::VirtualList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListUpdate {
    /// `false` when the rendered window is identical to the last reported one.
    pub needs_update: bool,
    pub range: ListRange,
    pub scroll_height: u64,
}
