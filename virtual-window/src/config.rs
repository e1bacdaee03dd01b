/// Configuration for [`crate::VirtualList`].
///
/// Sizes are in pixels (or whatever unit the host scrolls in). `buffer_size` and `overscan` are
/// both item counts added on each side of the visible indexes; the engine sums them into one
/// symmetric margin, see [`ListConfig::margin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListConfig {
    /// Size of items without an explicit height.
    pub item_height: u32,
    /// Viewport size in the scroll axis.
    pub container_height: u32,
    /// Items always kept rendered beyond the visible window on each side.
    pub buffer_size: usize,
    /// Extra items on each side so small scroll deltas do not change the window.
    pub overscan: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_height: 50,
            container_height: 0,
            buffer_size: 5,
            overscan: 2,
        }
    }
}

impl ListConfig {
    pub fn new(item_height: u32, container_height: u32) -> Self {
        Self {
            item_height,
            container_height,
            ..Self::default()
        }
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_container_height(mut self, container_height: u32) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Items added on each side of the visible indexes.
    pub fn margin(&self) -> usize {
        self.buffer_size.saturating_add(self.overscan)
    }

    /// Clamps degenerate values (a zero item height becomes 1).
    pub(crate) fn sanitized(mut self) -> Self {
        if self.item_height == 0 {
            vwarn!("ListConfig: zero item_height clamped to 1");
            self.item_height = 1;
        }
        self
    }
}
