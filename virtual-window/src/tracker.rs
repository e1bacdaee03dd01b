use crate::key::WindowKey;
use crate::range::calculate_window;
use crate::{OffsetIndex, Window};

/// A computed window plus whether it differs from the previously reported one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowUpdate {
    pub window: Window,
    pub needs_update: bool,
}

/// Remembers the last scroll offset and reported window for one axis.
///
/// `needs_update` is raised only when the span or its offset changes, so a host can skip
/// re-rendering while the user scrolls within the rendered margin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTracker {
    scroll_offset: u64,
    last: Option<Window>,
    stale: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// The last reported window, if any.
    pub fn last_window(&self) -> Option<Window> {
        self.last
    }

    /// Computes the window at `scroll_offset` and compares it with the last reported one.
    ///
    /// The offset is stored even when nothing changed.
    pub fn update<K: WindowKey>(
        &mut self,
        index: &OffsetIndex<K>,
        scroll_offset: u64,
        viewport: u32,
        margin: usize,
    ) -> WindowUpdate {
        self.scroll_offset = scroll_offset;
        let window = calculate_window(index, scroll_offset, viewport, margin);
        let needs_update = self.stale || self.last != Some(window);
        self.last = Some(window);
        self.stale = false;
        WindowUpdate {
            window,
            needs_update,
        }
    }

    /// Forces the next [`ScrollTracker::update`] to report `needs_update`.
    ///
    /// Call after sizes or configuration change: the same span may then need a re-render.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Forgets the reported window (the collection was replaced). The scroll offset is kept.
    pub fn reset(&mut self) {
        self.last = None;
        self.stale = false;
    }
}
