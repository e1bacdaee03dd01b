use alloc::vec::Vec;

use virtual_window::{OffsetIndex, ScrollTracker, Span, Window, WindowKey, WindowUpdate};

use crate::{Column, ColumnPosition, FixedSide};

/// Horizontal axis of a table: fixed columns on the side, the rest windowed.
///
/// Scrollable columns are numbered by "slot" (their position among non-fixed columns) and live
/// in an [`OffsetIndex`]; fixed columns only contribute to the fixed strip widths.
#[derive(Clone, Debug)]
pub(crate) struct ColumnAxis<K> {
    columns: Vec<Column<K>>,
    widths: Vec<u32>,
    slots: Vec<Option<usize>>,
    scrollable: OffsetIndex<K>,
    fixed_left: u64,
    fixed_right: u64,
    tracker: ScrollTracker,
}

impl<K: WindowKey + Clone> ColumnAxis<K> {
    pub(crate) fn new(default_width: u32) -> Self {
        Self {
            columns: Vec::new(),
            widths: Vec::new(),
            slots: Vec::new(),
            scrollable: OffsetIndex::new(default_width),
            fixed_left: 0,
            fixed_right: 0,
            tracker: ScrollTracker::new(),
        }
    }

    pub(crate) fn columns(&self) -> &[Column<K>] {
        &self.columns
    }

    pub(crate) fn set_columns(&mut self, columns: Vec<Column<K>>, default_width: u32) {
        self.columns = columns;
        self.rebuild(default_width);
        self.tracker.reset();
    }

    /// Re-resolves every width (e.g. after the default width changed).
    pub(crate) fn rebuild(&mut self, default_width: u32) {
        self.widths.clear();
        self.slots.clear();
        let mut next_slot = 0usize;
        for column in &self.columns {
            self.widths.push(column.resolved_width(default_width));
            if column.is_fixed() {
                self.slots.push(None);
            } else {
                self.slots.push(Some(next_slot));
                next_slot += 1;
            }
        }
        self.recompute_fixed();

        let entries = self
            .columns
            .iter()
            .zip(&self.widths)
            .filter(|(c, _)| !c.is_fixed())
            .map(|(c, &w)| (c.id.clone(), Some(w)));
        self.scrollable.rebuild(entries, default_width);
        self.tracker.invalidate();
        vdebug!(
            columns = self.columns.len(),
            scrollable = self.scrollable.len(),
            fixed_left = self.fixed_left,
            fixed_right = self.fixed_right,
            "ColumnAxis::rebuild"
        );
    }

    /// Sets the preferred width of the column with `id`.
    ///
    /// Returns the change in that column's resolved width; unknown ids return 0.
    pub(crate) fn set_width(&mut self, id: &K, width: u32, default_width: u32) -> i64 {
        let Some(index) = self.columns.iter().position(|c| c.id == *id) else {
            vtrace!(width, "ColumnAxis::set_width: unknown id");
            return 0;
        };
        if width == 0 {
            vwarn!(index, "ColumnAxis::set_width: ignoring zero width");
            return 0;
        }
        self.columns[index].width = width;
        let resolved = self.columns[index].resolved_width(default_width);
        let prev = self.widths[index];
        if resolved == prev {
            return 0;
        }
        self.widths[index] = resolved;
        match self.slots[index] {
            Some(slot) => {
                self.scrollable.set_size_at(slot, resolved);
            }
            None => self.recompute_fixed(),
        }
        self.tracker.invalidate();
        resolved as i64 - prev as i64
    }

    pub(crate) fn fixed_left_width(&self) -> u64 {
        self.fixed_left
    }

    pub(crate) fn fixed_right_width(&self) -> u64 {
        self.fixed_right
    }

    pub(crate) fn scrollable_width(&self) -> u64 {
        self.scrollable.total_size()
    }

    /// The part of `container_width` left for scrollable columns.
    pub(crate) fn viewport(&self, container_width: u32) -> u32 {
        let fixed = self.fixed_left.saturating_add(self.fixed_right);
        (container_width as u64).saturating_sub(fixed) as u32
    }

    pub(crate) fn max_scroll_left(&self, container_width: u32) -> u64 {
        self.scrollable_width()
            .saturating_sub(self.viewport(container_width) as u64)
    }

    pub(crate) fn update(
        &mut self,
        scroll_left: u64,
        container_width: u32,
        margin: usize,
    ) -> WindowUpdate {
        let viewport = self.viewport(container_width);
        self.tracker
            .update(&self.scrollable, scroll_left, viewport, margin)
    }

    pub(crate) fn scroll_left(&self) -> u64 {
        self.tracker.scroll_offset()
    }

    pub(crate) fn last_window(&self) -> Option<Window> {
        self.tracker.last_window()
    }

    pub(crate) fn invalidate(&mut self) {
        self.tracker.invalidate();
    }

    /// Fixed columns plus the scrollable columns in the last computed window, in declaration
    /// order.
    pub(crate) fn visible(&self) -> impl Iterator<Item = &Column<K>> + '_ {
        let span: Option<Span> = self.last_window().and_then(|w| w.span);
        self.columns
            .iter()
            .zip(&self.slots)
            .filter(move |(_, slot)| match slot {
                None => true,
                Some(slot) => span.is_some_and(|s| s.contains(*slot)),
            })
            .map(|(column, _)| column)
    }

    pub(crate) fn position(&self, index: usize) -> Option<ColumnPosition> {
        let column = self.columns.get(index)?;
        let width = self.widths[index];
        let left = match (self.slots[index], column.fixed) {
            (Some(slot), _) => self.scrollable.offset_of(slot),
            (None, side) => self.columns[..index]
                .iter()
                .zip(&self.widths)
                .filter(|(c, _)| c.fixed == side)
                .map(|(_, &w)| w as u64)
                .sum(),
        };
        Some(ColumnPosition {
            left,
            width,
            fixed: column.fixed,
        })
    }

    /// Scroll offset that brings the column with `id` to the left edge of the scrollable strip.
    ///
    /// `None` for unknown ids and for fixed columns, which never scroll.
    pub(crate) fn scroll_to(&self, id: &K) -> Option<u64> {
        let index = self.columns.iter().position(|c| c.id == *id)?;
        let slot = self.slots[index]?;
        Some(self.scrollable.offset_of(slot))
    }

    fn recompute_fixed(&mut self) {
        let mut left = 0u64;
        let mut right = 0u64;
        for (column, &w) in self.columns.iter().zip(&self.widths) {
            match column.fixed {
                Some(FixedSide::Left) => left = left.saturating_add(w as u64),
                Some(FixedSide::Right) => right = right.saturating_add(w as u64),
                None => {}
            }
        }
        self.fixed_left = left;
        self.fixed_right = right;
    }
}
