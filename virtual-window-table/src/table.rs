use alloc::vec::Vec;

use virtual_window::{Item, ItemKey, ItemPosition, OffsetIndex, VirtualList, WindowKey};

use crate::columns::ColumnAxis;
use crate::{Column, ColumnPosition, TableConfig, TableRange, TableUpdate};

/// A table windowed on both axes.
///
/// Rows are a [`VirtualList`] driven with the table's row height, container height and margins;
/// scrollable columns are windowed horizontally by an independent offset index and tracker.
/// Fixed columns are always visible and excluded from the scrollable width, and the horizontal
/// viewport is the container width minus the fixed strips.
///
/// The host translates the rendered cell block by (`column_offset_left`, `row_offset_top`),
/// sizes its spacer to `total_column_width` × `total_row_height`, and renders fixed columns in
/// their own strips.
#[derive(Clone, Debug)]
pub struct VirtualTable<T, RK = ItemKey, CK = ItemKey> {
    config: TableConfig,
    rows: VirtualList<T, RK>,
    columns: ColumnAxis<CK>,
}

impl<T, RK, CK> VirtualTable<T, RK, CK>
where
    RK: WindowKey + Clone,
    CK: WindowKey + Clone,
{
    pub fn new(config: TableConfig) -> Self {
        let config = config.sanitized();
        vdebug!(
            row_height = config.row_height,
            column_width = config.column_width,
            container_width = config.container_width,
            container_height = config.container_height,
            "VirtualTable::new"
        );
        Self {
            rows: VirtualList::new(config.rows()),
            columns: ColumnAxis::new(config.column_width),
            config,
        }
    }

    pub fn with_data(
        config: TableConfig,
        rows: Vec<Item<RK, T>>,
        columns: Vec<Column<CK>>,
    ) -> Self {
        let mut table = Self::new(config);
        table.set_rows(rows);
        table.set_columns(columns);
        table
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn rows(&self) -> &[Item<RK, T>] {
        self.rows.items()
    }

    /// The row axis.
    pub fn row_list(&self) -> &VirtualList<T, RK> {
        &self.rows
    }

    pub fn columns(&self) -> &[Column<CK>] {
        self.columns.columns()
    }

    pub fn row_offsets(&self) -> &OffsetIndex<RK> {
        self.rows.offsets()
    }

    /// Replaces the rows; row height overrides are not carried over.
    pub fn set_rows(&mut self, rows: Vec<Item<RK, T>>) {
        self.rows.set_items(rows);
    }

    /// Replaces the columns. Widths set through [`VirtualTable::set_column_width`] are dropped.
    pub fn set_columns(&mut self, columns: Vec<Column<CK>>) {
        self.columns.set_columns(columns, self.config.column_width);
    }

    /// Applies a partial configuration change. Nothing is recomputed until the next
    /// [`VirtualTable::update_scroll_position`].
    pub fn update_config(&mut self, f: impl FnOnce(&mut TableConfig)) {
        let prev = self.config;
        let mut next = prev;
        f(&mut next);
        let next = next.sanitized();
        if next == prev {
            return;
        }
        self.config = next;

        let rows = next.rows();
        self.rows.update_config(|c| *c = rows);
        if next.column_width != prev.column_width {
            self.columns.rebuild(next.column_width);
        }
        if next.container_width != prev.container_width || next.margin() != prev.margin() {
            self.columns.invalidate();
        }
    }

    /// Feeds both scroll offsets and returns the cell block to render.
    pub fn update_scroll_position(&mut self, scroll_top: u64, scroll_left: u64) -> TableUpdate {
        let rows = self.rows.update_scroll_top(scroll_top);
        let columns = self
            .columns
            .update(scroll_left, self.config.container_width, self.config.margin());
        vtrace!(
            scroll_top,
            scroll_left,
            rows_changed = rows.needs_update,
            columns_changed = columns.needs_update,
            "VirtualTable::update_scroll_position"
        );

        TableUpdate {
            needs_update: rows.needs_update || columns.needs_update,
            rows_changed: rows.needs_update,
            columns_changed: columns.needs_update,
            range: TableRange {
                rows: rows.range.span,
                columns: columns.window.span,
                row_offset_top: rows.range.offset_top,
                column_offset_left: columns.window.offset,
                total_row_height: rows.scroll_height,
                total_column_width: self.columns.scrollable_width(),
            },
        }
    }

    /// Recomputes at the last known scroll position.
    pub fn refresh(&mut self) -> TableUpdate {
        self.update_scroll_position(self.scroll_top(), self.scroll_left())
    }

    pub fn scroll_top(&self) -> u64 {
        self.rows.scroll_top()
    }

    pub fn scroll_left(&self) -> u64 {
        self.columns.scroll_left()
    }

    pub fn total_row_height(&self) -> u64 {
        self.rows.scroll_height()
    }

    /// Width of the scrollable columns (fixed columns excluded).
    pub fn total_column_width(&self) -> u64 {
        self.columns.scrollable_width()
    }

    pub fn fixed_left_width(&self) -> u64 {
        self.columns.fixed_left_width()
    }

    pub fn fixed_right_width(&self) -> u64 {
        self.columns.fixed_right_width()
    }

    pub fn max_scroll_top(&self) -> u64 {
        self.rows.max_scroll_top()
    }

    pub fn max_scroll_left(&self) -> u64 {
        self.columns.max_scroll_left(self.config.container_width)
    }

    /// The last computed range (empty axes before their first update).
    pub fn visible_range(&self) -> TableRange {
        let rows = self.rows.visible_range();
        let columns = self.columns.last_window().unwrap_or_default();
        TableRange {
            rows: rows.span,
            columns: columns.span,
            row_offset_top: rows.offset_top,
            column_offset_left: columns.offset,
            total_row_height: rows.total_height,
            total_column_width: self.total_column_width(),
        }
    }

    /// Rows in the last computed range.
    pub fn visible_rows(&self) -> &[Item<RK, T>] {
        self.rows.visible_items()
    }

    /// Fixed columns plus the scrollable columns in the last computed range, in declaration
    /// order.
    pub fn visible_columns(&self) -> impl Iterator<Item = &Column<CK>> + '_ {
        self.columns.visible()
    }

    pub fn row_position(&self, index: usize) -> Option<ItemPosition> {
        self.rows.item_position(index)
    }

    pub fn column_position(&self, index: usize) -> Option<ColumnPosition> {
        self.columns.position(index)
    }

    /// Scroll offset that puts row `index` (clamped) at the top.
    pub fn scroll_to_row(&self, index: usize) -> u64 {
        self.rows.scroll_to_index(index)
    }

    /// Scroll offset that puts column `id` at the left edge of the scrollable strip.
    pub fn scroll_to_column(&self, id: &CK) -> Option<u64> {
        self.columns.scroll_to(id)
    }

    /// Records a measured height for row `id`. Returns the change in total row height.
    pub fn set_row_height(&mut self, id: &RK, height: u32) -> i64 {
        self.rows.set_item_height(id, height)
    }

    /// Sets the width of column `id`, subject to its min/max bounds. Returns the change in that
    /// column's width.
    pub fn set_column_width(&mut self, id: &CK, width: u32) -> i64 {
        self.columns.set_width(id, width, self.config.column_width)
    }
}
