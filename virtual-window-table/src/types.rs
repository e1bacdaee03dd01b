use virtual_window::Span;

/// Which edge a fixed column sticks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FixedSide {
    Left,
    Right,
}

/// A table column.
///
/// Fixed columns never scroll horizontally: they are always part of the visible columns and do
/// not contribute to the scrollable width.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column<K> {
    pub id: K,
    /// Preferred width; 0 means "use the table's default column width".
    pub width: u32,
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
    pub fixed: Option<FixedSide>,
}

impl<K> Column<K> {
    pub fn new(id: K, width: u32) -> Self {
        Self {
            id,
            width,
            min_width: None,
            max_width: None,
            fixed: None,
        }
    }

    pub fn with_min_width(mut self, min_width: u32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn with_fixed(mut self, side: FixedSide) -> Self {
        self.fixed = Some(side);
        self
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed.is_some()
    }

    /// Width after applying the default and the min/max bounds (`max_width` wins a conflict).
    /// Never 0.
    pub fn resolved_width(&self, default_width: u32) -> u32 {
        let mut w = if self.width == 0 {
            default_width
        } else {
            self.width
        };
        if let Some(min) = self.min_width {
            w = w.max(min);
        }
        if let Some(max) = self.max_width {
            w = w.min(max);
        }
        w.max(1)
    }
}

/// Placement of one column.
///
/// `left` is relative to the strip the column lives in: the scrollable strip for scrollable
/// columns, the viewport's left edge for left-fixed columns, and the start of the right fixed
/// strip for right-fixed columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnPosition {
    pub left: u64,
    pub width: u32,
    pub fixed: Option<FixedSide>,
}

/// The block of cells a table should render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRange {
    pub rows: Option<Span>,
    /// Indexes into the scrollable (non-fixed) columns, in declaration order.
    pub columns: Option<Span>,
    pub row_offset_top: u64,
    pub column_offset_left: u64,
    pub total_row_height: u64,
    /// Width of the scrollable columns only.
    pub total_column_width: u64,
}

/// Result of feeding a scroll position into [`crate::VirtualTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableUpdate {
    /// `rows_changed || columns_changed`.
    pub needs_update: bool,
    pub rows_changed: bool,
    pub columns_changed: bool,
    pub range: TableRange,
}
