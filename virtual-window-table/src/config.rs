use virtual_window::ListConfig;

/// Configuration for [`crate::VirtualTable`].
///
/// `buffer_size` and `overscan` apply to both axes and are summed into one margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableConfig {
    /// Height of rows without an explicit height.
    pub row_height: u32,
    /// Width of columns declared with a zero width.
    pub column_width: u32,
    pub container_height: u32,
    /// Full viewport width, fixed columns included.
    pub container_width: u32,
    pub buffer_size: usize,
    pub overscan: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_height: 40,
            column_width: 120,
            container_height: 0,
            container_width: 0,
            buffer_size: 5,
            overscan: 2,
        }
    }
}

impl TableConfig {
    pub fn new(row_height: u32, column_width: u32) -> Self {
        Self {
            row_height,
            column_width,
            ..Self::default()
        }
    }

    pub fn with_container(mut self, width: u32, height: u32) -> Self {
        self.container_width = width;
        self.container_height = height;
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

    pub fn margin(&self) -> usize {
        self.buffer_size.saturating_add(self.overscan)
    }

    /// The row axis as a list configuration.
    pub fn rows(&self) -> ListConfig {
        ListConfig {
            item_height: self.row_height,
            container_height: self.container_height,
            buffer_size: self.buffer_size,
            overscan: self.overscan,
        }
    }

    pub(crate) fn sanitized(mut self) -> Self {
        if self.row_height == 0 {
            vwarn!("TableConfig: zero row_height clamped to 1");
            self.row_height = 1;
        }
        if self.column_width == 0 {
            vwarn!("TableConfig: zero column_width clamped to 1");
            self.column_width = 1;
        }
        self
    }
}
