use crate::scroll::DEFAULT_SCROLLING_DELAY_MS;

/// Default number of items rendered beyond each edge of the viewport.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Configuration for [`crate::VirtualList`].
///
/// Options are plain data and cheap to clone: update a few fields and hand them back to
/// `VirtualList::set_options`, which decides what has to be rebuilt.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListOptions {
    pub overscan: usize,

    /// Explicit viewport height. When set, measured container heights are ignored.
    pub container_height: Option<f64>,

    /// Debounce before `is_scrolling` resets after the last scroll event.
    pub scrolling_delay_ms: u64,

    /// Space between consecutive items.
    pub gap: f64,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            overscan: DEFAULT_OVERSCAN,
            container_height: None,
            scrolling_delay_ms: DEFAULT_SCROLLING_DELAY_MS,
            gap: 0.0,
        }
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_container_height(mut self, container_height: Option<f64>) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn with_scrolling_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scrolling_delay_ms = delay_ms;
        self
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }
}

/// Column width policy for [`crate::VirtualGrid`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnWidth {
    /// A fixed pixel width per column.
    Fixed(f64),
    /// Split the container width evenly between columns, minus the gaps.
    #[default]
    Auto,
}

/// Configuration for [`crate::VirtualGrid`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridOptions {
    /// Number of columns. `0` is treated as `1`.
    pub column_count: usize,
    pub column_width: ColumnWidth,
    /// Uniform row height; there is no variable-row-height grid mode.
    pub row_height: f64,
    /// Space between rows and between columns.
    pub gap: f64,
    /// Rows rendered beyond each edge of the viewport.
    pub overscan: usize,
    pub container_height: Option<f64>,
    pub scrolling_delay_ms: u64,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            column_count: 1,
            column_width: ColumnWidth::Auto,
            row_height: 0.0,
            gap: 0.0,
            overscan: DEFAULT_OVERSCAN,
            container_height: None,
            scrolling_delay_ms: DEFAULT_SCROLLING_DELAY_MS,
        }
    }
}

impl GridOptions {
    pub fn new(column_count: usize, row_height: f64) -> Self {
        Self {
            column_count,
            row_height,
            ..Self::default()
        }
    }

    pub fn with_column_count(mut self, column_count: usize) -> Self {
        self.column_count = column_count;
        self
    }

    pub fn with_column_width(mut self, column_width: ColumnWidth) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_container_height(mut self, container_height: Option<f64>) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn with_scrolling_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scrolling_delay_ms = delay_ms;
        self
    }
}
