use alloc::vec::Vec;

use crate::height::sanitize;
use crate::offsets::OffsetIndex;
use crate::resize::ContainerSize;
use crate::scroll::{ScrollSession, scroll_top_for};
use crate::{
    Align, CellRect, ColumnWidth, GridCell, GridOptions, HeightSpec, Phase, ResolvedRange,
    ViewportState, range,
};

/// Pure layout math mapping a flat item list onto a uniform row/column grid.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub item_count: usize,
    pub column_count: usize,
    pub row_count: usize,
    pub column_width: f64,
    pub row_height: f64,
    pub gap: f64,
}

impl GridLayout {
    /// Computes the layout for `item_count` items in a container `container_width` wide.
    ///
    /// `column_count == 0` is treated as `1`; negative lengths are treated as `0`.
    pub fn new(item_count: usize, options: &GridOptions, container_width: f64) -> Self {
        let column_count = sanitize_column_count(options.column_count);
        let gap = sanitize(options.gap);
        let column_width = match options.column_width {
            ColumnWidth::Fixed(w) => sanitize(w),
            ColumnWidth::Auto => auto_column_width(container_width, column_count, gap),
        };
        Self {
            item_count,
            column_count,
            row_count: item_count.div_ceil(column_count),
            column_width,
            row_height: sanitize(options.row_height),
            gap,
        }
    }

    /// `row_count * row_height + (row_count - 1) * gap`, or `0` without rows.
    pub fn total_height(&self) -> f64 {
        if self.row_count == 0 {
            return 0.0;
        }
        self.row_count as f64 * self.row_height + (self.row_count - 1) as f64 * self.gap
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.column_count
    }

    pub fn col_of(&self, index: usize) -> usize {
        index % self.column_count
    }

    pub fn row_top(&self, row: usize) -> f64 {
        row as f64 * (self.row_height + self.gap)
    }

    pub fn col_left(&self, col: usize) -> f64 {
        col as f64 * (self.column_width + self.gap)
    }

    /// Rectangle of item `index`, or `None` when it does not exist.
    pub fn cell_rect(&self, index: usize) -> Option<CellRect> {
        if index >= self.item_count {
            return None;
        }
        Some(CellRect {
            top: self.row_top(self.row_of(index)),
            left: self.col_left(self.col_of(index)),
            width: self.column_width,
            height: self.row_height,
        })
    }
}

/// Width of each column when the container width is split evenly, gaps excluded.
pub fn auto_column_width(container_width: f64, column_count: usize, gap: f64) -> f64 {
    let cols = column_count.max(1);
    let gaps = (cols - 1) as f64 * sanitize(gap);
    sanitize((sanitize(container_width) - gaps) / cols as f64)
}

fn sanitize_column_count(column_count: usize) -> usize {
    column_count.max(1)
}

fn warn_on_invalid(options: &GridOptions) {
    if options.column_count == 0 {
        vwarn!("VirtualGrid: column_count must be at least 1, using 1");
    }
    if options.row_height.is_nan() || options.row_height < 0.0 {
        vwarn!(row_height = options.row_height, "VirtualGrid: invalid row_height, using 0");
    }
}

/// Everything a caller needs to draw one frame of a virtual grid.
#[derive(Debug)]
pub struct GridFrame<'a, T> {
    /// Positioned cells for the overscanned rows, in index order.
    pub cells: Vec<GridCell<'a, T>>,
    pub total_height: f64,
    pub is_scrolling: bool,
    pub layout: GridLayout,
    /// Resolved *row* range; `None` when the grid is empty.
    pub rows: Option<ResolvedRange>,
}

impl<T> GridFrame<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A headless windowed grid engine.
///
/// Rows are resolved with the same resolver as [`crate::VirtualList`], over a uniform row
/// index with `gap` between rows. The column width is derived from the current container width
/// on every query, so `ColumnWidth::Auto` follows resizes without touching row offsets.
#[derive(Clone, Debug)]
pub struct VirtualGrid {
    options: GridOptions,
    item_count: usize,
    rows: OffsetIndex,
    size: ContainerSize,
    session: ScrollSession,
    stale: bool,
}

impl VirtualGrid {
    pub fn new(options: GridOptions) -> Self {
        vdebug!(
            column_count = options.column_count,
            row_height = options.row_height,
            "VirtualGrid::new"
        );
        warn_on_invalid(&options);
        Self {
            item_count: 0,
            rows: OffsetIndex::empty(),
            size: ContainerSize::new(options.container_height),
            session: ScrollSession::new(options.scrolling_delay_ms),
            stale: true,
            options,
        }
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: GridOptions) {
        if options.column_count != self.options.column_count
            || sanitize(options.row_height) != sanitize(self.options.row_height)
            || sanitize(options.gap) != sanitize(self.options.gap)
        {
            self.stale = true;
        }
        warn_on_invalid(&options);
        self.size.set_explicit_height(options.container_height);
        self.session.set_delay_ms(options.scrolling_delay_ms);
        self.options = options;
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut GridOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// The layout for the current item count and container width.
    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.item_count, &self.options, self.size.width())
    }

    /// Brings the row index up to date for `count` items.
    pub fn sync(&mut self, count: usize) {
        if !self.stale && count == self.item_count {
            return;
        }
        self.item_count = count;
        let layout = self.layout();
        let spec = HeightSpec::Fixed(layout.row_height);
        if self.stale || !self.rows.is_built_for(layout.row_count, &spec, layout.gap) {
            vdebug!(
                count,
                rows = layout.row_count,
                "VirtualGrid: rebuilding row index"
            );
            self.rows = OffsetIndex::build(layout.row_count, &spec, layout.gap);
        }
        self.stale = false;
    }

    /// Resolves, projects and returns the current frame.
    pub fn render<'a, T>(&mut self, items: &'a [T]) -> GridFrame<'a, T> {
        self.sync(items.len());
        let layout = self.layout();
        let rows = self.resolved_rows();
        let mut cells = Vec::new();
        if let Some(r) = rows {
            cells.reserve(r.overscanned.count() * layout.column_count);
            for_each_cell(&layout, items, r, |cell| cells.push(cell));
        }
        GridFrame {
            cells,
            total_height: layout.total_height(),
            is_scrolling: self.session.is_scrolling(),
            layout,
            rows,
        }
    }

    /// Iterates the current overscanned cells without allocating.
    pub fn for_each_cell<'a, T>(&self, items: &'a [T], f: impl FnMut(GridCell<'a, T>)) {
        if let Some(r) = self.resolved_rows() {
            for_each_cell(&self.layout(), items, r, f);
        }
    }

    pub fn len(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn total_height(&self) -> f64 {
        self.rows.total_height()
    }

    pub fn container_height(&self) -> f64 {
        self.size.height()
    }

    pub fn container_width(&self) -> f64 {
        self.size.width()
    }

    pub fn scroll_top(&self) -> f64 {
        self.session.scroll_top()
    }

    pub fn is_scrolling(&self) -> bool {
        self.session.is_scrolling()
    }

    pub fn phase(&self) -> Phase {
        if self.item_count == 0 {
            Phase::Idle
        } else if self.session.is_scrolling() {
            Phase::Scrolling
        } else {
            Phase::Populated
        }
    }

    pub fn on_scroll(&mut self, scroll_top: f64, now_ms: u64) {
        self.session.on_scroll(scroll_top, now_ms);
    }

    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.session.tick(now_ms)
    }

    pub fn scroll_deadline(&self) -> Option<u64> {
        self.session.deadline()
    }

    pub fn cancel_scrolling(&mut self) {
        self.session.cancel();
    }

    /// Applies a container resize observation.
    ///
    /// A width change only affects `ColumnWidth::Auto`; row offsets are left alone.
    pub fn on_resize(&mut self, width: f64, height: f64) -> bool {
        self.size.observe(width, height)
    }

    /// The resolved *row* range for the current viewport.
    pub fn resolved_rows(&self) -> Option<ResolvedRange> {
        if self.item_count == 0 {
            return None;
        }
        range::resolve(
            &self.rows,
            self.session.scroll_top(),
            self.size.height(),
            self.options.overscan,
        )
    }

    /// Scroll position that aligns the row holding item `index`.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn scroll_target(&self, index: usize, align: Align) -> Option<f64> {
        if index >= self.item_count {
            return None;
        }
        let layout = self.layout();
        let row = layout.row_of(index);
        let offset = self.rows.offset(row)?;
        Some(scroll_top_for(
            offset,
            layout.row_height,
            self.size.height(),
            align,
        ))
    }

    /// Jumps to the row holding `index`, clamped to the last full page.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> Option<f64> {
        let target = self.scroll_target(index, align)?;
        let top = range::clamp_scroll_top(&self.rows, target, self.size.height());
        self.session.set_scroll_top(top);
        Some(top)
    }

    pub fn is_end_reached(&self, threshold: f64) -> bool {
        let view = self.size.height();
        let top = range::clamp_scroll_top(&self.rows, self.session.scroll_top(), view);
        self.rows.total_height() - top - view < threshold
    }

    pub fn viewport(&self) -> ViewportState {
        ViewportState {
            scroll_top: self.session.scroll_top(),
            container_height: self.size.height(),
            container_width: self.size.width(),
        }
    }

    pub fn restore_viewport(&mut self, viewport: ViewportState) {
        self.size
            .observe(viewport.container_width, viewport.container_height);
        self.session.set_scroll_top(viewport.scroll_top);
    }
}

impl Default for VirtualGrid {
    fn default() -> Self {
        Self::new(GridOptions::default())
    }
}

/// Emits every existing cell of the overscanned rows, row by row.
fn for_each_cell<'a, T>(
    layout: &GridLayout,
    items: &'a [T],
    rows: ResolvedRange,
    mut f: impl FnMut(GridCell<'a, T>),
) {
    let count = layout.item_count.min(items.len());
    for row in rows.overscanned.indices() {
        let top = layout.row_top(row);
        for col in 0..layout.column_count {
            let index = row * layout.column_count + col;
            if index >= count {
                return;
            }
            f(GridCell {
                index,
                data: &items[index],
                row,
                col,
                top,
                left: layout.col_left(col),
                width: layout.column_width,
                height: layout.row_height,
            });
        }
    }
}
