use core::ops::RangeInclusive;

/// Where a `scroll_to_index` target lands inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// A contiguous run of item indexes.
///
/// Both ends are inclusive: a non-empty list always resolves to at least one index, so an
/// empty range is expressed as `None` by the resolver instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl VisibleRange {
    /// Number of indexes covered.
    pub fn count(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&index)
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start_index..=self.end_index
    }
}

/// Output of the visible range resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedRange {
    /// Items intersecting the viewport (no overscan).
    pub visible: VisibleRange,
    /// `visible` expanded by `overscan` on both sides, clamped to the list bounds.
    pub overscanned: VisibleRange,
}

/// A positioned list item, ready to be handed to the caller's render function.
///
/// Descriptors are ephemeral: they borrow the caller's item slice and are rebuilt on every
/// render pass.
#[derive(Debug)]
pub struct VirtualItem<'a, T> {
    pub index: usize,
    pub data: &'a T,
    /// Distance from the top of the scrollable content to the item's top edge.
    pub offset_top: f64,
    /// Item height, excluding any gap.
    pub height: f64,
}

impl<T> VirtualItem<'_, T> {
    pub fn offset_bottom(&self) -> f64 {
        self.offset_top + self.height
    }
}

impl<T> Clone for VirtualItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VirtualItem<'_, T> {}

/// Pixel rectangle of a grid cell, relative to the top-left of the scrollable content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Returns `true` when both rectangles share a region of positive area.
    pub fn overlaps(&self, other: &CellRect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// A positioned grid cell.
#[derive(Debug)]
pub struct GridCell<'a, T> {
    pub index: usize,
    pub data: &'a T,
    pub row: usize,
    pub col: usize,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl<T> GridCell<'_, T> {
    pub fn rect(&self) -> CellRect {
        CellRect {
            top: self.top,
            left: self.left,
            width: self.width,
            height: self.height,
        }
    }
}

impl<T> Clone for GridCell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GridCell<'_, T> {}

/// Lifecycle of an engine instance.
///
/// `Idle` (no items) → `Populated` → `Scrolling` → back to `Populated` once the debounce
/// delay elapses. There is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Idle,
    Populated,
    Scrolling,
}
