use alloc::vec::Vec;

use crate::height::{HeightSpec, sanitize};

#[derive(Clone, Debug)]
enum Layout {
    /// Every item has the same height; offsets are computed on demand.
    Uniform { height: f64 },
    /// `starts[i]` is the sum of `heights[j] + gap` for `j < i` (len = count + 1).
    Table { starts: Vec<f64>, heights: Vec<f64> },
}

/// Prefix-sum table mapping an item index to its pixel offset.
///
/// Offsets satisfy `offset(0) == 0`, `offset(i) <= offset(i + 1)` and
/// `offset(len) == total_height()`. A `gap` is inserted between consecutive items (never after
/// the last one); for lookups, a point inside a gap belongs to the item before it.
#[derive(Clone, Debug)]
pub struct OffsetIndex {
    count: usize,
    gap: f64,
    spec: HeightSpec,
    layout: Layout,
}

impl OffsetIndex {
    /// Builds the index for `count` items.
    ///
    /// Fixed heights build in `O(1)`. Dynamic heights call the height function once per item.
    pub fn build(count: usize, spec: &HeightSpec, gap: f64) -> Self {
        let gap = sanitize(gap);
        let layout = match spec {
            HeightSpec::Fixed(h) => {
                if h.is_nan() || *h < 0.0 {
                    vwarn!(height = *h, "OffsetIndex: invalid fixed height, using 0");
                }
                Layout::Uniform {
                    height: sanitize(*h),
                }
            }
            HeightSpec::Dynamic(_) => {
                let mut starts = Vec::with_capacity(count + 1);
                let mut heights = Vec::with_capacity(count);
                starts.push(0.0);
                push_heights(&mut starts, &mut heights, spec, 0..count, gap);
                Layout::Table { starts, heights }
            }
        };
        vdebug!(count, fixed = spec.is_fixed(), "OffsetIndex::build");
        Self {
            count,
            gap,
            spec: spec.clone(),
            layout,
        }
    }

    pub fn empty() -> Self {
        Self::build(0, &HeightSpec::Fixed(0.0), 0.0)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn spec(&self) -> &HeightSpec {
        &self.spec
    }

    /// Returns `true` when this index was built for exactly these inputs.
    pub fn is_built_for(&self, count: usize, spec: &HeightSpec, gap: f64) -> bool {
        self.count == count && self.gap == sanitize(gap) && self.spec.same_as(spec)
    }

    /// Appends items `len()..new_count` using the cumulative total as the starting point.
    ///
    /// If `spec` is not the spec this index was built with, the index is rebuilt instead.
    /// Shrinking delegates to [`Self::truncate`].
    pub fn extend(&mut self, new_count: usize, spec: &HeightSpec) {
        if !self.spec.same_as(spec) {
            *self = Self::build(new_count, spec, self.gap);
            return;
        }
        if new_count <= self.count {
            self.truncate(new_count);
            return;
        }
        vtrace!(from = self.count, to = new_count, "OffsetIndex::extend");
        if let Layout::Table { starts, heights } = &mut self.layout {
            starts.reserve(new_count - self.count);
            heights.reserve(new_count - self.count);
            push_heights(starts, heights, spec, self.count..new_count, self.gap);
        }
        self.count = new_count;
    }

    pub fn truncate(&mut self, new_count: usize) {
        if new_count >= self.count {
            return;
        }
        if let Layout::Table { starts, heights } = &mut self.layout {
            starts.truncate(new_count + 1);
            heights.truncate(new_count);
        }
        self.count = new_count;
    }

    pub fn total_height(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        match &self.layout {
            Layout::Uniform { height } => {
                self.count as f64 * height + (self.count - 1) as f64 * self.gap
            }
            Layout::Table { starts, .. } => starts[self.count] - self.gap,
        }
    }

    /// Offset of item `index`, or the total height when `index == len()`.
    pub fn offset(&self, index: usize) -> Option<f64> {
        match index.cmp(&self.count) {
            core::cmp::Ordering::Less => Some(self.start_of(index)),
            core::cmp::Ordering::Equal => Some(self.total_height()),
            core::cmp::Ordering::Greater => None,
        }
    }

    /// Height of item `index` (gap excluded).
    pub fn height(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.height_unchecked(index))
    }

    /// Materializes `len() + 1` offsets. Intended for inspection and tests.
    pub fn to_offsets(&self) -> Vec<f64> {
        (0..=self.count).filter_map(|i| self.offset(i)).collect()
    }

    /// Returns the item occupying `position`.
    ///
    /// On an exact item boundary this is the first item starting at `position`, so zero-height
    /// items sitting there are included. Positions before the first item map to `0`, positions
    /// past the end map to the last item. Returns `None` for an empty index.
    pub fn index_at(&self, position: f64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let last = self.count - 1;
        if position.is_nan() || position <= 0.0 {
            return Some(0);
        }
        let consumed = match &self.layout {
            Layout::Uniform { height } => {
                let stride = height + self.gap;
                if stride <= 0.0 {
                    last
                } else {
                    // Truncation is floor for positive values.
                    (position / stride) as usize
                }
            }
            Layout::Table { starts, .. } => {
                let first = starts[..self.count].partition_point(|&s| s < position);
                if first < self.count && starts[first] == position {
                    first
                } else {
                    // Items whose segment (height + trailing gap) ends at or before `position`.
                    starts[1..self.count].partition_point(|&e| e <= position)
                }
            }
        };
        Some(consumed.min(last))
    }

    /// Number of items whose top edge lies strictly before `position`.
    pub fn count_starting_before(&self, position: f64) -> usize {
        if self.count == 0 || position.is_nan() || position <= 0.0 {
            return 0;
        }
        match &self.layout {
            Layout::Uniform { height } => {
                let stride = height + self.gap;
                if stride <= 0.0 {
                    return self.count;
                }
                ceil_to_usize(position / stride).min(self.count)
            }
            Layout::Table { starts, .. } => {
                starts[..self.count].partition_point(|&s| s < position)
            }
        }
    }

    pub(crate) fn start_of(&self, index: usize) -> f64 {
        match &self.layout {
            Layout::Uniform { height } => index as f64 * (height + self.gap),
            Layout::Table { starts, .. } => starts[index],
        }
    }

    pub(crate) fn height_unchecked(&self, index: usize) -> f64 {
        match &self.layout {
            Layout::Uniform { height } => *height,
            Layout::Table { heights, .. } => heights[index],
        }
    }
}

impl Default for OffsetIndex {
    fn default() -> Self {
        Self::empty()
    }
}

fn push_heights(
    starts: &mut Vec<f64>,
    heights: &mut Vec<f64>,
    spec: &HeightSpec,
    indexes: core::ops::Range<usize>,
    gap: f64,
) {
    let mut cursor = starts.last().copied().unwrap_or(0.0);
    for i in indexes {
        let h = spec.height_of(i);
        heights.push(h);
        cursor += h + gap;
        starts.push(cursor);
    }
}

fn ceil_to_usize(v: f64) -> usize {
    let floor = v as usize;
    if (floor as f64) < v { floor + 1 } else { floor }
}
