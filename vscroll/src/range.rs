use crate::height::sanitize;
use crate::offsets::OffsetIndex;
use crate::{ResolvedRange, VisibleRange};

/// Largest scroll position that still shows a full viewport.
pub fn max_scroll_top(index: &OffsetIndex, container_height: f64) -> f64 {
    (index.total_height() - sanitize(container_height)).max(0.0)
}

/// Clamps a reported scroll position into `[0, max_scroll_top]`.
///
/// Elastic overscroll (negative positions) resolves to the top; positions past the end
/// resolve to the last full page.
pub fn clamp_scroll_top(index: &OffsetIndex, scroll_top: f64, container_height: f64) -> f64 {
    if scroll_top.is_nan() {
        return 0.0;
    }
    scroll_top.clamp(0.0, max_scroll_top(index, container_height))
}

/// Resolves the items intersecting `[scroll_top, scroll_top + container_height]`.
///
/// The start is the first item whose span reaches past `scroll_top`; the end is the first
/// item starting at or after the viewport's bottom edge, clamped to the list bounds. Both are
/// binary searches, so the cost is `O(log n)` regardless of how many items are visible.
///
/// Returns `None` for an empty index. The result is a pure function of its inputs.
pub fn resolve(
    index: &OffsetIndex,
    scroll_top: f64,
    container_height: f64,
    overscan: usize,
) -> Option<ResolvedRange> {
    let count = index.len();
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let view = sanitize(container_height);
    let top = clamp_scroll_top(index, scroll_top, view);
    let bottom = top + view;

    let start = index.index_at(top)?;
    let end = index.count_starting_before(bottom).min(last).max(start);

    let visible = VisibleRange {
        start_index: start,
        end_index: end,
    };
    let overscanned = VisibleRange {
        start_index: start.saturating_sub(overscan),
        end_index: end.saturating_add(overscan).min(last),
    };
    debug_assert!(overscanned.start_index <= overscanned.end_index);
    Some(ResolvedRange {
        visible,
        overscanned,
    })
}
