use alloc::vec::Vec;

use crate::offsets::OffsetIndex;
use crate::{VirtualItem, VisibleRange};

/// Calls `f` for each item of `range`, in ascending index order.
///
/// Indexes without a backing element in `items` are skipped, so a stale range can never
/// index out of bounds.
pub fn for_each_item<'a, T>(
    index: &OffsetIndex,
    items: &'a [T],
    range: VisibleRange,
    mut f: impl FnMut(VirtualItem<'a, T>),
) {
    let end = range.end_index.min(index.len().min(items.len()).saturating_sub(1));
    if index.is_empty() || items.is_empty() || range.start_index > end {
        return;
    }
    for i in range.start_index..=end {
        f(VirtualItem {
            index: i,
            data: &items[i],
            offset_top: index.start_of(i),
            height: index.height_unchecked(i),
        });
    }
}

/// Materializes the descriptors for `range` into `out` (clears `out` first).
pub fn collect_items_into<'a, T>(
    index: &OffsetIndex,
    items: &'a [T],
    range: VisibleRange,
    out: &mut Vec<VirtualItem<'a, T>>,
) {
    out.clear();
    out.reserve(range.count());
    for_each_item(index, items, range, |it| out.push(it));
}

/// Materializes the descriptors for `range` into a fresh `Vec`.
pub fn project<'a, T>(
    index: &OffsetIndex,
    items: &'a [T],
    range: VisibleRange,
) -> Vec<VirtualItem<'a, T>> {
    let mut out = Vec::new();
    collect_items_into(index, items, range, &mut out);
    out
}
