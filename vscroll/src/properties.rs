//! Property-based tests for the layout invariants.
//!
//! Heights are generated as whole pixels so offset sums are exact in `f64`.

use alloc::vec::Vec;

use proptest::prelude::*;

use crate::{
    Align, ColumnWidth, GridOptions, HeightSpec, OffsetIndex, ScrollSession, VirtualGrid,
    clamp_scroll_top, max_scroll_top, resolve,
};

fn arb_heights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0..120u32).prop_map(f64::from), 0..200)
}

fn dynamic(heights: &[f64]) -> HeightSpec {
    let heights = heights.to_vec();
    HeightSpec::dynamic(move |i| heights[i])
}

proptest! {
    #[test]
    fn offsets_start_at_zero_and_never_decrease(
        heights in arb_heights(),
        gap in 0u32..12,
    ) {
        let index = OffsetIndex::build(heights.len(), &dynamic(&heights), f64::from(gap));
        let offsets = index.to_offsets();
        prop_assert_eq!(offsets.len(), heights.len() + 1);
        prop_assert_eq!(offsets[0], 0.0);
        for w in offsets.windows(2) {
            prop_assert!(w[0] <= w[1], "offsets decreased: {:?}", w);
        }
        prop_assert_eq!(*offsets.last().unwrap(), index.total_height());
    }

    #[test]
    fn fixed_and_dynamic_layouts_agree(
        count in 0usize..300,
        height in 0u32..80,
        gap in 0u32..8,
        probe in 0u32..30_000,
    ) {
        let h = f64::from(height);
        let g = f64::from(gap);
        let fixed = OffsetIndex::build(count, &HeightSpec::Fixed(h), g);
        let table = OffsetIndex::build(count, &HeightSpec::dynamic(move |_| h), g);
        prop_assert_eq!(fixed.to_offsets(), table.to_offsets());
        let p = f64::from(probe);
        prop_assert_eq!(fixed.index_at(p), table.index_at(p));
        prop_assert_eq!(fixed.count_starting_before(p), table.count_starting_before(p));
    }

    #[test]
    fn resolved_range_contains_every_intersecting_item(
        heights in arb_heights(),
        gap in 0u32..6,
        container in 0u32..900,
        fraction in 0.0f64..=1.0,
        overscan in 0usize..6,
    ) {
        let gap = f64::from(gap);
        let index = OffsetIndex::build(heights.len(), &dynamic(&heights), gap);
        let view = f64::from(container);
        let raw = (index.total_height() * fraction).floor();
        let top = clamp_scroll_top(&index, raw, view);

        let Some(r) = resolve(&index, raw, view, overscan) else {
            prop_assert!(heights.is_empty());
            return Ok(());
        };
        let last = heights.len() - 1;
        prop_assert!(r.visible.start_index <= r.visible.end_index);
        prop_assert!(r.visible.end_index <= last);
        prop_assert!(r.overscanned.start_index <= r.visible.start_index);
        prop_assert!(r.overscanned.end_index >= r.visible.end_index);
        prop_assert!(r.overscanned.end_index <= last);
        prop_assert_eq!(
            r.overscanned.start_index,
            r.visible.start_index.saturating_sub(overscan)
        );

        for i in 0..heights.len() {
            let start = index.offset(i).unwrap();
            let end = start + heights[i];
            if start < top + view && end > top {
                prop_assert!(r.visible.contains(i), "item {} missing from {:?}", i, r.visible);
            }
        }

        // A pure function of the index and the viewport.
        prop_assert_eq!(resolve(&index, raw, view, overscan), Some(r));
        prop_assert_eq!(resolve(&index, top, view, overscan), Some(r));
    }

    #[test]
    fn scroll_to_start_puts_the_item_first(
        heights in arb_heights(),
        container in 1u32..900,
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!heights.is_empty());
        let index = OffsetIndex::build(heights.len(), &dynamic(&heights), 0.0);
        let view = f64::from(container);
        let i = pick.index(heights.len());
        let offset = index.offset(i).unwrap();

        let target = crate::scroll_top_for(offset, heights[i], view, Align::Start);
        let r = resolve(&index, target, view, 3).unwrap();
        let max = max_scroll_top(&index, view);
        if target <= max {
            // Zero-height items sharing the offset come first.
            let first = index.to_offsets().iter().position(|&o| o == offset).unwrap();
            prop_assert_eq!(r.visible.start_index, first);
            prop_assert!(r.visible.contains(i));
        } else if offset < max + view {
            // The content ends before a full page starting at `i`; it is still on screen.
            prop_assert!(r.visible.contains(i));
        }
    }

    #[test]
    fn debounce_stays_true_within_delay_and_flips_once(
        delay in 1u64..400,
        gaps in prop::collection::vec(0u64..400, 1..30),
    ) {
        let mut session = ScrollSession::new(delay);
        let mut now = 0u64;
        for (n, g) in gaps.iter().enumerate() {
            // Every event lands strictly inside the previous debounce window.
            let step = g % delay;
            now += step;
            if n > 0 {
                prop_assert!(!session.tick(now));
            }
            session.on_scroll(n as f64, now);
            prop_assert!(session.is_scrolling());
        }
        prop_assert!(!session.tick(now + delay - 1));
        prop_assert!(session.is_scrolling());
        prop_assert!(session.tick(now + delay));
        prop_assert!(!session.is_scrolling());
        prop_assert!(!session.tick(now + 2 * delay));
    }

    #[test]
    fn grid_cells_never_overlap(
        count in 0usize..120,
        columns in 1usize..6,
        row_height in 1u32..300,
        column_width in 1u32..300,
        gap in 0u32..20,
        container in 1u32..1200,
        fraction in 0.0f64..=1.0,
    ) {
        let items: Vec<usize> = (0..count).collect();
        let options = GridOptions::new(columns, f64::from(row_height))
            .with_column_width(ColumnWidth::Fixed(f64::from(column_width)))
            .with_gap(f64::from(gap));
        let mut grid = VirtualGrid::new(options);
        grid.on_resize(2000.0, f64::from(container));
        grid.render(&items);
        grid.on_scroll((grid.total_height() * fraction).floor(), 0);
        let frame = grid.render(&items);

        for (a, ca) in frame.cells.iter().enumerate() {
            prop_assert!(ca.index < count);
            prop_assert_eq!(ca.index, ca.row * columns + ca.col);
            for cb in &frame.cells[a + 1..] {
                prop_assert!(ca.index < cb.index);
                prop_assert!(
                    !ca.rect().overlaps(&cb.rect()),
                    "cells {} and {} overlap",
                    ca.index,
                    cb.index
                );
            }
        }
    }
}
