//! A headless windowed render engine for virtual lists and grids.
//!
//! For host attachment, timers and smooth scrolling, see the `vscroll-adapter` crate.
//!
//! This crate focuses on the layout math needed to render massive item lists at interactive
//! frame rates: prefix sums over item heights, binary-searched visible ranges with overscan,
//! positioned item descriptors, a debounced scrolling flag, and a uniform-row grid variant.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the container size (from its resize observer)
//! - scroll positions (from its scroll events)
//! - a clock, in milliseconds, to drive the `is_scrolling` debounce
//!
//! ```
//! use vscroll::{HeightSpec, ListOptions, VirtualList};
//!
//! let items: Vec<u32> = (0..1_000).collect();
//! let mut list = VirtualList::new(ListOptions::default());
//! list.on_resize(320.0, 600.0);
//!
//! let frame = list.render(&items, &HeightSpec::Fixed(50.0));
//! assert_eq!(frame.total_height, 50_000.0);
//! assert_eq!(frame.items.first().map(|it| it.index), Some(0));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod grid;
mod height;
mod list;
mod offsets;
mod options;
mod projector;
mod range;
mod resize;
mod scroll;
mod state;
mod types;

#[cfg(test)]
mod properties;

pub use grid::{GridFrame, GridLayout, VirtualGrid, auto_column_width};
pub use height::{HeightFn, HeightSpec};
pub use list::{ListFrame, VirtualList};
pub use offsets::OffsetIndex;
pub use options::{ColumnWidth, DEFAULT_OVERSCAN, GridOptions, ListOptions};
pub use projector::{collect_items_into, for_each_item, project};
pub use range::{clamp_scroll_top, max_scroll_top, resolve};
pub use resize::ContainerSize;
pub use scroll::{DEFAULT_SCROLLING_DELAY_MS, ScrollSession, scroll_top_for};
pub use state::{ScrollState, ViewportState};
pub use types::{Align, CellRect, GridCell, Phase, ResolvedRange, VirtualItem, VisibleRange};
