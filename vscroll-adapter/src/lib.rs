//! Host glue for the `vscroll` engine.
//!
//! The `vscroll` crate is UI-agnostic: it turns scroll and size observations into frames. This
//! crate binds an engine to a host scroll container and owns the lifecycle around it:
//!
//! - attaching to a container and tearing down on detach/drop
//! - scroll and resize event forwarding, with the single `is_scrolling` debounce deadline
//! - scroll-to-index, either host-native smooth scrolling or a tween driven from `tick`
//! - an `on_end_reached` callback for infinite-scroll pagination
//!
//! No UI framework is bound here; implement [`ScrollContainer`] for the host's element.
//!
//! ```
//! use vscroll::{HeightSpec, ListOptions, VirtualList};
//! use vscroll_adapter::{Controller, ControllerOptions, SimulatedContainer};
//!
//! let items: Vec<u32> = (0..1_000).collect();
//! let spec = HeightSpec::Fixed(40.0);
//!
//! let mut list = VirtualList::new(ListOptions::default());
//! list.sync(items.len(), &spec);
//!
//! let mut c = Controller::new(list, ControllerOptions::default());
//! c.attach(SimulatedContainer::new(320.0, 400.0, 40_000.0));
//!
//! c.container_mut().unwrap().scroll_top = 4_000.0;
//! c.on_scroll_event(0);
//!
//! let frame = c.engine_mut().render(&items, &spec);
//! assert_eq!(frame.range.map(|r| r.visible.start_index), Some(100));
//! assert!(frame.is_scrolling);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;
mod tween;
mod windowed;


pub use controller::{Controller, ControllerOptions, DEFAULT_END_REACHED_THRESHOLD, SmoothScroll};
pub use host::{ScrollBehavior, ScrollContainer, SimulatedContainer};
pub use tween::{Easing, Tween};
pub use windowed::Windowed;
