use vscroll::{Align, ViewportState, VirtualGrid, VirtualList};

/// The engine surface a [`crate::Controller`] drives.
///
/// Implemented for [`VirtualList`] and [`VirtualGrid`]; every method forwards to the engine's
/// inherent method of the same name.
pub trait Windowed {
    fn scroll_top(&self) -> f64;
    fn on_scroll(&mut self, scroll_top: f64, now_ms: u64);
    fn on_resize(&mut self, width: f64, height: f64) -> bool;
    fn tick(&mut self, now_ms: u64) -> bool;
    fn scroll_deadline(&self) -> Option<u64>;
    fn cancel_scrolling(&mut self);
    fn scroll_target(&self, index: usize, align: Align) -> Option<f64>;
    fn is_end_reached(&self, threshold: f64) -> bool;
    fn restore_viewport(&mut self, viewport: ViewportState);
}

macro_rules! forward_windowed {
    ($ty:ty) => {
        impl Windowed for $ty {
            fn scroll_top(&self) -> f64 {
                <$ty>::scroll_top(self)
            }

            fn on_scroll(&mut self, scroll_top: f64, now_ms: u64) {
                <$ty>::on_scroll(self, scroll_top, now_ms)
            }

            fn on_resize(&mut self, width: f64, height: f64) -> bool {
                <$ty>::on_resize(self, width, height)
            }

            fn tick(&mut self, now_ms: u64) -> bool {
                <$ty>::tick(self, now_ms)
            }

            fn scroll_deadline(&self) -> Option<u64> {
                <$ty>::scroll_deadline(self)
            }

            fn cancel_scrolling(&mut self) {
                <$ty>::cancel_scrolling(self)
            }

            fn scroll_target(&self, index: usize, align: Align) -> Option<f64> {
                <$ty>::scroll_target(self, index, align)
            }

            fn is_end_reached(&self, threshold: f64) -> bool {
                <$ty>::is_end_reached(self, threshold)
            }

            fn restore_viewport(&mut self, viewport: ViewportState) {
                <$ty>::restore_viewport(self, viewport)
            }
        }
    };
}

forward_windowed!(VirtualList);
forward_windowed!(VirtualGrid);
