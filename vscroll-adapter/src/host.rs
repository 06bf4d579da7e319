/// How a host container should move to a new scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Instant,
    /// The host animates the scroll itself and reports progress through scroll events.
    Smooth,
}

/// The host's scrollable element.
///
/// Implementations wrap whatever the UI layer uses (a DOM element, a terminal pane, a test
/// double). Lengths are in pixels.
pub trait ScrollContainer {
    fn scroll_top(&self) -> f64;

    /// Inner `(width, height)` of the viewport, scrollbars excluded.
    fn client_size(&self) -> (f64, f64);

    /// Height of the full scrollable content as the host sees it.
    fn scroll_height(&self) -> f64;

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);
}

/// An in-memory container clamping scroll positions to its content.
///
/// Useful for headless hosts and for driving a controller in tests and demos. `Smooth` scrolls
/// land immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatedContainer {
    pub scroll_top: f64,
    pub width: f64,
    pub height: f64,
    pub scroll_height: f64,
}

impl SimulatedContainer {
    pub fn new(width: f64, height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top: 0.0,
            width,
            height,
            scroll_height,
        }
    }

    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height - self.height).max(0.0)
    }
}

impl ScrollContainer for SimulatedContainer {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn client_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn scroll_to(&mut self, top: f64, _behavior: ScrollBehavior) {
        self.scroll_top = if top.is_nan() {
            0.0
        } else {
            top.clamp(0.0, self.max_scroll_top())
        };
    }
}
