use crate::Align;

/// Default debounce before `is_scrolling` resets after the last scroll event.
pub const DEFAULT_SCROLLING_DELAY_MS: u64 = 150;

/// Tracks the latest scroll position and a debounced "is scrolling" flag.
///
/// The session owns at most one pending deadline. Every scroll event cancels the previous
/// deadline and arms a new one (debounce, not throttle); [`Self::tick`] fires it.
///
/// Time is supplied by the caller in milliseconds, so the session holds no timer handles and
/// works the same under a real event loop and in tests.
#[derive(Clone, Debug)]
pub struct ScrollSession {
    scroll_top: f64,
    is_scrolling: bool,
    delay_ms: u64,
    deadline_ms: Option<u64>,
}

impl ScrollSession {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            scroll_top: 0.0,
            is_scrolling: false,
            delay_ms,
            deadline_ms: None,
        }
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Changes the debounce delay. An already armed deadline keeps its original instant.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    /// The instant at which the pending debounce fires, if one is armed.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Records a scroll event. The last reported position always wins.
    pub fn on_scroll(&mut self, scroll_top: f64, now_ms: u64) {
        vtrace!(scroll_top, now_ms, "ScrollSession::on_scroll");
        self.scroll_top = if scroll_top.is_nan() { 0.0 } else { scroll_top };
        self.is_scrolling = true;
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Moves the scroll position without starting a scroll burst.
    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_top = if scroll_top.is_nan() { 0.0 } else { scroll_top };
    }

    /// Fires the debounce if its deadline has passed.
    ///
    /// Returns `true` exactly once per scroll burst: on the tick that flips `is_scrolling` back
    /// to `false`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(deadline) = self.deadline_ms else {
            return false;
        };
        if now_ms < deadline {
            return false;
        }
        self.deadline_ms = None;
        let was_scrolling = core::mem::replace(&mut self.is_scrolling, false);
        if was_scrolling {
            vtrace!(now_ms, "ScrollSession: scrolling settled");
        }
        was_scrolling
    }

    /// Drops the pending deadline and clears the scrolling flag.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
        self.is_scrolling = false;
    }
}

impl Default for ScrollSession {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLLING_DELAY_MS)
    }
}

/// Scroll position that brings an item at `offset` with `item_height` into view.
///
/// The result is clamped to `>= 0`; clamping against the end of the content is left to the
/// resolver (and to the host's own scroll limits).
pub fn scroll_top_for(offset: f64, item_height: f64, container_height: f64, align: Align) -> f64 {
    let target = match align {
        Align::Start => offset,
        Align::Center => offset - (container_height - item_height) / 2.0,
        Align::End => offset - container_height + item_height,
    };
    if target.is_nan() { 0.0 } else { target.max(0.0) }
}
