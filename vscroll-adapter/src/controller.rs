use alloc::boxed::Box;
use core::fmt;

use vscroll::{Align, ViewportState};

use crate::{Easing, ScrollBehavior, ScrollContainer, Tween, Windowed};

/// Default distance from the end, in pixels, under which `on_end_reached` fires.
pub const DEFAULT_END_REACHED_THRESHOLD: f64 = 200.0;

/// How [`Controller::scroll_to_index`] moves the container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmoothScroll {
    /// Jump straight to the target.
    Instant,
    /// Ask the host to animate; progress arrives as regular scroll events.
    #[default]
    Native,
    /// Animate from `tick`, writing each frame with `ScrollBehavior::Instant`.
    Tween { duration_ms: u64, easing: Easing },
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerOptions {
    pub smooth_scroll: SmoothScroll,
    pub end_reached_threshold: f64,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            smooth_scroll: SmoothScroll::default(),
            end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
        }
    }
}

impl ControllerOptions {
    pub fn with_smooth_scroll(mut self, smooth_scroll: SmoothScroll) -> Self {
        self.smooth_scroll = smooth_scroll;
        self
    }

    pub fn with_end_reached_threshold(mut self, threshold: f64) -> Self {
        self.end_reached_threshold = threshold;
        self
    }
}

type EndReached = Box<dyn FnMut()>;

/// Binds a windowed engine to a host scroll container.
///
/// The controller owns the attachment: while attached it reads scroll and size information
/// from the container and writes programmatic scrolls back to it. Hosts forward their events:
/// - `on_scroll_event(now_ms)` from the container's scroll listener
/// - `on_resize_event()` from its resize observer
/// - `tick(now_ms)` at [`Self::next_deadline`] (and every frame while a tween runs)
///
/// Detaching, disposing or dropping the controller tears the attachment down: the container is
/// released, the pending `is_scrolling` deadline and any tween are cleared. Events reported
/// while detached are ignored.
pub struct Controller<E: Windowed, C: ScrollContainer> {
    engine: E,
    container: Option<C>,
    options: ControllerOptions,
    tween: Option<Tween>,
    // Last position the tween wrote; a scroll event reporting it is our own echo.
    tween_echo: Option<f64>,
    on_end_reached: Option<EndReached>,
}

impl<E: Windowed, C: ScrollContainer> Controller<E, C> {
    pub fn new(engine: E, options: ControllerOptions) -> Self {
        Self {
            engine,
            container: None,
            options,
            tween: None,
            tween_echo: None,
            on_end_reached: None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    pub fn container_mut(&mut self) -> Option<&mut C> {
        self.container.as_mut()
    }

    pub fn is_attached(&self) -> bool {
        self.container.is_some()
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ControllerOptions) {
        self.options = options;
    }

    /// Registers the infinite-scroll callback, replacing any previous one.
    pub fn set_on_end_reached(&mut self, f: impl FnMut() + 'static) {
        self.on_end_reached = Some(Box::new(f));
    }

    pub fn clear_on_end_reached(&mut self) {
        self.on_end_reached = None;
    }

    /// The running tween, if any.
    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
        self.tween_echo = None;
    }

    pub fn scroll_top(&self) -> f64 {
        self.engine.scroll_top()
    }

    /// Whether the engine's own content is within the end-reached threshold.
    pub fn is_end_reached(&self) -> bool {
        self.engine.is_end_reached(self.options.end_reached_threshold)
    }

    /// Attaches `container` and takes an initial measurement.
    ///
    /// A previously attached container is detached first and returned.
    pub fn attach(&mut self, container: C) -> Option<C> {
        let previous = self.detach();
        let (width, height) = container.client_size();
        let scroll_top = container.scroll_top();
        vdebug!(width, height, scroll_top, "Controller::attach");
        self.engine.restore_viewport(ViewportState {
            scroll_top,
            container_height: height,
            container_width: width,
        });
        self.container = Some(container);
        previous
    }

    /// Releases the container and clears every pending timer and animation.
    pub fn detach(&mut self) -> Option<C> {
        let container = self.container.take()?;
        vdebug!("Controller::detach");
        self.cancel_animation();
        self.engine.cancel_scrolling();
        Some(container)
    }

    /// Detaches and drops the `on_end_reached` callback.
    pub fn dispose(&mut self) {
        self.detach();
        self.on_end_reached = None;
    }

    /// Handles a scroll event from the attached container.
    ///
    /// Returns `false` when detached. A user scroll cancels a running tween.
    pub fn on_scroll_event(&mut self, now_ms: u64) -> bool {
        let Some(container) = self.container.as_ref() else {
            vtrace!(now_ms, "on_scroll_event: detached, ignored");
            return false;
        };
        let top = container.scroll_top();
        let (_, client_height) = container.client_size();
        let remaining = container.scroll_height() - top - client_height;

        if self.tween.is_some() && self.tween_echo != Some(top) {
            vtrace!(top, "on_scroll_event: user scroll cancels tween");
            self.cancel_animation();
        }
        self.engine.on_scroll(top, now_ms);

        if remaining < self.options.end_reached_threshold {
            if let Some(f) = self.on_end_reached.as_mut() {
                vtrace!(remaining, "on_end_reached");
                f();
            }
        }
        true
    }

    /// Re-measures the attached container. Returns `true` when the engine's viewport changed.
    pub fn on_resize_event(&mut self) -> bool {
        let Some(container) = self.container.as_ref() else {
            return false;
        };
        let (width, height) = container.client_size();
        vtrace!(width, height, "on_resize_event");
        self.engine.on_resize(width, height)
    }

    /// Advances the tween, or the `is_scrolling` debounce when no tween runs.
    ///
    /// Returns the position written to the container while animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let container = self.container.as_mut()?;
        let Some(tween) = self.tween else {
            self.engine.tick(now_ms);
            return None;
        };

        container.scroll_to(tween.sample(now_ms), ScrollBehavior::Instant);
        let top = container.scroll_top();
        self.engine.on_scroll(top, now_ms);

        if tween.is_done(now_ms) {
            self.cancel_animation();
        } else {
            self.tween_echo = Some(top);
        }
        Some(top)
    }

    /// The next instant the host should call [`Self::tick`].
    ///
    /// While a tween runs the returned instant is already due, so the host keeps ticking every
    /// frame.
    pub fn next_deadline(&self) -> Option<u64> {
        self.container.as_ref()?;
        match self.tween {
            Some(tween) => Some(tween.start_ms),
            None => self.engine.scroll_deadline(),
        }
    }

    /// Scrolls so that `index` is aligned in the viewport.
    ///
    /// Returns the target position, or `None` (without side effects) when detached or when
    /// `index` is out of range.
    pub fn scroll_to_index(&mut self, index: usize, align: Align, now_ms: u64) -> Option<f64> {
        if self.container.is_none() {
            vwarn!(index, "scroll_to_index: controller is not attached");
            return None;
        }
        let Some(target) = self.engine.scroll_target(index, align) else {
            vtrace!(index, "scroll_to_index: out of range");
            return None;
        };
        self.scroll_to_offset(target, now_ms)
    }

    /// Scrolls to `offset`, clamped to the container's scrollable range.
    pub fn scroll_to_offset(&mut self, offset: f64, now_ms: u64) -> Option<f64> {
        let container = self.container.as_mut()?;
        let (_, client_height) = container.client_size();
        let max = (container.scroll_height() - client_height).max(0.0);
        let to = if offset.is_nan() {
            0.0
        } else {
            offset.clamp(0.0, max)
        };
        vtrace!(to, "scroll_to_offset");

        match self.options.smooth_scroll {
            SmoothScroll::Instant => {
                self.tween = None;
                self.tween_echo = None;
                container.scroll_to(to, ScrollBehavior::Instant);
                let top = container.scroll_top();
                self.engine.on_scroll(top, now_ms);
            }
            SmoothScroll::Native => {
                self.tween = None;
                self.tween_echo = None;
                container.scroll_to(to, ScrollBehavior::Smooth);
            }
            SmoothScroll::Tween {
                duration_ms,
                easing,
            } => match self.tween.as_mut() {
                Some(tween) => tween.retarget(now_ms, to, duration_ms, easing),
                None => {
                    let from = container.scroll_top();
                    let tween = Tween::new(from, to, now_ms, duration_ms, easing);
                    if !tween.is_done(now_ms) {
                        self.tween = Some(tween);
                        self.tween_echo = Some(from);
                    }
                }
            },
        }
        Some(to)
    }
}

impl<E: Windowed, C: ScrollContainer> Drop for Controller<E, C> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<E, C> fmt::Debug for Controller<E, C>
where
    E: Windowed + fmt::Debug,
    C: ScrollContainer + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("engine", &self.engine)
            .field("container", &self.container)
            .field("options", &self.options)
            .field("tween", &self.tween)
            .field("has_on_end_reached", &self.on_end_reached.is_some())
            .finish()
    }
}
