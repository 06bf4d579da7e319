/// A small tween for hosts without native smooth scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

// Closer than this to the target and a frame would not move the content by a whole pixel.
const SETTLE_PX: f64 = 0.5;

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Done once the duration elapsed, or as soon as the eased position is within half a pixel
    /// of `to`. A tween starting within half a pixel of its target is done immediately.
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
            || (self.to - self.position_at(now_ms)).abs() < SETTLE_PX
    }

    /// Position at `now_ms`; snaps to exactly `to` once the tween is done.
    pub fn sample(&self, now_ms: u64) -> f64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        self.position_at(now_ms)
    }

    /// Heads for `new_to` from the current position, with the caller's current easing.
    ///
    /// A target within half a pixel of the running one keeps the tween untouched, so repeated
    /// requests for the same position do not restart the animation.
    pub fn retarget(&mut self, now_ms: u64, new_to: f64, duration_ms: u64, easing: Easing) {
        if (new_to - self.to).abs() < SETTLE_PX {
            self.easing = easing;
            return;
        }
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, easing);
    }

    fn position_at(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = elapsed as f64 / self.duration_ms as f64;
        let v = self.from + (self.to - self.from) * self.easing.sample(t);
        v.max(0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    /// Maps progress `t` onto eased progress in `[0, 1]`; `t` is clamped to `[0, 1]` first.
    pub fn sample(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
