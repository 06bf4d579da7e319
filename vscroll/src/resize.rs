use crate::height::sanitize;

/// Measured size of the scrollable container, plus an optional caller-supplied height.
///
/// Resize observations always update the measured values, but an explicit height wins when
/// reporting the effective height. The width is never overridden.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerSize {
    measured_width: f64,
    measured_height: f64,
    explicit_height: Option<f64>,
}

impl ContainerSize {
    pub fn new(explicit_height: Option<f64>) -> Self {
        Self {
            measured_width: 0.0,
            measured_height: 0.0,
            explicit_height: explicit_height.map(sanitize),
        }
    }

    pub fn width(&self) -> f64 {
        self.measured_width
    }

    pub fn height(&self) -> f64 {
        self.explicit_height.unwrap_or(self.measured_height)
    }

    pub fn measured_height(&self) -> f64 {
        self.measured_height
    }

    pub fn explicit_height(&self) -> Option<f64> {
        self.explicit_height
    }

    pub fn set_explicit_height(&mut self, height: Option<f64>) {
        self.explicit_height = height.map(sanitize);
    }

    /// Applies a resize observation.
    ///
    /// Returns `true` when the effective width or height changed.
    pub fn observe(&mut self, width: f64, height: f64) -> bool {
        let before = (self.width(), self.height());
        self.measured_width = sanitize(width);
        self.measured_height = sanitize(height);
        vtrace!(width, height, "ContainerSize::observe");
        before != (self.width(), self.height())
    }
}
