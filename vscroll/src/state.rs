/// A lightweight, serializable snapshot of the viewport an engine resolves against.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_top: f64,
    /// Effective height: the explicit override when one is set, otherwise the measured one.
    pub container_height: f64,
    pub container_width: f64,
}

/// A lightweight, serializable snapshot of the scroll session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub scroll_top: f64,
    pub is_scrolling: bool,
}
