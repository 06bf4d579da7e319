use alloc::sync::Arc;

/// A height function mapping an item index to its height in pixels.
pub type HeightFn = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// How tall each item is.
///
/// The offset index dispatches on the variant once, at build time: fixed heights never
/// materialize a table, dynamic heights are walked exactly once per rebuild.
///
/// A dynamic height function must be deterministic for a given item list. Swapping it for a
/// different `Arc` (or changing the fixed value) invalidates the offset index.
#[derive(Clone)]
pub enum HeightSpec {
    Fixed(f64),
    Dynamic(HeightFn),
}

impl HeightSpec {
    pub fn fixed(height: f64) -> Self {
        Self::Fixed(height)
    }

    pub fn dynamic(f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Height of item `index`, with negative or non-finite values treated as `0`.
    ///
    /// Panics raised by a dynamic height function propagate to the caller.
    pub fn height_of(&self, index: usize) -> f64 {
        match self {
            Self::Fixed(h) => sanitize(*h),
            Self::Dynamic(f) => sanitize(f(index)),
        }
    }

    /// Returns `true` when both specs produce the same offsets for the same item count.
    ///
    /// Dynamic specs compare by `Arc` identity, not by behavior.
    pub fn same_as(&self, other: &HeightSpec) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => sanitize(*a) == sanitize(*b),
            (Self::Dynamic(a), Self::Dynamic(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<f64> for HeightSpec {
    fn from(height: f64) -> Self {
        Self::Fixed(height)
    }
}

impl core::fmt::Debug for HeightSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(h) => f.debug_tuple("Fixed").field(h).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Clamps a caller-provided pixel length to a finite, non-negative value.
pub(crate) fn sanitize(px: f64) -> f64 {
    if px.is_finite() && px > 0.0 { px } else { 0.0 }
}
