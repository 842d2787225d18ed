//! Foundation geometry types.
//!
//! Rectangles and points shared by the fit computation, the canvas and the
//! scenes. Rectangles are stored as two corners (`x1,y1` top-left,
//! `x2,y2` bottom-right) in a y-down coordinate space.

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Rectangle with `f64` coordinates.
pub type RectD = Rect<f64>;

impl RectD {
    /// Rectangle anchored at the origin with the given extent.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// True when either extent is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    pub fn center(&self) -> PointD {
        PointD::new((self.x1 + self.x2) * 0.5, (self.y1 + self.y2) * 0.5)
    }

    /// Move by `(dx, dy)` without changing the extent.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }

    /// `true` if `inner` lies within `self`, allowing `epsilon` of slack on
    /// every edge.
    pub fn contains_rect(&self, inner: &RectD, epsilon: f64) -> bool {
        inner.x1 >= self.x1 - epsilon
            && inner.y1 >= self.y1 - epsilon
            && inner.x2 <= self.x2 + epsilon
            && inner.y2 <= self.y2 + epsilon
    }
}

/// Compute the union (bounding box) of two rectangles.
pub fn unite_rectangles<T: Copy + PartialOrd>(r1: &Rect<T>, r2: &Rect<T>) -> Rect<T> {
    let mut r = *r1;
    if r.x2 < r2.x2 {
        r.x2 = r2.x2;
    }
    if r.y2 < r2.y2 {
        r.y2 = r2.y2;
    }
    if r.x1 > r2.x1 {
        r.x1 = r2.x1;
    }
    if r.y1 > r2.y1 {
        r.y1 = r2.y1;
    }
    r
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

pub type PointD = PointBase<f64>;

// ============================================================================
// Approximate equality comparison
// ============================================================================

/// Compare two values for approximate equality, relative to the smaller
/// binary exponent of the two.
pub fn is_equal_eps(v1: f64, v2: f64, epsilon: f64) -> bool {
    if (v1 < 0.0) != (v2 < 0.0) {
        return v1.abs() < epsilon && v2.abs() < epsilon;
    }
    let min_exp = exponent(v1).min(exponent(v2));
    let scale = 2.0_f64.powi(-min_exp);
    (v1 * scale - v2 * scale).abs() < epsilon
}

/// Binary exponent such that `x = m * 2^e` with `0.5 <= |m| < 1`.
#[inline]
fn exponent(x: f64) -> i32 {
    if x == 0.0 {
        return 0;
    }
    ((x.to_bits() >> 52) & 0x7FF) as i32 - 1022
}

// ============================================================================
// Tests
// ============================================================================
