//! Affine transformation matrix.
//!
//! Every transform in this crate is scale-then-translate: fit results and
//! frame offsets never rotate or shear. The shear components are still
//! stored so the layout matches a full 2x3 affine and the bounds of a
//! mapped rectangle stay correct for any matrix.

use crate::basics::{is_equal_eps, RectD};

/// Epsilon for affine matrix comparisons.
pub const AFFINE_EPSILON: f64 = 1e-14;

/// 2D affine transformation matrix.
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TransAffine {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl TransAffine {
    /// Identity matrix.
    pub fn new() -> Self {
        Self::new_scale_translate(1.0, 1.0, 0.0, 0.0)
    }

    /// Scale by `(sx, sy)` about the origin, then move by `(tx, ty)`.
    pub fn new_scale_translate(sx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            sx,
            shy: 0.0,
            shx: 0.0,
            sy,
            tx,
            ty,
        }
    }

    /// Append a translation; the scale part is untouched.
    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.tx += x;
        self.ty += y;
        self
    }

    /// Map one point.
    #[inline]
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.sx + y * self.shx + self.tx,
            x * self.shy + y * self.sy + self.ty,
        )
    }

    /// Axis-aligned bounds of `r` after mapping its four corners.
    pub fn transform_rect(&self, r: &RectD) -> RectD {
        let (x, y) = self.transform(r.x1, r.y1);
        [(r.x2, r.y1), (r.x2, r.y2), (r.x1, r.y2)]
            .into_iter()
            .map(|(cx, cy)| self.transform(cx, cy))
            .fold(RectD::new(x, y, x, y), |acc, (x, y)| {
                RectD::new(acc.x1.min(x), acc.y1.min(y), acc.x2.max(x), acc.y2.max(y))
            })
    }

    pub fn translation(&self) -> (f64, f64) {
        (self.tx, self.ty)
    }

    /// Component-wise comparison within `epsilon`.
    pub fn is_equal(&self, m: &TransAffine, epsilon: f64) -> bool {
        [
            (self.sx, m.sx),
            (self.shy, m.shy),
            (self.shx, m.shx),
            (self.sy, m.sy),
            (self.tx, m.tx),
            (self.ty, m.ty),
        ]
        .into_iter()
        .all(|(a, b)| is_equal_eps(a, b, epsilon))
    }
}

impl Default for TransAffine {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TransAffine {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other, AFFINE_EPSILON)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn test_identity() {
        let m = TransAffine::new();
        assert_eq!(m.transform(5.0, 3.0), (5.0, 3.0));
        assert_eq!(m, TransAffine::default());
    }

    #[test]
    fn test_scale_translate_order() {
        // Scale first, translation is not scaled.
        let m = TransAffine::new_scale_translate(0.65, 0.65, 0.0, 13.0);
        let (x, y) = m.transform(80.0, 40.0);
        assert!((x - 52.0).abs() < EPS);
        assert!((y - 39.0).abs() < EPS);
    }

    #[test]
    fn test_translate_accumulates() {
        let mut m = TransAffine::new_scale_translate(2.0, 2.0, 1.0, 1.0);
        m.translate(10.0, 100.0).translate(-1.0, 0.0);
        assert_eq!(m.translation(), (10.0, 101.0));
        let (x, y) = m.transform(5.0, 0.0);
        assert!((x - 20.0).abs() < EPS);
        assert!((y - 101.0).abs() < EPS);
    }

    #[test]
    fn test_transform_rect() {
        let m = TransAffine::new_scale_translate(0.65, 1.3, 10.0, 110.0);
        let r = m.transform_rect(&RectD::from_size(80.0, 40.0));
        assert!((r.x1 - 10.0).abs() < EPS);
        assert!((r.y1 - 110.0).abs() < EPS);
        assert!((r.x2 - 62.0).abs() < EPS);
        assert!((r.y2 - 162.0).abs() < EPS);
    }

    #[test]
    fn test_transform_rect_negative_scale_normalizes() {
        let m = TransAffine::new_scale_translate(-1.0, 1.0, 0.0, 0.0);
        let r = m.transform_rect(&RectD::from_size(10.0, 5.0));
        assert_eq!(r, RectD::new(-10.0, 0.0, 0.0, 5.0));
    }

    #[test]
    fn test_zero_scale_collapses_rect() {
        let m = TransAffine::new_scale_translate(0.0, 0.0, 4.0, 7.0);
        let r = m.transform_rect(&RectD::from_size(80.0, 40.0));
        assert_eq!(r, RectD::new(4.0, 7.0, 4.0, 7.0));
    }

    #[test]
    fn test_partial_eq() {
        let a = TransAffine::new_scale_translate(1.0, 1.0, 10.0, 20.0);
        assert_eq!(a, TransAffine::new_scale_translate(1.0, 1.0, 10.0, 20.0));
        assert_ne!(a, TransAffine::new_scale_translate(1.0, 1.0, 10.0, 21.0));
    }
}
