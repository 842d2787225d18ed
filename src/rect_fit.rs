//! Rectangle-to-rectangle fit transforms.
//!
//! Computes the scale+translate matrix that maps a source rectangle into a
//! destination rectangle under one of four [`FitMode`]s. The aspect
//! preserving modes behave like a viewport in "meet" mode: the uniform scale
//! is the smaller of the two axis ratios, and the leftover space on the
//! other axis is distributed by the mode's alignment.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::basics::RectD;
use crate::trans_affine::TransAffine;

// ============================================================================
// FitMode
// ============================================================================

/// Policy for mapping a source rectangle into a destination rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitMode {
    /// Scale each axis independently so the source matches the destination
    /// exactly. The aspect ratio may change.
    Fill,
    /// Uniform scale, aligned to the left and top edges.
    Start,
    /// Uniform scale, centered.
    Center,
    /// Uniform scale, aligned to the right and bottom edges.
    End,
}

impl FitMode {
    /// All modes in enumeration order.
    pub const ALL: [FitMode; 4] = [FitMode::Fill, FitMode::Start, FitMode::Center, FitMode::End];

    pub fn label(self) -> &'static str {
        match self {
            FitMode::Fill => "FILL",
            FitMode::Start => "START",
            FitMode::Center => "CENTER",
            FitMode::End => "END",
        }
    }

    /// Fraction of the leftover extent placed before the scaled source, or
    /// `None` for [`FitMode::Fill`], which leaves nothing over.
    pub fn align(self) -> Option<f64> {
        match self {
            FitMode::Fill => None,
            FitMode::Start => Some(0.0),
            FitMode::Center => Some(0.5),
            FitMode::End => Some(1.0),
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fit mode `{0}` (expected one of FILL, START, CENTER, END)")]
pub struct ParseFitModeError(pub String);

impl FromStr for FitMode {
    type Err = ParseFitModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FitMode::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFitModeError(s.to_string()))
    }
}

// ============================================================================
// Fit computation
// ============================================================================

/// `true` when `source` has no area to scale from.
pub fn is_degenerate(source: &RectD) -> bool {
    source.is_empty()
}

/// Compute the transform mapping `source` into `destination` under `mode`.
///
/// A degenerate source (zero or negative width or height) yields a
/// zero-scale transform that collapses every point onto the destination's
/// top-left corner. The result is finite and draws nothing visible.
pub fn compute_fit(source: &RectD, destination: &RectD, mode: FitMode) -> TransAffine {
    if is_degenerate(source) {
        log::trace!("degenerate fit source {:?}, collapsing to destination origin", source);
        return TransAffine::new_scale_translate(0.0, 0.0, destination.x1, destination.y1);
    }

    let sw = source.width();
    let sh = source.height();
    let kx = destination.width() / sw;
    let ky = destination.height() / sh;

    let Some(align) = mode.align() else {
        return TransAffine::new_scale_translate(
            kx,
            ky,
            destination.x1 - source.x1 * kx,
            destination.y1 - source.y1 * ky,
        );
    };

    let k = kx.min(ky);
    let mut tx = destination.x1 - source.x1 * k;
    let mut ty = destination.y1 - source.y1 * k;
    if kx > ky {
        tx += (destination.width() - sw * k) * align;
    } else if ky > kx {
        ty += (destination.height() - sh * k) * align;
    }
    TransAffine::new_scale_translate(k, k, tx, ty)
}

/// Convenience: the rectangle `source` occupies after [`compute_fit`].
pub fn fitted_rect(source: &RectD, destination: &RectD, mode: FitMode) -> RectD {
    compute_fit(source, destination, mode).transform_rect(source)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Source/destination pairs with a variety of aspect ratios and origins.
    fn cases() -> Vec<(RectD, RectD)> {
        let sources = [
            RectD::from_size(80.0, 40.0),
            RectD::from_size(40.0, 80.0),
            RectD::from_size(30.0, 30.0),
            RectD::new(5.0, -3.0, 17.5, 100.0),
            RectD::new(-50.0, 20.0, 150.0, 21.0),
        ];
        let destinations = [
            RectD::from_size(52.0, 52.0),
            RectD::new(10.0, 110.0, 62.0, 162.0),
            RectD::new(-4.0, 7.0, 300.0, 9.0),
            RectD::new(0.5, 0.25, 3.0, 90.0),
        ];
        let mut out = Vec::new();
        for s in sources {
            for d in destinations {
                out.push((s, d));
            }
        }
        out
    }

    #[test]
    fn test_fill_matches_destination_exactly() {
        for (src, dst) in cases() {
            let r = fitted_rect(&src, &dst, FitMode::Fill);
            assert!(close(r.x1, dst.x1) && close(r.x2, dst.x2), "{src:?} -> {dst:?}: {r:?}");
            assert!(close(r.y1, dst.y1) && close(r.y2, dst.y2), "{src:?} -> {dst:?}: {r:?}");
        }
    }

    #[test]
    fn test_uniform_modes_fit_one_axis_and_stay_inside() {
        for mode in [FitMode::Start, FitMode::Center, FitMode::End] {
            for (src, dst) in cases() {
                let m = compute_fit(&src, &dst, mode);
                assert!(close(m.sx, m.sy), "{mode}: non-uniform scale");
                let r = m.transform_rect(&src);
                let x_fits = close(r.width(), dst.width());
                let y_fits = close(r.height(), dst.height());
                assert!(x_fits || y_fits, "{mode} {src:?} -> {dst:?}: {r:?}");
                assert!(dst.contains_rect(&r, EPS), "{mode} {src:?} -> {dst:?}: {r:?}");
            }
        }
    }

    #[test]
    fn test_alignment_offsets() {
        for (src, dst) in cases() {
            let start = fitted_rect(&src, &dst, FitMode::Start);
            let center = fitted_rect(&src, &dst, FitMode::Center);
            let end = fitted_rect(&src, &dst, FitMode::End);

            let (lead_start, lead_center, lead_end, room) =
                if close(start.width(), dst.width()) {
                    (
                        start.y1 - dst.y1,
                        center.y1 - dst.y1,
                        end.y1 - dst.y1,
                        dst.height() - start.height(),
                    )
                } else {
                    (
                        start.x1 - dst.x1,
                        center.x1 - dst.x1,
                        end.x1 - dst.x1,
                        dst.width() - start.width(),
                    )
                };
            assert!(close(lead_start, 0.0));
            assert!(close(lead_end, room));
            assert!(close(lead_center, room / 2.0));
        }
    }

    #[test]
    fn test_center_wide_oval_into_square() {
        let src = RectD::from_size(80.0, 40.0);
        let dst = RectD::from_size(52.0, 52.0);
        let m = compute_fit(&src, &dst, FitMode::Center);
        assert!(close(m.sx, 0.65));
        assert!(close(m.sy, 0.65));
        assert!(close(m.tx, 0.0));
        assert!(close(m.ty, 13.0));

        let r = m.transform_rect(&src);
        assert!(close(r.width(), 52.0));
        assert!(close(r.height(), 26.0));
    }

    #[test]
    fn test_fill_wide_oval_into_square() {
        let src = RectD::from_size(80.0, 40.0);
        let dst = RectD::from_size(52.0, 52.0);
        let m = compute_fit(&src, &dst, FitMode::Fill);
        assert!(close(m.sx, 0.65));
        assert!(close(m.sy, 1.3));
        assert!(close(m.tx, 0.0));
        assert!(close(m.ty, 0.0));
    }

    #[test]
    fn test_end_tall_oval_into_square() {
        let src = RectD::from_size(40.0, 80.0);
        let dst = RectD::from_size(52.0, 52.0);
        let r = fitted_rect(&src, &dst, FitMode::End);
        assert!(close(r.x1, 26.0));
        assert!(close(r.x2, 52.0));
        assert!(close(r.y1, 0.0));
        assert!(close(r.y2, 52.0));
    }

    #[test]
    fn test_same_aspect_has_no_offset() {
        let src = RectD::from_size(30.0, 30.0);
        let dst = RectD::new(10.0, 10.0, 62.0, 62.0);
        for mode in FitMode::ALL {
            let r = fitted_rect(&src, &dst, mode);
            assert!(close(r.x1, 10.0) && close(r.y1, 10.0), "{mode}: {r:?}");
            assert!(close(r.x2, 62.0) && close(r.y2, 62.0), "{mode}: {r:?}");
        }
    }

    #[test]
    fn test_degenerate_source_collapses_to_origin() {
        let dst = RectD::new(10.0, 110.0, 62.0, 162.0);
        for src in [
            RectD::from_size(0.0, 40.0),
            RectD::from_size(80.0, 0.0),
            RectD::from_size(0.0, 0.0),
        ] {
            assert!(is_degenerate(&src));
            for mode in FitMode::ALL {
                let m = compute_fit(&src, &dst, mode);
                assert_eq!(m.sx, 0.0);
                assert_eq!(m.sy, 0.0);
                assert_eq!(m.translation(), (10.0, 110.0));
                let r = m.transform_rect(&src);
                assert!(r.x1.is_finite() && r.y2.is_finite());
                assert_eq!(r, RectD::new(10.0, 110.0, 10.0, 110.0));
            }
        }
    }

    #[test]
    fn test_empty_destination_is_well_defined() {
        let src = RectD::from_size(80.0, 40.0);
        let dst = RectD::new(5.0, 5.0, 5.0, 60.0);
        let m = compute_fit(&src, &dst, FitMode::Center);
        assert_eq!(m.sx, 0.0);
        assert_eq!(m.sy, 0.0);
        assert!(m.tx.is_finite() && m.ty.is_finite());
    }

    #[test]
    fn test_labels_and_parsing() {
        let labels: Vec<_> = FitMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["FILL", "START", "CENTER", "END"]);
        assert_eq!("center".parse::<FitMode>(), Ok(FitMode::Center));
        assert_eq!(" End ".parse::<FitMode>(), Ok(FitMode::End));
        let err = "middle".parse::<FitMode>().unwrap_err();
        assert_eq!(err, ParseFitModeError("middle".into()));
        assert!(err.to_string().contains("middle"));
    }
}
