//! The scale-to-fit demo scene.
//!
//! Draws four colored ovals at native size in one row, then one row per
//! [`FitMode`] with each oval fitted into a fixed destination cell, the
//! cell's hairline outline, and the mode's label.

use crate::basics::RectD;
use crate::canvas::{Canvas, Paint, Typeface};
use crate::color::Rgba8;
use crate::config::SceneConfig;
use crate::rect_fit::FitMode;
use crate::scene::Scene;

/// One demo oval: native extent and fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDescriptor {
    pub width: u32,
    pub height: u32,
    pub color: Rgba8,
}

impl ShapeDescriptor {
    pub const fn new(width: u32, height: u32, color: Rgba8) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    /// Bounding rect at the frame origin.
    pub fn rect(&self) -> RectD {
        RectD::from_size(f64::from(self.width), f64::from(self.height))
    }
}

pub const SHAPES: [ShapeDescriptor; 4] = [
    ShapeDescriptor::new(80, 40, Rgba8::RED),
    ShapeDescriptor::new(40, 80, Rgba8::GREEN),
    ShapeDescriptor::new(30, 30, Rgba8::BLUE),
    ShapeDescriptor::new(80, 80, Rgba8::BLACK),
];

const BACKGROUND: Rgba8 = Rgba8::WHITE;
const HAIRLINE: Paint = Paint::stroke(Rgba8::BLACK);
const LABEL: Paint = Paint::fill(Rgba8::BLACK);

#[derive(Debug, Clone, Copy, Default)]
pub struct FitDemo;

impl FitDemo {
    pub const NAME: &'static str = "scale-to-fit";

    fn draw_native_row(canvas: &mut Canvas<'_>, config: &SceneConfig) {
        canvas.with_frame(|c| {
            for shape in &SHAPES {
                let src = shape.rect();
                c.draw_oval(&src, &Default::default(), Paint::fill(shape.color));
                c.translate(src.width() + config.shape_spacing(), 0.0);
            }
        });
    }

    fn draw_fit_row(canvas: &mut Canvas<'_>, config: &SceneConfig, mode: FitMode) {
        let (w, h) = config.cell_size();
        let dst = RectD::from_size(w, h);
        canvas.with_frame(|c| {
            for shape in &SHAPES {
                c.draw_fitted_oval(&shape.rect(), &dst, mode, Paint::fill(shape.color));
                c.draw_rect(&dst, HAIRLINE);
                c.translate(w + config.cell_spacing(), 0.0);
            }
            c.draw_text(
                mode.label(),
                0.0,
                h * 2.0 / 3.0,
                config.label_text_size(),
                &Typeface::Default,
                LABEL,
            );
        });
    }
}

impl Scene for FitDemo {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn size(&self, config: &SceneConfig) -> (f64, f64) {
        let (ox, oy) = config.origin();
        let (w, h) = config.cell_size();
        let n = SHAPES.len() as f64;
        let native_w: f64 = SHAPES
            .iter()
            .map(|s| f64::from(s.width) + config.shape_spacing())
            .sum();
        let native_h = SHAPES
            .iter()
            .map(|s| f64::from(s.height))
            .fold(0.0, f64::max);
        let cells_w = n * (w + config.cell_spacing());
        let rows_h = config.first_row_advance()
            + FitMode::ALL.len() as f64 * (h + config.row_margin());

        // Same margin on the far side as the origin leaves on the near side.
        let extent = |origin: f64, content: f64| (origin + content + origin.max(0.0)).max(0.0);
        (
            extent(ox, native_w.max(cells_w)),
            extent(oy, native_h.max(rows_h)),
        )
    }

    fn draw(&self, canvas: &mut Canvas<'_>, config: &SceneConfig) {
        canvas.clear(BACKGROUND);
        let (ox, oy) = config.origin();
        canvas.translate(ox, oy);

        Self::draw_native_row(canvas, config);
        canvas.translate(0.0, config.first_row_advance());

        for mode in FitMode::ALL {
            log::trace!("fit row {mode} at y={}", canvas.frames().origin().y);
            Self::draw_fit_row(canvas, config, mode);
            canvas.translate(0.0, config.cell_size().1 + config.row_margin());
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
