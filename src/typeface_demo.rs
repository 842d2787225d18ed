//! The typeface demo scene: a few lines of large text, the last one in a
//! named custom face. The face is referenced by asset path only.

use crate::canvas::{Canvas, Paint, Typeface};
use crate::color::Rgba8;
use crate::config::SceneConfig;
use crate::scene::Scene;

pub const CUSTOM_FACE: &str = "fonts/samplefont.ttf";
pub const TEXT_SIZE: f64 = 64.0;

const LEFT: f64 = 10.0;

/// `(text, baseline y, uses the custom face)`
const LINES: [(&str, f64, bool); 5] = [
    ("Draw with Default:", 100.0, false),
    ("  SAMPLE TEXT", 200.0, false),
    ("Draw with Custom Font", 400.0, false),
    ("(Custom Font draws 'A' with solid triangle.)", 500.0, false),
    ("  SAMPLE TEXT", 600.0, true),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct TypefaceDemo;

impl TypefaceDemo {
    pub const NAME: &'static str = "typefaces";
}

impl Scene for TypefaceDemo {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn size(&self, _config: &SceneConfig) -> (f64, f64) {
        // Approximate advance of 0.6 em per character.
        let longest = LINES.iter().map(|l| l.0.len()).max().unwrap_or(0) as f64;
        (LEFT * 2.0 + longest * TEXT_SIZE * 0.6, 600.0 + TEXT_SIZE)
    }

    fn draw(&self, canvas: &mut Canvas<'_>, _config: &SceneConfig) {
        canvas.clear(Rgba8::WHITE);
        let default = Typeface::Default;
        let custom = Typeface::Named(CUSTOM_FACE.to_string());
        let paint = Paint::fill(Rgba8::BLACK);
        for (text, y, use_custom) in LINES {
            let face = if use_custom { &custom } else { &default };
            canvas.draw_text(text, LEFT, y, TEXT_SIZE, face, paint);
        }
    }
}
