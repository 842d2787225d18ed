//! SVG output.
//!
//! [`SvgWriter`] is a [`CommandSink`] that serializes absolute draw commands
//! as SVG elements. Ovals use their resolved bounds, so no transform
//! attributes are emitted.

use crate::canvas::{CommandSink, DrawCommand, Paint, PaintStyle, Typeface};

/// Hairline stroke width in user units.
const HAIRLINE_WIDTH: f64 = 1.0;

#[derive(Debug, Default)]
pub struct SvgWriter {
    body: String,
    elements: usize,
}

impl SvgWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements written so far.
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Wrap the elements in an `<svg>` root of the given size.
    pub fn finish(self, width: f64, height: f64) -> String {
        let (w, h) = (num(width), num(height));
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{}</svg>\n",
            self.body
        )
    }

    fn paint_attrs(paint: &Paint) -> String {
        let opacity = if paint.color.is_opaque() {
            String::new()
        } else {
            format!(r#" opacity="{}""#, num(paint.color.opacity()))
        };
        match paint.style {
            PaintStyle::Fill => format!(r#"fill="{}"{opacity}"#, paint.color.to_hex()),
            PaintStyle::Stroke => format!(
                r#"fill="none" stroke="{}" stroke-width="{}"{opacity}"#,
                paint.color.to_hex(),
                num(HAIRLINE_WIDTH)
            ),
        }
    }
}

impl CommandSink for SvgWriter {
    fn emit(&mut self, cmd: DrawCommand) {
        let element = match &cmd {
            DrawCommand::Clear { color } => {
                format!(r#"<rect width="100%" height="100%" fill="{}"/>"#, color.to_hex())
            }
            DrawCommand::Oval { bounds, paint, .. } => {
                let c = bounds.center();
                format!(
                    r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" {}/>"#,
                    num(c.x),
                    num(c.y),
                    num(bounds.width() / 2.0),
                    num(bounds.height() / 2.0),
                    Self::paint_attrs(paint)
                )
            }
            DrawCommand::Rect { bounds, paint } => format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
                num(bounds.x1),
                num(bounds.y1),
                num(bounds.width()),
                num(bounds.height()),
                Self::paint_attrs(paint)
            ),
            DrawCommand::Text {
                text,
                x,
                y,
                size,
                typeface,
                paint,
            } => {
                let family = match typeface {
                    Typeface::Default => "sans-serif".to_string(),
                    Typeface::Named(name) => escape(name),
                };
                format!(
                    r#"<text x="{}" y="{}" font-size="{}" font-family="{}" {} xml:space="preserve">{}</text>"#,
                    num(*x),
                    num(*y),
                    num(*size),
                    family,
                    Self::paint_attrs(paint),
                    escape(text)
                )
            }
        };
        self.body.push_str("  ");
        self.body.push_str(&element);
        self.body.push('\n');
        self.elements += 1;
    }
}

/// Up to three decimals, trailing zeros and dot trimmed.
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::RectD;
    use crate::canvas::Canvas;
    use crate::color::Rgba8;
    use crate::config::SceneConfig;
    use crate::fit_demo::FitDemo;
    use crate::scene::{render_into, Scene};
    use crate::trans_affine::TransAffine;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(10.0), "10");
        assert_eq!(num(34.666666), "34.667");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(-2.25), "-2.25");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a & 'b' "c">"#), "&lt;a &amp; &apos;b&apos; &quot;c&quot;&gt;");
    }

    #[test]
    fn test_elements() {
        let mut svg = SvgWriter::new();
        {
            let mut canvas = Canvas::new(&mut svg);
            canvas.clear(Rgba8::WHITE);
            canvas.translate(10.0, 10.0);
            canvas.draw_oval(
                &RectD::from_size(80.0, 40.0),
                &TransAffine::new(),
                Paint::fill(Rgba8::RED),
            );
            canvas.draw_rect(&RectD::from_size(52.0, 52.0), Paint::stroke(Rgba8::BLACK));
            canvas.draw_text("A < B", 0.0, 20.0, 16.0, &Typeface::Default, Paint::fill(Rgba8::BLACK));
        }
        assert_eq!(svg.element_count(), 4);
        let doc = svg.finish(100.0, 50.0);
        assert!(doc.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50""#));
        assert!(doc.contains(r##"<ellipse cx="50" cy="30" rx="40" ry="20" fill="#ff0000"/>"##));
        assert!(doc.contains(
            r##"<rect x="10" y="10" width="52" height="52" fill="none" stroke="#000000" stroke-width="1"/>"##
        ));
        assert!(doc.contains(">A &lt; B</text>"));
        assert!(doc.trim_end().ends_with("</svg>"));
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[1..5].iter().all(|l| l.starts_with("  <")));
    }

    #[test]
    fn test_fit_demo_document() {
        let config = SceneConfig::default();
        let mut svg = SvgWriter::new();
        render_into(&FitDemo, &config, &mut svg);
        assert_eq!(svg.element_count(), 41);
        let (w, h) = FitDemo.size(&config);
        let doc = svg.finish(w, h);
        assert_eq!(doc.matches("<ellipse").count(), 20);
        assert_eq!(doc.matches(">CENTER</text>").count(), 1);
    }
}
