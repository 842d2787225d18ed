//! Drawing surface: coordinate-frame stack, draw commands and sinks.
//!
//! Scenes draw through a [`Canvas`] in frame-relative coordinates. The
//! canvas keeps an explicit stack of `(dx, dy)` offsets; every command is
//! resolved to absolute coordinates (the sum of all active offsets) before
//! it reaches the [`CommandSink`]. Sinks therefore never see relative state
//! and need no save/restore of their own.

use std::fmt;

use crate::basics::{unite_rectangles, PointD, RectD};
use crate::color::Rgba8;
use crate::rect_fit::{compute_fit, FitMode};
use crate::trans_affine::TransAffine;

// ============================================================================
// Paint / typeface
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    #[default]
    Fill,
    /// Hairline outline.
    Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paint {
    pub color: Rgba8,
    pub style: PaintStyle,
}

impl Paint {
    pub const fn fill(color: Rgba8) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
        }
    }

    pub const fn stroke(color: Rgba8) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
        }
    }
}

/// Font selection for text commands. Named faces are references only;
/// nothing here loads font data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Typeface {
    #[default]
    Default,
    Named(String),
}

impl fmt::Display for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Typeface::Default => f.write_str("default"),
            Typeface::Named(name) => f.write_str(name),
        }
    }
}

// ============================================================================
// DrawCommand
// ============================================================================

/// One absolute-coordinate drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear { color: Rgba8 },
    /// Oval inscribed in `bounds`. `source` is the untransformed oval rect
    /// and `transform` maps it to `bounds`.
    Oval {
        source: RectD,
        transform: TransAffine,
        bounds: RectD,
        paint: Paint,
    },
    Rect {
        bounds: RectD,
        paint: Paint,
    },
    /// Text with its baseline starting at `(x, y)`.
    Text {
        text: String,
        x: f64,
        y: f64,
        size: f64,
        typeface: Typeface,
        paint: Paint,
    },
}

impl DrawCommand {
    /// Geometry bounds, `None` for commands that cover the whole surface.
    /// Text reports only its anchor point.
    pub fn bounds(&self) -> Option<RectD> {
        match self {
            DrawCommand::Clear { .. } => None,
            DrawCommand::Oval { bounds, .. } | DrawCommand::Rect { bounds, .. } => Some(*bounds),
            DrawCommand::Text { x, y, .. } => Some(RectD::new(*x, *y, *x, *y)),
        }
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Clear { color } => write!(f, "clear {color}"),
            DrawCommand::Oval { bounds, paint, .. } => write!(
                f,
                "oval {} {} {} {} {}",
                bounds.x1, bounds.y1, bounds.x2, bounds.y2, paint.color
            ),
            DrawCommand::Rect { bounds, paint } => write!(
                f,
                "rect {} {} {} {} {}{}",
                bounds.x1,
                bounds.y1,
                bounds.x2,
                bounds.y2,
                paint.color,
                if paint.style == PaintStyle::Stroke {
                    " stroke"
                } else {
                    ""
                }
            ),
            DrawCommand::Text {
                text,
                x,
                y,
                size,
                typeface,
                ..
            } => write!(f, "text {x} {y} {size} {typeface} {text:?}"),
        }
    }
}

// ============================================================================
// CommandSink
// ============================================================================

/// Receiver of resolved draw commands: a recorder, an encoder, a rasterizer.
pub trait CommandSink {
    fn emit(&mut self, cmd: DrawCommand);
}

impl<T: CommandSink + ?Sized> CommandSink for &mut T {
    fn emit(&mut self, cmd: DrawCommand) {
        (**self).emit(cmd);
    }
}

/// Records commands in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// Union of every command's geometry bounds.
    pub fn bounds(&self) -> Option<RectD> {
        self.commands
            .iter()
            .filter_map(DrawCommand::bounds)
            .reduce(|a, b| unite_rectangles(&a, &b))
    }

    /// Replay into another sink.
    pub fn replay(&self, sink: &mut dyn CommandSink) {
        for cmd in &self.commands {
            sink.emit(cmd.clone());
        }
    }
}

impl CommandSink for DisplayList {
    fn emit(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl fmt::Display for DisplayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            writeln!(f, "{cmd}")?;
        }
        Ok(())
    }
}

// ============================================================================
// FrameStack
// ============================================================================

/// Stack of relative coordinate frames. The root frame is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStack {
    frames: Vec<PointD>,
}

impl FrameStack {
    pub fn new() -> Self {
        Self {
            frames: vec![PointD::default()],
        }
    }

    /// Open a nested frame at offset (0, 0) relative to the current one.
    pub fn push(&mut self) {
        self.frames.push(PointD::default());
    }

    /// Close the innermost frame. The root frame cannot be popped; returns
    /// `false` in that case.
    pub fn pop(&mut self) -> bool {
        if self.frames.len() == 1 {
            log::warn!("frame stack underflow: refusing to pop the root frame");
            return false;
        }
        self.frames.pop();
        true
    }

    /// Move the innermost frame.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        if let Some(top) = self.frames.last_mut() {
            top.x += dx;
            top.y += dy;
        }
    }

    /// Absolute offset: the sum of all active frames.
    pub fn origin(&self) -> PointD {
        self.frames.iter().fold(PointD::default(), |acc, f| {
            PointD::new(acc.x + f.x, acc.y + f.y)
        })
    }

    /// Number of frames including the root.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for FrameStack {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Canvas
// ============================================================================

/// Frame-relative drawing front end over a [`CommandSink`].
pub struct Canvas<'a> {
    frames: FrameStack,
    sink: &'a mut dyn CommandSink,
}

impl<'a> Canvas<'a> {
    pub fn new(sink: &'a mut dyn CommandSink) -> Self {
        Self {
            frames: FrameStack::new(),
            sink,
        }
    }

    pub fn frames(&self) -> &FrameStack {
        &self.frames
    }

    pub fn save(&mut self) {
        self.frames.push();
    }

    pub fn restore(&mut self) -> bool {
        self.frames.pop()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.frames.translate(dx, dy);
    }

    /// Run `f` inside a nested frame, restoring afterwards.
    pub fn with_frame<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let result = f(self);
        self.restore();
        result
    }

    pub fn clear(&mut self, color: Rgba8) {
        self.sink.emit(DrawCommand::Clear { color });
    }

    /// Oval inscribed in `rect`, drawn with `transform` applied first.
    pub fn draw_oval(&mut self, rect: &RectD, transform: &TransAffine, paint: Paint) {
        let origin = self.frames.origin();
        let mut absolute = *transform;
        absolute.translate(origin.x, origin.y);
        self.sink.emit(DrawCommand::Oval {
            source: *rect,
            transform: absolute,
            bounds: absolute.transform_rect(rect),
            paint,
        });
    }

    /// Oval `source` fitted into `destination` under `mode`.
    pub fn draw_fitted_oval(
        &mut self,
        source: &RectD,
        destination: &RectD,
        mode: FitMode,
        paint: Paint,
    ) {
        let fit = compute_fit(source, destination, mode);
        self.draw_oval(source, &fit, paint);
    }

    pub fn draw_rect(&mut self, rect: &RectD, paint: Paint) {
        let origin = self.frames.origin();
        self.sink.emit(DrawCommand::Rect {
            bounds: rect.offset(origin.x, origin.y),
            paint,
        });
    }

    pub fn draw_text(&mut self, text: &str, x: f64, y: f64, size: f64, typeface: &Typeface, paint: Paint) {
        let origin = self.frames.origin();
        self.sink.emit(DrawCommand::Text {
            text: text.to_string(),
            x: x + origin.x,
            y: y + origin.y,
            size,
            typeface: typeface.clone(),
            paint,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
