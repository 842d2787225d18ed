//! # scale-to-fit
//!
//! Rect-to-rect fit transforms and a small, deterministic drawing pipeline
//! for the classic "ScaleToFit" demo: four ovals mapped into square cells
//! under the FILL, START, CENTER and END fit modes.
//!
//! ## Architecture
//!
//! Drawing is split into three stages:
//!
//! 1. **Scene**: frame-relative drawing code run once per redraw
//!    ([`scene::Scene`])
//! 2. **Canvas**: resolves frame-relative coordinates against an explicit
//!    coordinate-frame stack ([`canvas::Canvas`])
//! 3. **Sink**: receives absolute draw commands, either a recorded
//!    [`canvas::DisplayList`] or an [`svg::SvgWriter`]
//!
//! ```
//! use scale_to_fit::basics::RectD;
//! use scale_to_fit::rect_fit::{compute_fit, FitMode};
//!
//! let m = compute_fit(
//!     &RectD::from_size(80.0, 40.0),
//!     &RectD::from_size(52.0, 52.0),
//!     FitMode::Center,
//! );
//! assert!((m.sx - 0.65).abs() < 1e-12);
//! assert!((m.ty - 13.0).abs() < 1e-12);
//! ```

// Foundation types & math
pub mod basics;
pub mod color;
pub mod trans_affine;

// Fit computation
pub mod rect_fit;

// Drawing pipeline
pub mod canvas;
pub mod config;
pub mod scene;
pub mod svg;

// Scenes
pub mod fit_demo;
pub mod typeface_demo;
