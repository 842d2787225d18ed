//! Scene entry points.
//!
//! A [`Scene`] is the per-redraw callback: it receives a canvas and mutates
//! it, nothing else. Scenes are looked up by name for the command-line
//! renderer.

use crate::canvas::{Canvas, CommandSink, DisplayList};
use crate::config::SceneConfig;
use crate::fit_demo::FitDemo;
use crate::typeface_demo::TypefaceDemo;

pub trait Scene {
    /// Registry name, e.g. `scale-to-fit`.
    fn name(&self) -> &'static str;

    /// Suggested surface size `(width, height)` for this configuration.
    fn size(&self, config: &SceneConfig) -> (f64, f64);

    /// Draw one frame.
    fn draw(&self, canvas: &mut Canvas<'_>, config: &SceneConfig);
}

/// Names accepted by [`scene_by_name`].
pub fn available_scenes() -> &'static [&'static str] {
    &[FitDemo::NAME, TypefaceDemo::NAME]
}

pub fn scene_by_name(name: &str) -> Option<Box<dyn Scene>> {
    match name {
        FitDemo::NAME => Some(Box::new(FitDemo)),
        TypefaceDemo::NAME => Some(Box::new(TypefaceDemo)),
        _ => None,
    }
}

/// Draw `scene` once into `sink`.
pub fn render_into(scene: &dyn Scene, config: &SceneConfig, sink: &mut dyn CommandSink) {
    log::debug!("rendering scene `{}`", scene.name());
    let mut canvas = Canvas::new(sink);
    scene.draw(&mut canvas, config);
    if canvas.frames().depth() != 1 {
        log::warn!(
            "scene `{}` left {} unbalanced frame(s)",
            scene.name(),
            canvas.frames().depth() - 1
        );
    }
}

/// Draw `scene` once and return the recorded commands.
pub fn record(scene: &dyn Scene, config: &SceneConfig) -> DisplayList {
    let mut list = DisplayList::new();
    render_into(scene, config, &mut list);
    log::trace!("scene `{}` produced {} commands", scene.name(), list.len());
    list
}
