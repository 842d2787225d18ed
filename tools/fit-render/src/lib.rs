//! Scene rendering front end shared by the `fit-render` binary and its tests.

use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use scale_to_fit::canvas::DisplayList;
use scale_to_fit::config::SceneConfig;
use scale_to_fit::scene::{available_scenes, record, render_into, scene_by_name, Scene};
use scale_to_fit::svg::SvgWriter;

/// Output encoding for a rendered scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Standalone SVG document.
    Svg,
    /// One draw command per line.
    List,
}

/// Resolve the scene configuration from an optional file and an optional
/// density override. The override wins over the file's `density`.
pub fn resolve_config(
    config_path: Option<&Path>,
    density: Option<f64>,
) -> Result<SceneConfig> {
    let base = match config_path {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading scene config {}", path.display()))?,
        None => SceneConfig::default(),
    };
    match density {
        Some(d) => base
            .with_density(d)
            .with_context(|| format!("applying density {d}")),
        None => Ok(base),
    }
}

/// Render the scene called `name` and encode it as `format`.
pub fn render_scene(name: &str, config: &SceneConfig, format: Format) -> Result<String> {
    let scene = scene_by_name(name).ok_or_else(|| {
        anyhow!(
            "unknown scene `{name}` (available: {})",
            available_scenes().join(", ")
        )
    })?;

    let out = match format {
        Format::Svg => {
            let mut svg = SvgWriter::new();
            render_into(scene.as_ref(), config, &mut svg);
            let (w, h) = scene.size(config);
            log::info!("{name}: {} svg elements, {w}x{h}", svg.element_count());
            svg.finish(w, h)
        }
        Format::List => {
            let list: DisplayList = record(scene.as_ref(), config);
            log::info!("{name}: {} commands", list.len());
            list.to_string()
        }
    };
    Ok(out)
}

/// Write `rendered` to `path`, or to `stdout` when no path is given.
pub fn write_output(rendered: &str, path: Option<&Path>, stdout: &mut impl Write) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            stdout
                .write_all(rendered.as_bytes())
                .context("writing to stdout")?;
            stdout.flush().context("flushing stdout")?;
        }
    }
    Ok(())
}
