//! Scene configuration.
//!
//! All layout constants live in one immutable [`SceneConfig`], computed once
//! from the display density (and optionally a TOML file) and then passed by
//! reference to every scene. Spacing and offsets are in logical units and
//! are not density scaled; the destination cell scales by the integer part
//! of the density and the label text by the exact density.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_DENSITY: f64 = 1.0;
pub const DEFAULT_ORIGIN: (f64, f64) = (10.0, 10.0);
pub const DEFAULT_SHAPE_SPACING: f64 = 15.0;
pub const DEFAULT_FIRST_ROW_ADVANCE: f64 = 100.0;
pub const DEFAULT_CELL_SIZE: (f64, f64) = (52.0, 52.0);
pub const DEFAULT_CELL_SPACING: f64 = 8.0;
pub const DEFAULT_ROW_MARGIN: f64 = 20.0;
pub const DEFAULT_LABEL_TEXT_SIZE: f64 = 16.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("display density must be finite and positive, got {0}")]
    InvalidDensity(f64),

    #[error("`{name}` must be finite and non-negative, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("failed to parse scene config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read scene config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Layout parameters for the scenes, resolved for one display density.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    density: f64,
    origin: (f64, f64),
    shape_spacing: f64,
    first_row_advance: f64,
    cell_size: (f64, f64),
    cell_spacing: f64,
    row_margin: f64,
    label_text_size: f64,
}

/// On-disk form of [`SceneConfig`]. Every key is optional; sizes are given
/// unscaled and density is applied when resolving.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    density: Option<f64>,
    origin_x: Option<f64>,
    origin_y: Option<f64>,
    shape_spacing: Option<f64>,
    first_row_advance: Option<f64>,
    cell_width: Option<f64>,
    cell_height: Option<f64>,
    cell_spacing: Option<f64>,
    row_margin: Option<f64>,
    label_text_size: Option<f64>,
}

impl SceneConfig {
    /// Defaults resolved for `density`.
    pub fn for_density(density: f64) -> Result<Self, ConfigError> {
        Self::resolve(ConfigFile {
            density: Some(density),
            ..ConfigFile::default()
        })
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(s)?;
        Self::resolve(file)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("loaded scene config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Same layout with a different density; unscaled sizes are preserved.
    pub fn with_density(&self, density: f64) -> Result<Self, ConfigError> {
        let cell_factor = cell_scale(self.density);
        Self::resolve(ConfigFile {
            density: Some(density),
            origin_x: Some(self.origin.0),
            origin_y: Some(self.origin.1),
            shape_spacing: Some(self.shape_spacing),
            first_row_advance: Some(self.first_row_advance),
            cell_width: Some(self.cell_size.0 / cell_factor),
            cell_height: Some(self.cell_size.1 / cell_factor),
            cell_spacing: Some(self.cell_spacing),
            row_margin: Some(self.row_margin),
            label_text_size: Some(self.label_text_size / self.density),
        })
    }

    fn resolve(file: ConfigFile) -> Result<Self, ConfigError> {
        let density = file.density.unwrap_or(DEFAULT_DENSITY);
        if !density.is_finite() || density <= 0.0 {
            return Err(ConfigError::InvalidDensity(density));
        }

        let dim = |name: &'static str, value: Option<f64>, default: f64| {
            let value = value.unwrap_or(default);
            if value.is_finite() && value >= 0.0 {
                Ok(value)
            } else {
                Err(ConfigError::InvalidDimension { name, value })
            }
        };
        // The origin may be negative, it only needs to be finite.
        let offset = |name: &'static str, value: Option<f64>, default: f64| {
            let value = value.unwrap_or(default);
            if value.is_finite() {
                Ok(value)
            } else {
                Err(ConfigError::InvalidDimension { name, value })
            }
        };

        let cell_factor = cell_scale(density);
        let config = Self {
            density,
            origin: (
                offset("origin_x", file.origin_x, DEFAULT_ORIGIN.0)?,
                offset("origin_y", file.origin_y, DEFAULT_ORIGIN.1)?,
            ),
            shape_spacing: dim("shape_spacing", file.shape_spacing, DEFAULT_SHAPE_SPACING)?,
            first_row_advance: dim(
                "first_row_advance",
                file.first_row_advance,
                DEFAULT_FIRST_ROW_ADVANCE,
            )?,
            cell_size: (
                dim("cell_width", file.cell_width, DEFAULT_CELL_SIZE.0)? * cell_factor,
                dim("cell_height", file.cell_height, DEFAULT_CELL_SIZE.1)? * cell_factor,
            ),
            cell_spacing: dim("cell_spacing", file.cell_spacing, DEFAULT_CELL_SPACING)?,
            row_margin: dim("row_margin", file.row_margin, DEFAULT_ROW_MARGIN)?,
            label_text_size: dim(
                "label_text_size",
                file.label_text_size,
                DEFAULT_LABEL_TEXT_SIZE,
            )? * density,
        };
        log::debug!("resolved scene config: {:?}", config);
        Ok(config)
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Translation applied to the root frame before anything is drawn.
    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    /// Horizontal gap after each shape in the native-size row.
    pub fn shape_spacing(&self) -> f64 {
        self.shape_spacing
    }

    /// Vertical advance from the native-size row to the first fit row.
    pub fn first_row_advance(&self) -> f64 {
        self.first_row_advance
    }

    /// Destination cell extent `(width, height)`, density applied.
    pub fn cell_size(&self) -> (f64, f64) {
        self.cell_size
    }

    /// Horizontal gap between destination cells.
    pub fn cell_spacing(&self) -> f64 {
        self.cell_spacing
    }

    /// Vertical gap between fit rows.
    pub fn row_margin(&self) -> f64 {
        self.row_margin
    }

    /// Row label text size, density applied.
    pub fn label_text_size(&self) -> f64 {
        self.label_text_size
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            origin: DEFAULT_ORIGIN,
            shape_spacing: DEFAULT_SHAPE_SPACING,
            first_row_advance: DEFAULT_FIRST_ROW_ADVANCE,
            cell_size: DEFAULT_CELL_SIZE,
            cell_spacing: DEFAULT_CELL_SPACING,
            row_margin: DEFAULT_ROW_MARGIN,
            label_text_size: DEFAULT_LABEL_TEXT_SIZE,
        }
    }
}

/// Whole-number multiplier for cell sizes; never below 1 so low-density
/// displays keep a visible cell.
fn cell_scale(density: f64) -> f64 {
    density.trunc().max(1.0)
}

// ============================================================================
// Tests
// ============================================================================
