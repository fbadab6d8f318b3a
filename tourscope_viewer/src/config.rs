// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kurbo::Size;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tourscope_graph::GraphStyle;
use tourscope_minimap::MinimapConfig;
use tourscope_view2d::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

/// Failure loading or validating a [`ViewerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not a valid config document.
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
    /// A value is out of range.
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Overview settings inside [`ViewerConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinimapSettings {
    /// Whether the overview starts visible.
    pub visible: bool,
    /// Overview size as a fraction of the surface.
    pub scale: f64,
    /// Gap to the surface edges, in pixels.
    pub margin: f64,
}

impl Default for MinimapSettings {
    fn default() -> Self {
        let defaults = MinimapConfig::default();
        Self {
            visible: defaults.visible,
            scale: defaults.scale,
            margin: defaults.margin,
        }
    }
}

/// Everything a [`Viewer`](crate::Viewer) can be configured with.
///
/// Loaded from JSON; every field is optional and unknown fields are errors.
///
/// ```
/// use tourscope_viewer::ViewerConfig;
///
/// let config: ViewerConfig = serde_json::from_str(r#"{"width": 1200, "minimap": {"visible": false}}"#).unwrap();
/// assert_eq!(config.width, 1200.0);
/// assert!(!config.minimap.visible);
/// assert_eq!(config.zoom_in, 1.2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels, including the control row.
    pub height: f64,
    /// Height of the control row taken off a positive surface height.
    pub chrome_height: f64,
    /// Factor applied by zoom-in.
    pub zoom_in: f64,
    /// Factor applied by zoom-out.
    pub zoom_out: f64,
    /// Smallest allowed scale component.
    pub min_scale: f64,
    /// Largest allowed scale component.
    pub max_scale: f64,
    /// Overview settings.
    pub minimap: MinimapSettings,
    /// Node circle radius in render units.
    pub node_radius: f64,
    /// Link stroke width in render units.
    pub link_width: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let style = GraphStyle::default();
        Self {
            width: 960.0,
            height: 640.0,
            chrome_height: 40.0,
            zoom_in: ZOOM_IN_FACTOR,
            zoom_out: ZOOM_OUT_FACTOR,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            minimap: MinimapSettings::default(),
            node_radius: style.node_radius,
            link_width: style.link_width,
        }
    }
}

impl ViewerConfig {
    /// Reads and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let check = |ok: bool, field: &'static str, reason: &'static str| {
            if ok {
                Ok(())
            } else {
                Err(ConfigError::Invalid { field, reason })
            }
        };
        check(self.width.is_finite(), "width", "must be finite")?;
        check(self.height.is_finite(), "height", "must be finite")?;
        check(
            self.chrome_height.is_finite() && self.chrome_height >= 0.0,
            "chrome_height",
            "must be finite and non-negative",
        )?;
        check(positive(self.zoom_in), "zoom_in", "must be positive")?;
        check(positive(self.zoom_out), "zoom_out", "must be positive")?;
        check(positive(self.min_scale), "min_scale", "must be positive")?;
        check(
            positive(self.max_scale) && self.max_scale >= self.min_scale,
            "max_scale",
            "must be positive and at least min_scale",
        )?;
        check(
            positive(self.minimap.scale) && self.minimap.scale <= 1.0,
            "minimap.scale",
            "must be in (0, 1]",
        )?;
        check(
            self.minimap.margin.is_finite(),
            "minimap.margin",
            "must be finite",
        )?;
        check(
            self.node_radius.is_finite() && self.node_radius >= 0.0,
            "node_radius",
            "must be finite and non-negative",
        )?;
        check(
            self.link_width.is_finite() && self.link_width >= 0.0,
            "link_width",
            "must be finite and non-negative",
        )
    }

    /// Drawable surface: the configured size minus the control row.
    ///
    /// The control row is only taken off a positive height.
    #[must_use]
    pub fn surface_size(&self) -> Size {
        surface_size(self.width, self.height, self.chrome_height)
    }

    /// Overview configuration for [`tourscope_minimap::MinimapController`].
    #[must_use]
    pub fn minimap_config(&self) -> MinimapConfig {
        MinimapConfig {
            scale: self.minimap.scale,
            margin: self.minimap.margin,
            visible: self.minimap.visible,
            ..MinimapConfig::default()
        }
    }

    /// Graph style with the configured node radius and link width.
    #[must_use]
    pub fn graph_style(&self) -> GraphStyle {
        GraphStyle {
            node_radius: self.node_radius,
            link_width: self.link_width,
            ..GraphStyle::default()
        }
    }
}

pub(crate) fn surface_size(width: f64, height: f64, chrome_height: f64) -> Size {
    let height = if height > 0.0 {
        height - chrome_height
    } else {
        height
    };
    Size::new(width, height)
}
