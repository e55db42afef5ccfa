//! Visual style configuration.
//!
//! All knobs that shape the composed images live in [`StyleConfig`], loaded
//! from an optional TOML file. Every field has a stock default, so an empty
//! file (or no file at all) reproduces the reference look:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [canvas]
//! width = 1280              # Store-recommended listing dimensions
//! height = 800
//! background = [45, 55, 72] # Slate blue-gray, top of the gradient
//!
//! [screenshot]
//! corner_radius = 12        # Rounded-corner radius on the raw screenshot
//! shadow_offset = 15        # Shadow padding on each side
//! shadow_blur = 30.0        # Gaussian sigma; larger than the offset on purpose
//! scale_margin = 0.98       # Scaled content keeps a 2% margin
//!
//! [layout]
//! padding = 60              # Canvas edge padding
//! annotation_width = 240    # Caption column width
//! gap = 50                  # Gap between screenshot and caption column
//!
//! [text]
//! title_size = 44.0
//! subtitle_size = 24.0
//! fonts = ["bahnschrift.ttf", "segoeui.ttf", "arial.ttf",
//!          "DejaVuSans.ttf", "LiberationSans-Regular.ttf",
//!          "NotoSans-Regular.ttf"]
//! ```
//!
//! The shadow blur deliberately exceeds the offset — the reference design
//! wants the soft bleed, so loading a config never "corrects" it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Canvas dimensions and base background color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Base RGB color; the gradient lightens it toward the bottom row.
    pub background: [u8; 3],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            background: [45, 55, 72],
        }
    }
}

/// Screenshot post-processing: corner rounding and drop shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenshotConfig {
    pub corner_radius: u32,
    pub shadow_offset: u32,
    pub shadow_blur: f32,
    pub scale_margin: f64,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            corner_radius: 12,
            shadow_offset: 15,
            shadow_blur: 30.0,
            scale_margin: 0.98,
        }
    }
}

/// Spacing between canvas edge, screenshot, and caption column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub padding: u32,
    pub annotation_width: u32,
    pub gap: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 60,
            annotation_width: 240,
            gap: 50,
        }
    }
}

/// Caption typography: sizes and the ordered font candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub title_size: f32,
    pub subtitle_size: f32,
    /// Font filenames tried in order against the platform font directories.
    pub fonts: Vec<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            title_size: 44.0,
            subtitle_size: 24.0,
            fonts: vec![
                "bahnschrift.ttf".into(),
                "segoeui.ttf".into(),
                "arial.ttf".into(),
                "DejaVuSans.ttf".into(),
                "LiberationSans-Regular.ttf".into(),
                "NotoSans-Regular.ttf".into(),
            ],
        }
    }
}

/// Full visual configuration for a compose run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub canvas: CanvasConfig,
    pub screenshot: ScreenshotConfig,
    pub layout: LayoutConfig,
    pub text: TextConfig,
}

impl StyleConfig {
    /// Load a style config from a TOML file. Missing sections and fields
    /// fall back to stock defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}

/// Stock config.toml with every option documented, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    let mut out = String::new();
    out.push_str("# storeframe style configuration\n");
    out.push_str("# All options are optional - defaults shown below\n\n");
    out.push_str("[canvas]\n");
    out.push_str("width = 1280              # Store-recommended listing dimensions\n");
    out.push_str("height = 800\n");
    out.push_str("background = [45, 55, 72] # Slate blue-gray, top of the gradient\n\n");
    out.push_str("[screenshot]\n");
    out.push_str("corner_radius = 12        # Rounded-corner radius on the raw screenshot\n");
    out.push_str("shadow_offset = 15        # Shadow padding on each side\n");
    out.push_str("shadow_blur = 30.0        # Gaussian sigma; larger than the offset on purpose\n");
    out.push_str("scale_margin = 0.98       # Scaled content keeps a 2% margin\n\n");
    out.push_str("[layout]\n");
    out.push_str("padding = 60              # Canvas edge padding\n");
    out.push_str("annotation_width = 240    # Caption column width\n");
    out.push_str("gap = 50                  # Gap between screenshot and caption column\n\n");
    out.push_str("[text]\n");
    out.push_str("title_size = 44.0\n");
    out.push_str("subtitle_size = 24.0\n");
    out.push_str("fonts = [\"bahnschrift.ttf\", \"segoeui.ttf\", \"arial.ttf\",\n");
    out.push_str("         \"DejaVuSans.ttf\", \"LiberationSans-Regular.ttf\",\n");
    out.push_str("         \"NotoSans-Regular.ttf\"]\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_design() {
        let config = StyleConfig::default();

        assert_eq!(config.canvas.width, 1280);
        assert_eq!(config.canvas.height, 800);
        assert_eq!(config.canvas.background, [45, 55, 72]);
        assert_eq!(config.screenshot.corner_radius, 12);
        assert_eq!(config.screenshot.shadow_offset, 15);
        assert_eq!(config.screenshot.shadow_blur, 30.0);
        assert_eq!(config.layout.padding, 60);
        assert_eq!(config.layout.annotation_width, 240);
        assert_eq!(config.layout.gap, 50);
        assert_eq!(config.text.title_size, 44.0);
        assert_eq!(config.text.subtitle_size, 24.0);
    }

    #[test]
    fn shadow_blur_exceeds_offset_in_defaults() {
        // The reference look relies on the blur bleeding past the offset.
        let config = ScreenshotConfig::default();
        assert!(config.shadow_blur > config.shadow_offset as f32);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: StyleConfig = toml::from_str("").unwrap();
        assert_eq!(config, StyleConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: StyleConfig = toml::from_str("[canvas]\nwidth = 640\n").unwrap();
        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.canvas.height, 800);
        assert_eq!(config.layout.padding, 60);
    }

    #[test]
    fn stock_config_round_trips() {
        let config: StyleConfig = toml::from_str(&stock_config_toml()).unwrap();
        assert_eq!(config, StyleConfig::default());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = StyleConfig::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn invalid_toml_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[canvas\nwidth = ").unwrap();

        assert!(matches!(
            StyleConfig::load(&path),
            Err(ConfigError::Toml(_))
        ));
    }
}
