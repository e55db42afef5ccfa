//! Batch manifest: the ordered list of screenshots to compose.
//!
//! A manifest is a JSON file with one `entries` array. Each entry names an
//! input file (relative to the source directory), an output file (relative
//! to the output directory), an optional caption, and which side of the
//! screenshot the caption sits on:
//!
//! ```json
//! {
//!   "entries": [
//!     {
//!       "input": "popup-dark.png",
//!       "output": "1-popup-dark.png",
//!       "caption": { "title": "Dark Theme", "subtitle": "Sleek dark interface" },
//!       "side": "right"
//!     },
//!     { "input": "options.png", "output": "2-options.png", "caption": "Options" }
//!   ]
//! }
//! ```
//!
//! A caption may be a bare string (title only) or a `{title, subtitle}`
//! object. `side` defaults to `"right"` and entries without a caption get
//! the full canvas width.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Manifest has no entries")]
    Empty,
}

/// Which side of the screenshot the caption column occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    #[default]
    Right,
}

/// Caption text for one listing image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl Caption {
    pub fn title_only(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
        }
    }
}

/// Accepts both manifest shapes: `"caption": "Dark Theme"` and
/// `"caption": {"title": ..., "subtitle": ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CaptionSpec {
    Title(String),
    Full(Caption),
}

impl From<CaptionSpec> for Caption {
    fn from(spec: CaptionSpec) -> Self {
        match spec {
            CaptionSpec::Title(title) => Caption::title_only(title),
            CaptionSpec::Full(caption) => caption,
        }
    }
}

fn deserialize_caption<'de, D>(deserializer: D) -> Result<Option<Caption>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let spec: Option<CaptionSpec> = Option::deserialize(deserializer)?;
    Ok(spec.map(Caption::from))
}

/// One unit of work: input file, output file, optional caption, placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Input filename, relative to the source directory.
    pub input: String,
    /// Output filename, relative to the output directory.
    pub output: String,
    #[serde(
        default,
        deserialize_with = "deserialize_caption",
        skip_serializing_if = "Option::is_none"
    )]
    pub caption: Option<Caption>,
    #[serde(default)]
    pub side: Side,
}

/// The full batch, fixed for the run. Order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub entries: Vec<BatchEntry>,
}

impl Manifest {
    /// Load and validate a manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let manifest: Manifest = serde_json::from_str(&content)?;
        if manifest.entries.is_empty() {
            return Err(ManifestError::Empty);
        }
        Ok(manifest)
    }
}

/// Stock manifest matching the four listing images this tool was built for.
///
/// Printed by `storeframe gen-manifest` as a starting point.
pub fn stock_manifest_json() -> String {
    let manifest = Manifest {
        entries: vec![
            BatchEntry {
                input: "popup-dark.png".into(),
                output: "1-popup-dark.png".into(),
                caption: Some(Caption {
                    title: "Dark Theme".into(),
                    subtitle: Some(
                        "Manage search engines with a sleek dark interface".into(),
                    ),
                }),
                side: Side::Right,
            },
            BatchEntry {
                input: "popup-light.png".into(),
                output: "2-popup-light.png".into(),
                caption: Some(Caption {
                    title: "Light Theme".into(),
                    subtitle: Some(
                        "Automatic theme switching to match your preferences".into(),
                    ),
                }),
                side: Side::Right,
            },
            BatchEntry {
                input: "context-menu-single.png".into(),
                output: "3-context-menu-single.png".into(),
                caption: Some(Caption {
                    title: "Quick Search".into(),
                    subtitle: Some("Right-click selected text to search instantly".into()),
                }),
                side: Side::Right,
            },
            BatchEntry {
                input: "context-menu-multiple.png".into(),
                output: "4-context-menu-multiple.png".into(),
                caption: Some(Caption {
                    title: "Multiple Engines".into(),
                    subtitle: Some("Choose from all your enabled search engines".into()),
                }),
                side: Side::Right,
            },
        ],
    };
    // Serialization of a known-good value cannot fail
    serde_json::to_string_pretty(&manifest).unwrap()
}
