//! TOML theme loading: the named-color table and gradient defaults.
//!
//! A completely empty theme file must still work; every field defaults, and
//! a missing file yields the default theme. The color table starts empty and
//! is populated by whatever the embedding application (or the user's theme
//! file) puts in it. After loading, the theme is read-only.

use crate::error::Error;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Named colors plus gradient defaults, as deserialized from TOML.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Theme {
    /// Case-sensitive name to `#RGB`/`#RRGGBB` hex string.
    pub colors: HashMap<String, String>,
    /// Defaults applied when a gradient flag is not given.
    pub gradient: GradientDefaults,
}

/// The `[gradient]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GradientDefaults {
    /// Interpolation space name, `rgb` or `hls`.
    pub space: String,
}

impl Default for GradientDefaults {
    fn default() -> Self {
        Self {
            space: "rgb".to_string(),
        }
    }
}

impl Theme {
    /// Load the theme from the default config path.
    ///
    /// A missing file is not an error; it yields the default theme so
    /// zero-config usage works.
    pub fn load() -> Result<Self, Error> {
        let path = default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_path(&path)
    }

    /// Load from an explicit file path.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }
}

/// `~/.config/hypr/hyprtint.toml`, following the Hyprland config layout.
fn default_path() -> Result<PathBuf, Error> {
    let base = directories::BaseDirs::new().ok_or(Error::ConfigDirNotFound)?;
    Ok(base.config_dir().join("hypr").join("hyprtint.toml"))
}
