//! Configuration (`roadmap.toml`).
//!
//! Every field is optional; missing fields take the defaults below.
//! CLI flags are applied on top by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::Locale;
use crate::impls::html_surface::DEFAULT_CONTAINER_ID;
use crate::view::Layout;

pub const DEFAULT_SOURCE: &str = "roadmap.json";
pub const DEFAULT_TITLE: &str = "Roadmap";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapConfig {
    /// File path or http(s) URL of the roadmap document.
    /// Relative paths resolve against the current directory, not the config file.
    pub source: String,
    pub container_id: String,
    pub layout: Layout,
    pub locale: Locale,
    /// Page heading.
    pub title: String,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            layout: Layout::default(),
            locale: Locale::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl RoadmapConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
