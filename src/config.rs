//! Plugin configuration
//!
//! TOML config for the gateway and publish paths. Loaded from an explicit
//! `--config` path (errors reported) or the global
//! `~/.framecam/config.toml` (absent or broken files fall back to
//! defaults).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors loading configuration from an explicit path
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying i/o failure
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this config
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML failure
        #[source]
        source: toml::de::Error,
    },
}

/// Gateway and publish configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeConfig {
    /// Listen address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory where the engine stages raw screenshots
    #[serde(default = "default_capture_dir")]
    pub capture_dir: PathBuf,

    /// Web-servable directory published images are copied into
    #[serde(default = "default_img_dir")]
    pub img_dir: PathBuf,

    /// URL prefix prepended to published image filenames
    #[serde(default = "default_img_url_base")]
    pub img_url_base: String,

    /// Companion viewer page served at `/client` (embedded viewer when
    /// unset)
    #[serde(default)]
    pub client_page: Option<PathBuf>,

    /// Default square resolution for `/preview`
    #[serde(default = "default_preview_res")]
    pub preview_res: u32,

    /// Default number of `/panorama` segments
    #[serde(default = "default_panorama_segments")]
    pub panorama_segments: u32,

    /// Cap on images kept in the publish directory (unbounded when unset)
    #[serde(default)]
    pub keep_published: Option<usize>,

    /// Frame rate of the standalone host loop
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8886
}

fn default_capture_dir() -> PathBuf {
    PathBuf::from("screenshots")
}

fn default_img_dir() -> PathBuf {
    PathBuf::from("webroot/img")
}

fn default_img_url_base() -> String {
    "/img/".to_string()
}

const fn default_preview_res() -> u32 {
    128
}

const fn default_panorama_segments() -> u32 {
    8
}

const fn default_fps() -> u32 {
    60
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            capture_dir: default_capture_dir(),
            img_dir: default_img_dir(),
            img_url_base: default_img_url_base(),
            client_page: None,
            preview_res: default_preview_res(),
            panorama_segments: default_panorama_segments(),
            keep_published: None,
            fps: default_fps(),
        }
    }
}

impl ServeConfig {
    /// Load from the global config path, or defaults if absent or unreadable
    #[must_use]
    pub fn load_global() -> Self {
        let path = paths::global_config();
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Load from an explicit path; failures are reported, not swallowed
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to disk as pretty TOML
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
