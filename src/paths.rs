//! Centralized path definitions for framecam
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.framecam/
//! └── config.toml               # Gateway and publish configuration
//! ```
//!
//! Capture staging and publish directories are configured per run; see
//! [`crate::config::ServeConfig`].

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".framecam";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global framecam directory.
///
/// Returns `~/.framecam/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.framecam/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
