//! Host-engine camera port
//!
//! Defines the interface between the plugin and the engine's renderer,
//! camera entity and screenshot capture.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::{CameraPose, CaptureOptions};

/// Errors from the engine capture path
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The engine rejected the requested pose
    #[error("invalid camera pose: {0}")]
    InvalidPose(String),

    /// The engine failed to produce a screenshot
    #[error("screenshot capture failed: {0}")]
    Capture(String),

    /// Filesystem failure while staging the shot
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// The engine's main camera: a placeable entity that can render screenshots.
///
/// `capture` writes a screenshot file into the engine's staging directory and
/// returns its path. The engine derives sequential shot names from the files
/// already present there, so callers must leave staged shots in place.
pub trait CameraRig: fmt::Debug + Send {
    /// Current pose
    fn pose(&self) -> CameraPose;

    /// Move the camera to a new pose
    fn set_pose(&mut self, pose: &CameraPose) -> Result<(), CaptureError>;

    /// Render a screenshot and return the staged file path
    fn capture(&mut self, opts: &CaptureOptions) -> Result<PathBuf, CaptureError>;
}

/// Access to the host renderer.
///
/// The engine may not have created its main camera when the plugin starts;
/// acquisition is retried every frame until it succeeds.
pub trait Renderer: fmt::Debug + Send {
    /// Try to take the engine's main camera
    fn acquire_main_camera(&mut self) -> Option<Box<dyn CameraRig>>;
}
