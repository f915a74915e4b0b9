//! Headless engine stand-in
//!
//! Implements the renderer and camera ports without a real engine: captures
//! are small binary PPM files whose pixel color encodes the current pose, so
//! two different poses produce visibly different images. Used by the
//! standalone host binary and the tests.

use std::path::{Path, PathBuf};

use chrono::Utc;
use log::debug;

use crate::core::models::{CameraPose, CaptureOptions};
use crate::core::ports::{CameraRig, CaptureError, Renderer};

/// Square resolution used when no override is requested
const DEFAULT_RES: u32 = 64;

/// Renderer stand-in producing PPM screenshots
#[derive(Debug)]
pub struct HeadlessRenderer {
    capture_dir: PathBuf,
    warmup_frames: u32,
}

impl HeadlessRenderer {
    /// Renderer staging screenshots under `capture_dir`
    #[must_use]
    pub fn new(capture_dir: impl Into<PathBuf>) -> Self {
        Self {
            capture_dir: capture_dir.into(),
            warmup_frames: 0,
        }
    }

    /// Number of acquisition attempts that fail before the camera appears;
    /// mimics an engine that creates its camera entity a few frames in
    #[must_use]
    pub fn with_warmup(mut self, frames: u32) -> Self {
        self.warmup_frames = frames;
        self
    }
}

impl Renderer for HeadlessRenderer {
    fn acquire_main_camera(&mut self) -> Option<Box<dyn CameraRig>> {
        if self.warmup_frames > 0 {
            self.warmup_frames -= 1;
            return None;
        }
        debug!("headless main camera created");
        Some(Box::new(HeadlessCamera::new(self.capture_dir.clone())))
    }
}

/// Camera rig stand-in
#[derive(Debug)]
pub struct HeadlessCamera {
    capture_dir: PathBuf,
    pose: CameraPose,
}

impl HeadlessCamera {
    /// Camera staging screenshots under `capture_dir`
    #[must_use]
    pub fn new(capture_dir: impl Into<PathBuf>) -> Self {
        Self {
            capture_dir: capture_dir.into(),
            pose: CameraPose::default(),
        }
    }
}

impl CameraRig for HeadlessCamera {
    fn pose(&self) -> CameraPose {
        self.pose
    }

    fn set_pose(&mut self, pose: &CameraPose) -> Result<(), CaptureError> {
        if !pose.is_finite() {
            return Err(CaptureError::InvalidPose(
                "non-finite pose component".to_string(),
            ));
        }
        self.pose = *pose;
        Ok(())
    }

    fn capture(&mut self, opts: &CaptureOptions) -> Result<PathBuf, CaptureError> {
        let res = opts.resolution.unwrap_or(DEFAULT_RES).max(1);
        std::fs::create_dir_all(&self.capture_dir)?;
        let path = next_shot_path(&self.capture_dir);
        std::fs::write(&path, ppm_image(&self.pose, res))?;
        debug!("captured {}", path.display());
        Ok(path)
    }
}

/// Shot names are sequential within a second: `shot_<stamp>.ppm`, then
/// `shot_<stamp>_1.ppm` and so on while earlier shots from the same second
/// are still staged.
fn next_shot_path(dir: &Path) -> PathBuf {
    let stamp = Utc::now().format("%Y%m%d_%H%M%S");
    let base = format!("shot_{stamp}");
    let mut candidate = dir.join(format!("{base}.ppm"));
    let mut n = 1u32;
    while candidate.exists() {
        candidate = dir.join(format!("{base}_{n}.ppm"));
        n += 1;
    }
    candidate
}

/// A solid-color binary PPM of the pose
fn ppm_image(pose: &CameraPose, res: u32) -> Vec<u8> {
    let [r, g, b] = pose_rgb(pose);
    let mut out = format!("P6\n{res} {res}\n255\n").into_bytes();
    out.reserve((res * res * 3) as usize);
    for _ in 0..res * res {
        out.extend_from_slice(&[r, g, b]);
    }
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pose_rgb(pose: &CameraPose) -> [u8; 3] {
    let enc = |v: f32| (v * 31.0).rem_euclid(256.0) as u8;
    [
        enc(pose.position.x + pose.orientation.x * 97.0),
        enc(pose.position.y + pose.orientation.y * 97.0),
        enc(pose.position.z + pose.orientation.z * 97.0 + pose.orientation.w * 53.0),
    ]
}
