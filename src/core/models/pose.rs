//! Camera pose model

use glam::{Quat, Vec3};

/// A camera pose in world space: position plus orientation quaternion.
///
/// # Examples
///
/// ```
/// use framecam::core::models::CameraPose;
/// use glam::Vec3;
///
/// let pose = CameraPose::at(Vec3::new(0.0, 6.0, 30.0));
/// assert!(pose.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space position
    pub position: Vec3,
    /// Orientation quaternion (x, y, z, w)
    pub orientation: Quat,
}

impl CameraPose {
    /// Create a pose from position and orientation
    #[must_use]
    pub const fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose at a position with identity orientation
    #[must_use]
    pub const fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// Whether every component is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.orientation.is_finite()
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}
