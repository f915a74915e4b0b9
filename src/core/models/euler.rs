//! Euler angle to quaternion conversion
//!
//! Convention: yaw rotates about world +Y, pitch about the camera's X axis,
//! roll about its Z axis, applied in that order (Y, then X, then Z).

use glam::Quat;

/// Yaw/pitch/roll angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    /// Rotation about world +Y, degrees
    pub yaw: f32,
    /// Rotation about the camera X axis, degrees
    pub pitch: f32,
    /// Rotation about the camera Z axis, degrees
    pub roll: f32,
}

impl EulerAngles {
    /// Create angles from yaw, pitch and roll in degrees
    #[must_use]
    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Convert to a unit quaternion.
    ///
    /// Closed-form half-angle composition of the three axis rotations,
    /// equivalent to `Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use framecam::core::models::EulerAngles;
    /// use glam::Quat;
    ///
    /// let q = EulerAngles::new(0.0, 0.0, 0.0).to_quat();
    /// assert!(q.abs_diff_eq(Quat::IDENTITY, 1e-6));
    /// ```
    #[must_use]
    pub fn to_quat(self) -> Quat {
        let (sy, cy) = (self.yaw.to_radians() * 0.5).sin_cos();
        let (sp, cp) = (self.pitch.to_radians() * 0.5).sin_cos();
        let (sr, cr) = (self.roll.to_radians() * 0.5).sin_cos();

        Quat::from_xyzw(
            sp * cy * cr + cp * sy * sr,
            cp * sy * cr - sp * cy * sr,
            cp * cy * sr - sp * sy * cr,
            cp * cy * cr + sp * sy * sr,
        )
    }
}
