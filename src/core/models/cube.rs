//! Cube-map face orientations

use glam::Quat;

use super::EulerAngles;

/// One face of a six-sided cube-map capture.
///
/// Faces are captured in [`CubeFace::ALL`] order: the four horizontal
/// directions counter-clockwise from front, then up, then down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    /// Looking along the camera's rest direction
    Front,
    /// Yaw 90
    Left,
    /// Yaw 180
    Back,
    /// Yaw 270
    Right,
    /// Pitch 90
    Up,
    /// Pitch -90
    Down,
}

impl CubeFace {
    /// All faces in capture order
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Left,
        Self::Back,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    /// Face name used in responses and logs
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Left => "left",
            Self::Back => "back",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Euler angles of this face
    #[must_use]
    pub const fn euler(self) -> EulerAngles {
        match self {
            Self::Front => EulerAngles::new(0.0, 0.0, 0.0),
            Self::Left => EulerAngles::new(90.0, 0.0, 0.0),
            Self::Back => EulerAngles::new(180.0, 0.0, 0.0),
            Self::Right => EulerAngles::new(270.0, 0.0, 0.0),
            Self::Up => EulerAngles::new(0.0, 90.0, 0.0),
            Self::Down => EulerAngles::new(0.0, -90.0, 0.0),
        }
    }

    /// Orientation quaternion of this face
    #[must_use]
    pub fn orientation(self) -> Quat {
        self.euler().to_quat()
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
