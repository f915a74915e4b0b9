//! Core domain models

mod cube;
mod euler;
mod image;
mod pose;

pub use cube::CubeFace;
pub use euler::EulerAngles;
pub use image::{CaptureOptions, PublishedImage};
pub use pose::CameraPose;
