//! Ports to the host engine and the filesystem
//!
//! Implementations live under `adapters`; the real engine supplies its own.

mod camera;
mod publisher;

pub use camera::{CameraRig, CaptureError, Renderer};
pub use publisher::{ImagePublisher, PublishError};
