//! Capture options and published image record

use serde::Serialize;

/// Options for a single screenshot capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureOptions {
    /// Square resolution override in pixels; `None` captures at the engine's
    /// render resolution
    pub resolution: Option<u32>,
}

impl CaptureOptions {
    /// Capture at the engine's render resolution
    #[must_use]
    pub const fn full() -> Self {
        Self { resolution: None }
    }

    /// Capture a low-resolution thumbnail
    #[must_use]
    pub const fn thumbnail(resolution: u32) -> Self {
        Self {
            resolution: Some(resolution),
        }
    }
}

/// A screenshot that has been copied into the web directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedImage {
    /// File name inside the publish directory
    pub filename: String,
    /// Public URL clients fetch the image from
    pub url: String,
}
