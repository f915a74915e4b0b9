//! Image publishing port
//!
//! Defines the interface for moving staged screenshots somewhere a web
//! server can reach them.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::PublishedImage;

/// Errors while publishing a staged screenshot
#[derive(Debug, Error)]
pub enum PublishError {
    /// The staged path does not end in a usable file name
    #[error("staged shot has no usable file name: {}", .0.display())]
    BadShotPath(PathBuf),

    /// Filesystem failure while copying into the publish directory
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Publishes staged screenshots and reports their public URLs
pub trait ImagePublisher: fmt::Debug + Send {
    /// Publish one staged screenshot
    fn publish(&self, shot: &Path) -> Result<PublishedImage, PublishError>;
}
