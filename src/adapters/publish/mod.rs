//! Filesystem image publisher
//!
//! Copies staged screenshots into a web-servable directory and builds their
//! public URLs.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::core::models::PublishedImage;
use crate::core::ports::{ImagePublisher, PublishError};

/// Publishes screenshots by copying them into a directory a web server
/// already serves
#[derive(Debug, Clone)]
pub struct DirPublisher {
    img_dir: PathBuf,
    url_base: String,
    keep: Option<usize>,
}

impl DirPublisher {
    /// Publisher copying into `img_dir`, with URLs built from `url_base`.
    /// When `keep` is set, the oldest published images beyond that count are
    /// swept after each publish.
    #[must_use]
    pub fn new(
        img_dir: impl Into<PathBuf>,
        url_base: impl Into<String>,
        keep: Option<usize>,
    ) -> Self {
        Self {
            img_dir: img_dir.into(),
            url_base: url_base.into(),
            keep,
        }
    }

    /// Remove the oldest published images beyond `keep`
    fn sweep(&self, keep: usize) {
        let mut entries: Vec<_> = WalkDir::new(&self.img_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let modified = entry.metadata().ok().and_then(|m| m.modified().ok())?;
                Some((modified, entry.into_path()))
            })
            .collect();

        if entries.len() <= keep {
            return;
        }
        entries.sort_by_key(|(modified, _)| *modified);
        let excess = entries.len() - keep;
        for (_, path) in entries.into_iter().take(excess) {
            match fs::remove_file(&path) {
                Ok(()) => debug!("swept {}", path.display()),
                Err(e) => warn!("failed to sweep {}: {e}", path.display()),
            }
        }
    }
}

impl ImagePublisher for DirPublisher {
    fn publish(&self, shot: &Path) -> Result<PublishedImage, PublishError> {
        let name = shot
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| PublishError::BadShotPath(shot.to_path_buf()))?;

        fs::create_dir_all(&self.img_dir)?;
        let dest = self.img_dir.join(name);
        // Copy, not move: the engine derives sequential shot names from the
        // files still present in its staging directory.
        fs::copy(shot, &dest)?;
        debug!("published {}", dest.display());

        if let Some(keep) = self.keep {
            self.sweep(keep);
        }

        Ok(PublishedImage {
            filename: name.to_string(),
            url: join_url(&self.url_base, name),
        })
    }
}

fn join_url(base: &str, name: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{name}")
    } else {
        format!("{base}/{name}")
    }
}
