//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Startup summary for the serve command
#[derive(Debug, Serialize)]
pub struct ServeInfo {
    /// Address the gateway is listening on
    pub addr: String,
    /// Publish directory
    pub img_dir: String,
    /// URL prefix for published images
    pub img_url_base: String,
    /// Frame rate of the host loop
    pub fps: u32,
}

impl ServeInfo {
    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("framecam listening on http://{}", self.addr);
        println!(
            "publishing to {} (served at {})",
            self.img_dir, self.img_url_base
        );
        println!("ticking at {} fps", self.fps);
        println!();
        println!("Press Ctrl+C to stop");
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
