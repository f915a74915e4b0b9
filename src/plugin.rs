//! Frame-loop entry point
//!
//! The host engine calls [`HttpCameraPlugin::update`] once per rendered
//! frame. Until the engine's main camera exists, each tick retries
//! acquisition; after that, each tick polls the HTTP socket exactly once.

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::core::ports::{ImagePublisher, Renderer};
use crate::core::services::CaptureService;
use crate::server::HttpGateway;

/// Counters kept across the plugin's lifetime
#[derive(Debug, Clone, Copy)]
pub struct PluginStats {
    /// When the plugin was constructed
    pub started_at: DateTime<Utc>,
    /// Frames polled since start
    pub frames: u64,
    /// HTTP requests served since start
    pub requests: u64,
}

impl PluginStats {
    /// Fresh counters starting now
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            frames: 0,
            requests: 0,
        }
    }
}

impl Default for PluginStats {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded HTTP camera plugin.
///
/// Owns the renderer port, the capture service and the HTTP gateway; wire it
/// into the host's per-frame update callback.
#[derive(Debug)]
pub struct HttpCameraPlugin {
    renderer: Box<dyn Renderer>,
    gateway: HttpGateway,
    service: CaptureService,
    stats: PluginStats,
}

impl HttpCameraPlugin {
    /// Assemble the plugin from its ports and a bound gateway
    #[must_use]
    pub fn new(
        renderer: Box<dyn Renderer>,
        publisher: Box<dyn ImagePublisher>,
        gateway: HttpGateway,
    ) -> Self {
        Self {
            renderer,
            gateway,
            service: CaptureService::new(publisher),
            stats: PluginStats::new(),
        }
    }

    /// Per-frame tick. `_dt` is the host's frame time in seconds; it is
    /// accepted to match the host callback signature.
    pub fn update(&mut self, _dt: f32) {
        self.stats.frames += 1;

        if !self.service.is_ready() {
            if let Some(rig) = self.renderer.acquire_main_camera() {
                info!("main camera acquired");
                self.service.attach_rig(rig);
            }
            return;
        }

        match self.gateway.poll(&mut self.service, &mut self.stats) {
            Ok(_served) => {},
            Err(e) => warn!("http poll failed: {e}"),
        }
    }

    /// Lifetime counters
    #[must_use]
    pub const fn stats(&self) -> &PluginStats {
        &self.stats
    }

    /// The capture service (camera readiness, capture count)
    #[must_use]
    pub const fn service(&self) -> &CaptureService {
        &self.service
    }

    /// Actual gateway listen address (useful when bound to port 0)
    #[must_use]
    pub fn local_addr(&self) -> Option<std::net::SocketAddr> {
        self.gateway.local_addr()
    }
}
