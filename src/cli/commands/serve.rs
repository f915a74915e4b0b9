//! Standalone host loop command

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use framecam::adapters::headless::HeadlessRenderer;
use framecam::adapters::publish::DirPublisher;
use framecam::config::ServeConfig;
use framecam::output::{OutputMode, ServeInfo};
use framecam::plugin::HttpCameraPlugin;
use framecam::server::HttpGateway;

/// Overrides collected from the command line
#[derive(Debug, Default)]
pub struct ServeArgs {
    /// Explicit config file path
    pub config: Option<PathBuf>,
    /// Listen port override
    pub port: Option<u16>,
    /// Listen address override
    pub bind: Option<String>,
    /// Screenshot staging directory override
    pub capture_dir: Option<PathBuf>,
    /// Publish directory override
    pub img_dir: Option<PathBuf>,
    /// URL prefix override
    pub url_base: Option<String>,
    /// Frame rate override
    pub fps: Option<u32>,
}

/// Run the standalone headless host loop
pub fn serve(args: ServeArgs, mode: OutputMode) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServeConfig::load_from(path)?,
        None => ServeConfig::load_global(),
    };
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(capture_dir) = args.capture_dir {
        config.capture_dir = capture_dir;
    }
    if let Some(img_dir) = args.img_dir {
        config.img_dir = img_dir;
    }
    if let Some(url_base) = args.url_base {
        config.img_url_base = url_base;
    }
    if let Some(fps) = args.fps {
        config.fps = fps;
    }

    let renderer = HeadlessRenderer::new(&config.capture_dir);
    let publisher = DirPublisher::new(
        &config.img_dir,
        config.img_url_base.clone(),
        config.keep_published,
    );
    let gateway = HttpGateway::bind(&config)?;
    let addr = gateway.local_addr().map_or_else(
        || format!("{}:{}", config.bind, config.port),
        |addr| addr.to_string(),
    );

    let mut plugin =
        HttpCameraPlugin::new(Box::new(renderer), Box::new(publisher), gateway);

    ServeInfo {
        addr,
        img_dir: config.img_dir.display().to_string(),
        img_url_base: config.img_url_base.clone(),
        fps: config.fps,
    }
    .render(mode);

    let frame = Duration::from_secs_f64(1.0 / f64::from(config.fps.max(1)));
    let dt = frame.as_secs_f32();
    loop {
        plugin.update(dt);
        thread::sleep(frame);
    }
}
