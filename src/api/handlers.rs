//! HTTP-agnostic request handlers
//!
//! Handlers take typed parameters plus the capture service and return
//! `Result<T, ApiError>`; the server adapter picks the wire representation.

use chrono::Utc;

use super::error::ApiError;
use super::types::{
    CubeMapData, CubeParams, FaceImage, PanoramaData, PanoramaParams,
    PreviewParams, RenderParams, StatusData,
};
use crate::core::models::{CaptureOptions, PublishedImage};
use crate::core::services::CaptureService;
use crate::plugin::PluginStats;

/// Bounds for the `/preview` thumbnail resolution
const PREVIEW_RES_RANGE: (u32, u32) = (16, 512);

/// Bounds for the `/panorama` segment count
const PANORAMA_SEGMENT_RANGE: (u32, u32) = (2, 36);

/// Capture at the current pose (the `/` test page)
pub fn snapshot(service: &mut CaptureService) -> Result<PublishedImage, ApiError> {
    Ok(service.snapshot(&CaptureOptions::full())?)
}

/// Handle `/renderimg`: move the camera, capture, publish
pub fn render_img(
    service: &mut CaptureService,
    params: &RenderParams,
) -> Result<PublishedImage, ApiError> {
    Ok(service.render_at(&params.pose, &CaptureOptions::full())?)
}

/// Handle `/cubeimg`: capture the six faces at a position
pub fn cube_img(
    service: &mut CaptureService,
    params: &CubeParams,
) -> Result<CubeMapData, ApiError> {
    let faces = service
        .cube_map(params.position)?
        .into_iter()
        .map(|(face, image)| FaceImage {
            face: face.label().to_string(),
            url: image.url,
        })
        .collect();
    Ok(CubeMapData { faces })
}

/// Handle `/preview`: low-resolution thumbnail, optionally repositioning
/// first
pub fn preview(
    service: &mut CaptureService,
    params: &PreviewParams,
    default_res: u32,
) -> Result<PublishedImage, ApiError> {
    let (lo, hi) = PREVIEW_RES_RANGE;
    let res = params.res.unwrap_or(default_res).clamp(lo, hi);
    let opts = CaptureOptions::thumbnail(res);
    match params.pose {
        Some(pose) => Ok(service.render_at(&pose, &opts)?),
        None => Ok(service.snapshot(&opts)?),
    }
}

/// Handle `/panorama`: yaw sweep at a position
pub fn panorama(
    service: &mut CaptureService,
    params: &PanoramaParams,
    default_segments: u32,
) -> Result<PanoramaData, ApiError> {
    let (lo, hi) = PANORAMA_SEGMENT_RANGE;
    let segments = params.segments.unwrap_or(default_segments).clamp(lo, hi);
    let images = service
        .panorama(params.position, segments)?
        .into_iter()
        .map(|image| image.url)
        .collect();
    Ok(PanoramaData { images })
}

/// Handle `/status`
#[must_use]
pub fn status(service: &CaptureService, stats: &PluginStats) -> StatusData {
    StatusData {
        version: crate::VERSION.to_string(),
        camera_ready: service.is_ready(),
        frames: stats.frames,
        requests: stats.requests,
        captures: service.captures(),
        started_at: stats.started_at.to_rfc3339(),
        uptime_secs: (Utc::now() - stats.started_at).num_seconds(),
    }
}
