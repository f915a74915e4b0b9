//! API request and response types
//!
//! Requests arrive as decoded query-string pairs; every `from_query`
//! constructor validates its parameters and reports a 400 on anything
//! missing or unparseable.

use glam::{Quat, Vec3};
use serde::Serialize;

use super::error::{ApiError, ApiErrorData};
use crate::core::models::CameraPose;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// QUERY PARAMETER HELPERS
// =============================================================================

fn raw_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn f32_param(pairs: &[(String, String)], name: &str) -> Result<f32, ApiError> {
    let raw = raw_param(pairs, name)
        .ok_or_else(|| ApiError::bad_request(format!("missing parameter: {name}")))?;
    let value: f32 = raw.parse().map_err(|_| {
        ApiError::bad_request(format!("parameter {name} is not a number: {raw}"))
    })?;
    if !value.is_finite() {
        return Err(ApiError::bad_request(format!(
            "parameter {name} must be finite"
        )));
    }
    Ok(value)
}

fn opt_u32_param(
    pairs: &[(String, String)],
    name: &str,
) -> Result<Option<u32>, ApiError> {
    match raw_param(pairs, name) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            ApiError::bad_request(format!(
                "parameter {name} is not a positive integer: {raw}"
            ))
        }),
    }
}

fn position_param(pairs: &[(String, String)]) -> Result<Vec3, ApiError> {
    Ok(Vec3::new(
        f32_param(pairs, "posX")?,
        f32_param(pairs, "posY")?,
        f32_param(pairs, "posZ")?,
    ))
}

fn orientation_param(pairs: &[(String, String)]) -> Result<Quat, ApiError> {
    let quat = Quat::from_xyzw(
        f32_param(pairs, "ortX")?,
        f32_param(pairs, "ortY")?,
        f32_param(pairs, "ortZ")?,
        f32_param(pairs, "ortW")?,
    );
    if quat.length_squared() < 1e-6 {
        return Err(ApiError::bad_request(
            "orientation quaternion must be non-zero",
        ));
    }
    Ok(quat.normalize())
}

const POSE_PARAMS: [&str; 7] =
    ["posX", "posY", "posZ", "ortX", "ortY", "ortZ", "ortW"];

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Parameters for `/renderimg`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    /// Requested camera pose
    pub pose: CameraPose,
}

impl RenderParams {
    /// Parse from decoded query pairs
    pub fn from_query(pairs: &[(String, String)]) -> Result<Self, ApiError> {
        Ok(Self {
            pose: CameraPose::new(position_param(pairs)?, orientation_param(pairs)?),
        })
    }
}

/// Parameters for `/cubeimg`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeParams {
    /// Capture position
    pub position: Vec3,
}

impl CubeParams {
    /// Parse from decoded query pairs
    pub fn from_query(pairs: &[(String, String)]) -> Result<Self, ApiError> {
        Ok(Self {
            position: position_param(pairs)?,
        })
    }
}

/// Parameters for `/preview`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewParams {
    /// Optional camera pose; the pose parameters are all-or-none
    pub pose: Option<CameraPose>,
    /// Optional square thumbnail resolution
    pub res: Option<u32>,
}

impl PreviewParams {
    /// Parse from decoded query pairs
    pub fn from_query(pairs: &[(String, String)]) -> Result<Self, ApiError> {
        let any_pose = POSE_PARAMS
            .iter()
            .any(|name| raw_param(pairs, name).is_some());
        let pose = if any_pose {
            Some(CameraPose::new(
                position_param(pairs)?,
                orientation_param(pairs)?,
            ))
        } else {
            None
        };
        Ok(Self {
            pose,
            res: opt_u32_param(pairs, "res")?,
        })
    }
}

/// Parameters for `/panorama`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanoramaParams {
    /// Capture position
    pub position: Vec3,
    /// Optional segment count (`pN`)
    pub segments: Option<u32>,
}

impl PanoramaParams {
    /// Parse from decoded query pairs
    pub fn from_query(pairs: &[(String, String)]) -> Result<Self, ApiError> {
        Ok(Self {
            position: position_param(pairs)?,
            segments: opt_u32_param(pairs, "pN")?,
        })
    }
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// One published cube-map face
#[derive(Debug, Serialize)]
pub struct FaceImage {
    /// Face label (front, left, back, right, up, down)
    pub face: String,
    /// Public URL of the captured face
    pub url: String,
}

/// `/cubeimg` response data
#[derive(Debug, Serialize)]
pub struct CubeMapData {
    /// The six faces in capture order
    pub faces: Vec<FaceImage>,
}

/// `/panorama` response data
#[derive(Debug, Serialize)]
pub struct PanoramaData {
    /// Segment image URLs, in yaw order from 0 degrees
    pub images: Vec<String>,
}

/// `/status` response data
#[derive(Debug, Serialize)]
pub struct StatusData {
    /// Library version
    pub version: String,
    /// Whether the engine's main camera has been acquired
    pub camera_ready: bool,
    /// Frames polled since start
    pub frames: u64,
    /// HTTP requests served since start
    pub requests: u64,
    /// Screenshots captured since start
    pub captures: u64,
    /// Start time (RFC 3339)
    pub started_at: String,
    /// Seconds since start
    pub uptime_secs: i64,
}
