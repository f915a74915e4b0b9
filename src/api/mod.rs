//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure handler
//! functions that can be used by any HTTP server implementation
//! (`tiny_http`, axum, etc.) or directly by a host embedding the plugin.
//!
//! ## Design
//!
//! - **Handlers are plain functions**: take typed input plus the capture
//!   service, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: no HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for
//!   translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{cube_img, panorama, preview, render_img, snapshot, status};
pub use types::{
    ApiResponse, CubeMapData, CubeParams, FaceImage, PanoramaData,
    PanoramaParams, PreviewParams, RenderParams, StatusData,
};
