//! HTTP server adapters
//!
//! This module provides adapters that translate between HTTP frameworks
//! and the HTTP-agnostic API layer.
//!
//! Currently supported:
//! - `tiny_http` - lightweight server polled non-blockingly from the frame
//!   loop

mod tiny_http;

pub use tiny_http::{GatewayError, HttpGateway};
