//! Core services

mod capture;

pub use capture::{CaptureService, ServiceError};
