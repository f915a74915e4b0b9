//! Engine-agnostic core: domain models, host ports and capture services

pub mod models;
pub mod ports;
pub mod services;
