//! framecam - embedded HTTP camera control for a 3D world engine frame loop
//!
//! This library lets a host engine expose its main camera over HTTP: external
//! clients reposition the camera via query-string parameters and retrieve
//! rendered screenshots (single images, cube-map sets, previews, panoramas)
//! as files published into a web-servable directory.
//!
//! The host engine calls [`plugin::HttpCameraPlugin::update`] once per
//! rendered frame; everything else hangs off that single-threaded poll.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod plugin;
pub mod server;
