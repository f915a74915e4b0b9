//! Adapters implementing the core ports
//!
//! - [`headless`] - engine stand-in for the standalone host and tests
//! - [`publish`] - filesystem image publisher
//!
//! A real engine embedding the plugin supplies its own `Renderer` and
//! `CameraRig` implementations instead of [`headless`].

pub mod headless;
pub mod publish;
