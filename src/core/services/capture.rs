//! Capture orchestration
//!
//! [`CaptureService`] owns the acquired camera rig and the image publisher
//! and implements the operations behind the HTTP handlers: single shots,
//! cube-map sets and panorama sweeps.

use glam::Vec3;
use log::info;
use thiserror::Error;

use crate::core::models::{
    CameraPose, CaptureOptions, CubeFace, EulerAngles, PublishedImage,
};
use crate::core::ports::{CameraRig, CaptureError, ImagePublisher, PublishError};

/// Errors from capture operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The engine has not produced a main camera yet
    #[error("main camera not ready")]
    CameraNotReady,

    /// Engine-side failure
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// Publish failure
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Camera capture operations over the engine ports
#[derive(Debug)]
pub struct CaptureService {
    rig: Option<Box<dyn CameraRig>>,
    publisher: Box<dyn ImagePublisher>,
    captures: u64,
}

impl CaptureService {
    /// Create a service with no camera attached yet
    #[must_use]
    pub fn new(publisher: Box<dyn ImagePublisher>) -> Self {
        Self {
            rig: None,
            publisher,
            captures: 0,
        }
    }

    /// Attach the acquired main camera
    pub fn attach_rig(&mut self, rig: Box<dyn CameraRig>) {
        self.rig = Some(rig);
    }

    /// Whether the main camera has been attached
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.rig.is_some()
    }

    /// Number of screenshots captured so far
    #[must_use]
    pub const fn captures(&self) -> u64 {
        self.captures
    }

    /// Current camera pose, if the camera is attached
    #[must_use]
    pub fn pose(&self) -> Option<CameraPose> {
        self.rig.as_ref().map(|rig| rig.pose())
    }

    fn rig_mut(&mut self) -> Result<&mut (dyn CameraRig + 'static), ServiceError> {
        self.rig
            .as_deref_mut()
            .ok_or(ServiceError::CameraNotReady)
    }

    /// Capture at the current pose and publish
    pub fn snapshot(
        &mut self,
        opts: &CaptureOptions,
    ) -> Result<PublishedImage, ServiceError> {
        let shot = self.rig_mut()?.capture(opts)?;
        self.captures += 1;
        Ok(self.publisher.publish(&shot)?)
    }

    /// Move the camera, then capture and publish
    pub fn render_at(
        &mut self,
        pose: &CameraPose,
        opts: &CaptureOptions,
    ) -> Result<PublishedImage, ServiceError> {
        info!(
            "new cam pos: {} {} {} ort: {} {} {} {}",
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.orientation.x,
            pose.orientation.y,
            pose.orientation.z,
            pose.orientation.w
        );
        let rig = self.rig_mut()?;
        rig.set_pose(pose)?;
        let shot = rig.capture(opts)?;
        self.captures += 1;
        Ok(self.publisher.publish(&shot)?)
    }

    /// Capture the six cube-map faces at a position, in [`CubeFace::ALL`]
    /// order
    pub fn cube_map(
        &mut self,
        position: Vec3,
    ) -> Result<Vec<(CubeFace, PublishedImage)>, ServiceError> {
        let mut faces = Vec::with_capacity(CubeFace::ALL.len());
        for face in CubeFace::ALL {
            let pose = CameraPose::new(position, face.orientation());
            let image = self.render_at(&pose, &CaptureOptions::full())?;
            faces.push((face, image));
        }
        Ok(faces)
    }

    /// Capture a yaw sweep at a position: `segments` evenly spaced captures
    /// over 360 degrees, level pitch and roll
    #[allow(clippy::cast_precision_loss)]
    pub fn panorama(
        &mut self,
        position: Vec3,
        segments: u32,
    ) -> Result<Vec<PublishedImage>, ServiceError> {
        let segments = segments.max(1);
        let step = 360.0 / segments as f32;
        let mut images = Vec::with_capacity(segments as usize);
        for i in 0..segments {
            let yaw = step * i as f32;
            let pose =
                CameraPose::new(position, EulerAngles::new(yaw, 0.0, 0.0).to_quat());
            images.push(self.render_at(&pose, &CaptureOptions::full())?);
        }
        Ok(images)
    }
}
