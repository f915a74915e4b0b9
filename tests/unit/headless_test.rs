//! Tests for the headless engine adapter

use glam::Vec3;
use tempfile::TempDir;

use framecam::adapters::headless::{HeadlessCamera, HeadlessRenderer};
use framecam::core::models::{CameraPose, CaptureOptions};
use framecam::core::ports::{CameraRig, CaptureError, Renderer};

#[test]
fn test_acquire_after_warmup() {
    let temp = TempDir::new().unwrap();
    let mut renderer = HeadlessRenderer::new(temp.path()).with_warmup(2);

    assert!(renderer.acquire_main_camera().is_none());
    assert!(renderer.acquire_main_camera().is_none());
    assert!(renderer.acquire_main_camera().is_some());
}

#[test]
fn test_acquire_immediately_without_warmup() {
    let temp = TempDir::new().unwrap();
    let mut renderer = HeadlessRenderer::new(temp.path());
    assert!(renderer.acquire_main_camera().is_some());
}

#[test]
fn test_set_pose_rejects_non_finite() {
    let temp = TempDir::new().unwrap();
    let mut camera = HeadlessCamera::new(temp.path());

    let pose = CameraPose::at(Vec3::new(f32::NAN, 0.0, 0.0));
    let err = camera.set_pose(&pose).unwrap_err();
    assert!(matches!(err, CaptureError::InvalidPose(_)));
}

#[test]
fn test_capture_stages_a_ppm() {
    let temp = TempDir::new().unwrap();
    let mut camera = HeadlessCamera::new(temp.path());

    let shot = camera.capture(&CaptureOptions::full()).unwrap();
    assert!(shot.exists());
    assert_eq!(shot.extension().and_then(|e| e.to_str()), Some("ppm"));
    assert!(
        shot.file_name()
            .and_then(|n| n.to_str())
            .unwrap()
            .starts_with("shot_")
    );
}

#[test]
fn test_same_second_shots_get_distinct_names() {
    let temp = TempDir::new().unwrap();
    let mut camera = HeadlessCamera::new(temp.path());

    let first = camera.capture(&CaptureOptions::full()).unwrap();
    let second = camera.capture(&CaptureOptions::full()).unwrap();
    let third = camera.capture(&CaptureOptions::full()).unwrap();
    assert_ne!(first, second);
    assert_ne!(second, third);
    assert!(first.exists() && second.exists() && third.exists());
}

#[test]
fn test_thumbnail_resolution_shrinks_the_file() {
    let temp = TempDir::new().unwrap();
    let mut camera = HeadlessCamera::new(temp.path());

    let full = camera.capture(&CaptureOptions::full()).unwrap();
    let thumb = camera.capture(&CaptureOptions::thumbnail(16)).unwrap();

    let full_len = std::fs::metadata(full).unwrap().len();
    let thumb_len = std::fs::metadata(thumb).unwrap().len();
    assert!(thumb_len < full_len);
}

#[test]
fn test_different_poses_produce_different_pixels() {
    let temp = TempDir::new().unwrap();
    let mut camera = HeadlessCamera::new(temp.path());

    let near = camera.capture(&CaptureOptions::full()).unwrap();
    camera
        .set_pose(&CameraPose::at(Vec3::new(10.0, 20.0, 30.0)))
        .unwrap();
    let far = camera.capture(&CaptureOptions::full()).unwrap();

    assert_ne!(
        std::fs::read(near).unwrap(),
        std::fs::read(far).unwrap()
    );
}
