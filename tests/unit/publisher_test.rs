//! Tests for the filesystem publisher

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;

use framecam::adapters::publish::DirPublisher;
use framecam::core::ports::{ImagePublisher, PublishError};

fn stage_shot(dir: &Path, name: &str) -> std::path::PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, b"P6\n1 1\n255\nabc").unwrap();
    path
}

#[test]
fn test_publish_copies_and_builds_url() {
    let temp = TempDir::new().unwrap();
    let shot = stage_shot(&temp.path().join("shots"), "shot_1.ppm");
    let publisher = DirPublisher::new(temp.path().join("img"), "/img/", None);

    let image = publisher.publish(&shot).unwrap();
    assert_eq!(image.filename, "shot_1.ppm");
    assert_eq!(image.url, "/img/shot_1.ppm");
    assert!(temp.path().join("img").join("shot_1.ppm").exists());
}

#[test]
fn test_publish_leaves_the_staged_file() {
    let temp = TempDir::new().unwrap();
    let shot = stage_shot(&temp.path().join("shots"), "shot_1.ppm");
    let publisher = DirPublisher::new(temp.path().join("img"), "/img/", None);

    publisher.publish(&shot).unwrap();
    assert!(shot.exists());
}

#[test]
fn test_url_base_without_trailing_slash() {
    let temp = TempDir::new().unwrap();
    let shot = stage_shot(&temp.path().join("shots"), "shot_1.ppm");
    let publisher =
        DirPublisher::new(temp.path().join("img"), "http://example.com/view", None);

    let image = publisher.publish(&shot).unwrap();
    assert_eq!(image.url, "http://example.com/view/shot_1.ppm");
}

#[test]
fn test_publish_rejects_pathless_shot() {
    let temp = TempDir::new().unwrap();
    let publisher = DirPublisher::new(temp.path().join("img"), "/img/", None);

    let err = publisher.publish(Path::new("/")).unwrap_err();
    assert!(matches!(err, PublishError::BadShotPath(_)));
}

#[test]
fn test_keep_published_sweeps_oldest() {
    let temp = TempDir::new().unwrap();
    let shots = temp.path().join("shots");
    let img_dir = temp.path().join("img");
    let publisher = DirPublisher::new(&img_dir, "/img/", Some(2));

    for name in ["shot_1.ppm", "shot_2.ppm", "shot_3.ppm"] {
        let shot = stage_shot(&shots, name);
        publisher.publish(&shot).unwrap();
        // Distinct mtimes so the sweep has an unambiguous oldest
        thread::sleep(Duration::from_millis(30));
    }

    let published: Vec<_> = fs::read_dir(&img_dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(published.len(), 2);
    assert!(!published.contains(&"shot_1.ppm".to_string()));
    assert!(published.contains(&"shot_3.ppm".to_string()));
}
