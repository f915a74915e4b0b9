//! End-to-end HTTP tests
//!
//! A client thread issues a raw HTTP GET while the test ticks the plugin's
//! frame loop, mirroring how a host engine would drive it.

use std::io::{Read as _, Write as _};
use std::net::{SocketAddr, TcpStream};
use std::thread;
use std::time::Duration;

use tempfile::TempDir;

use framecam::adapters::headless::HeadlessRenderer;
use framecam::adapters::publish::DirPublisher;
use framecam::config::ServeConfig;
use framecam::core::services::CaptureService;
use framecam::plugin::{HttpCameraPlugin, PluginStats};
use framecam::server::HttpGateway;

const RENDER_QUERY: &str = "posX=0&posY=6&posZ=30&ortX=0&ortY=0&ortZ=0&ortW=1";

fn test_config(temp: &TempDir) -> ServeConfig {
    ServeConfig {
        bind: "127.0.0.1".to_string(),
        port: 0,
        capture_dir: temp.path().join("shots"),
        img_dir: temp.path().join("img"),
        ..ServeConfig::default()
    }
}

fn start_plugin(temp: &TempDir) -> (HttpCameraPlugin, SocketAddr) {
    let config = test_config(temp);
    let gateway = HttpGateway::bind(&config).unwrap();
    let addr = gateway.local_addr().unwrap();
    let renderer = HeadlessRenderer::new(&config.capture_dir);
    let publisher =
        DirPublisher::new(&config.img_dir, config.img_url_base.clone(), None);
    let plugin =
        HttpCameraPlugin::new(Box::new(renderer), Box::new(publisher), gateway);
    (plugin, addr)
}

/// Issue a GET from a client thread; returns the full raw response
fn http_get(addr: SocketAddr, path: String) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut stream = TcpStream::connect(addr).unwrap();
        write!(
            stream,
            "GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"
        )
        .unwrap();
        let mut response = Vec::new();
        stream.read_to_end(&mut response).unwrap();
        String::from_utf8_lossy(&response).into_owned()
    })
}

/// Tick the frame loop until the client thread finishes
fn drive(plugin: &mut HttpCameraPlugin, client: &thread::JoinHandle<String>) {
    for _ in 0..2000 {
        plugin.update(0.016);
        if client.is_finished() {
            return;
        }
        thread::sleep(Duration::from_millis(2));
    }
    panic!("request was not served in time");
}

fn body_of(response: &str) -> &str {
    response.split("\r\n\r\n").nth(1).unwrap_or("")
}

// =============================================================================
// ROUTES
// =============================================================================

#[test]
fn test_renderimg_returns_published_url() {
    let temp = TempDir::new().unwrap();
    let (mut plugin, addr) = start_plugin(&temp);

    let client = http_get(addr, format!("/renderimg?{RENDER_QUERY}"));
    drive(&mut plugin, &client);
    let response = client.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 200"));
    let url = body_of(&response).trim();
    assert!(url.starts_with("/img/shot_"), "unexpected body: {url}");

    // The published file is really there
    let name = url.strip_prefix("/img/").unwrap();
    assert!(temp.path().join("img").join(name).exists());
}

#[test]
fn test_renderimg_missing_params_is_400() {
    let temp = TempDir::new().unwrap();
    let (mut plugin, addr) = start_plugin(&temp);

    let client = http_get(addr, "/renderimg?posX=1".to_string());
    drive(&mut plugin, &client);
    let response = client.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 400"));
    assert!(body_of(&response).contains("BAD_REQUEST"));
}

#[test]
fn test_unknown_route_is_404() {
    let temp = TempDir::new().unwrap();
    let (mut plugin, addr) = start_plugin(&temp);

    let client = http_get(addr, "/teleport".to_string());
    drive(&mut plugin, &client);
    let response = client.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 404"));
    assert!(body_of(&response).contains("NOT_FOUND"));
}

#[test]
fn test_testpage_embeds_an_image() {
    let temp = TempDir::new().unwrap();
    let (mut plugin, addr) = start_plugin(&temp);

    let client = http_get(addr, "/".to_string());
    drive(&mut plugin, &client);
    let response = client.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 200"));
    let body = body_of(&response);
    assert!(body.contains("<img src=\"/img/shot_"));
}

#[test]
fn test_cubeimg_returns_six_faces() {
    let temp = TempDir::new().unwrap();
    let (mut plugin, addr) = start_plugin(&temp);

    let client = http_get(addr, "/cubeimg?posX=1&posY=2&posZ=3".to_string());
    drive(&mut plugin, &client);
    let response = client.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 200"));
    let body = body_of(&response);
    for face in ["front", "left", "back", "right", "up", "down"] {
        assert!(body.contains(face), "missing face {face}: {body}");
    }
    assert_eq!(body.matches("/img/shot_").count(), 6);
}

#[test]
fn test_panorama_respects_segment_count() {
    let temp = TempDir::new().unwrap();
    let (mut plugin, addr) = start_plugin(&temp);

    let client = http_get(addr, "/panorama?posX=0&posY=0&posZ=0&pN=4".to_string());
    drive(&mut plugin, &client);
    let response = client.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 200"));
    assert_eq!(body_of(&response).matches("/img/shot_").count(), 4);
}

#[test]
fn test_preview_returns_url() {
    let temp = TempDir::new().unwrap();
    let (mut plugin, addr) = start_plugin(&temp);

    let client = http_get(addr, format!("/preview?{RENDER_QUERY}&res=32"));
    drive(&mut plugin, &client);
    let response = client.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(body_of(&response).trim().starts_with("/img/shot_"));
}

#[test]
fn test_client_serves_embedded_viewer() {
    let temp = TempDir::new().unwrap();
    let (mut plugin, addr) = start_plugin(&temp);

    let client = http_get(addr, "/client".to_string());
    drive(&mut plugin, &client);
    let response = client.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(body_of(&response).contains("framecam viewer"));
}

#[test]
fn test_status_reports_counters() {
    let temp = TempDir::new().unwrap();
    let (mut plugin, addr) = start_plugin(&temp);

    let client = http_get(addr, "/status".to_string());
    drive(&mut plugin, &client);
    let response = client.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 200"));
    let body = body_of(&response);
    assert!(body.contains("\"success\":true"));
    assert!(body.contains("\"camera_ready\":true"));
    assert!(body.contains("\"requests\":1"));
}

#[test]
fn test_published_image_is_fetchable() {
    let temp = TempDir::new().unwrap();
    let (mut plugin, addr) = start_plugin(&temp);

    let client = http_get(addr, format!("/renderimg?{RENDER_QUERY}"));
    drive(&mut plugin, &client);
    let url = body_of(&client.join().unwrap()).trim().to_string();

    let client = http_get(addr, url);
    drive(&mut plugin, &client);
    let response = client.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("image/x-portable-pixmap"));
}

#[test]
fn test_image_path_traversal_is_rejected() {
    let temp = TempDir::new().unwrap();
    let (mut plugin, addr) = start_plugin(&temp);

    let client = http_get(addr, "/img/..%2Fsecret".to_string());
    drive(&mut plugin, &client);
    let response = client.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 404"));
}

// =============================================================================
// FRAME LOOP
// =============================================================================

#[test]
fn test_requests_wait_for_camera_warmup() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);
    let gateway = HttpGateway::bind(&config).unwrap();
    let addr = gateway.local_addr().unwrap();
    let renderer = HeadlessRenderer::new(&config.capture_dir).with_warmup(5);
    let publisher =
        DirPublisher::new(&config.img_dir, config.img_url_base.clone(), None);
    let mut plugin =
        HttpCameraPlugin::new(Box::new(renderer), Box::new(publisher), gateway);

    let client = http_get(addr, format!("/renderimg?{RENDER_QUERY}"));
    drive(&mut plugin, &client);
    let response = client.join().unwrap();

    // Served only after acquisition succeeded, never with a not-ready error
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(plugin.service().is_ready());
    assert!(plugin.stats().frames > 5);
}

#[test]
fn test_gateway_reports_not_ready_without_camera() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);
    let gateway = HttpGateway::bind(&config).unwrap();
    let addr = gateway.local_addr().unwrap();
    let publisher =
        DirPublisher::new(&config.img_dir, config.img_url_base.clone(), None);
    let mut service = CaptureService::new(Box::new(publisher));
    let mut stats = PluginStats::new();

    let client = http_get(addr, format!("/renderimg?{RENDER_QUERY}"));
    for _ in 0..2000 {
        gateway.poll(&mut service, &mut stats).unwrap();
        if client.is_finished() {
            break;
        }
        thread::sleep(Duration::from_millis(2));
    }
    let response = client.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 503"));
    assert!(body_of(&response).contains("CAMERA_NOT_READY"));
}
