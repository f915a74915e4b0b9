//! tiny_http server adapter
//!
//! Handles routing, query parsing, and response conversion for tiny_http.
//! The listen socket is polled non-blockingly from the frame loop; at most
//! one request is served per poll.

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::net::SocketAddr;
use std::path::PathBuf;

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{
    self, ApiError, ApiResponse, CubeParams, PanoramaParams, PreviewParams,
    RenderParams,
};
use crate::config::ServeConfig;
use crate::core::services::CaptureService;
use crate::plugin::PluginStats;

/// Errors from gateway construction
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The listen socket could not be bound
    #[error("failed to bind {addr}: {reason}")]
    Bind {
        /// Address the bind was attempted on
        addr: String,
        /// Underlying bind failure
        reason: String,
    },
}

/// Embedded HTTP gateway polled from the frame loop
pub struct HttpGateway {
    server: Server,
    client_page: Option<PathBuf>,
    img_dir: PathBuf,
    img_url_base: String,
    preview_res: u32,
    panorama_segments: u32,
}

impl fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpGateway")
            .field("addr", &self.local_addr())
            .field("img_dir", &self.img_dir)
            .field("img_url_base", &self.img_url_base)
            .finish_non_exhaustive()
    }
}

impl HttpGateway {
    /// Bind the listen socket described by the config
    pub fn bind(config: &ServeConfig) -> Result<Self, GatewayError> {
        let addr = format!("{}:{}", config.bind, config.port);
        let server = Server::http(&addr).map_err(|e| GatewayError::Bind {
            addr: addr.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            server,
            client_page: config.client_page.clone(),
            img_dir: config.img_dir.clone(),
            img_url_base: config.img_url_base.clone(),
            preview_res: config.preview_res,
            panorama_segments: config.panorama_segments,
        })
    }

    /// Actual listen address (useful when bound to port 0)
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Poll the socket once, non-blockingly. Serves at most one request;
    /// returns whether one was served.
    pub fn poll(
        &self,
        service: &mut CaptureService,
        stats: &mut PluginStats,
    ) -> std::io::Result<bool> {
        let Some(request) = self.server.try_recv()? else {
            return Ok(false);
        };
        stats.requests += 1;
        let response = self.route(&request, service, stats);
        if let Err(e) = request.respond(response) {
            warn!("failed to send response: {e}");
        }
        Ok(true)
    }

    /// Map a request onto the API handlers and build its response
    fn route(
        &self,
        request: &Request,
        service: &mut CaptureService,
        stats: &PluginStats,
    ) -> Response<Cursor<Vec<u8>>> {
        let url = request.url().to_string();
        let method = request.method().clone();
        debug!("{method} {url}");

        let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
        let params = parse_query(query);

        match (&method, path) {
            (&Method::Get, "/") => match api::snapshot(service) {
                Ok(image) => serve_html(&test_page(&image.url)),
                Err(e) => error_response(&e),
            },

            (&Method::Get, "/renderimg") => {
                match RenderParams::from_query(&params)
                    .and_then(|p| api::render_img(service, &p))
                {
                    Ok(image) => serve_text(&image.url),
                    Err(e) => error_response(&e),
                }
            },

            (&Method::Get, "/cubeimg") => {
                match CubeParams::from_query(&params)
                    .and_then(|p| api::cube_img(service, &p))
                {
                    Ok(data) => json_response(&ApiResponse::success(data), 200),
                    Err(e) => error_response(&e),
                }
            },

            (&Method::Get, "/preview") => {
                match PreviewParams::from_query(&params)
                    .and_then(|p| api::preview(service, &p, self.preview_res))
                {
                    Ok(image) => serve_text(&image.url),
                    Err(e) => error_response(&e),
                }
            },

            (&Method::Get, "/panorama") => {
                match PanoramaParams::from_query(&params)
                    .and_then(|p| api::panorama(service, &p, self.panorama_segments))
                {
                    Ok(data) => json_response(&ApiResponse::success(data), 200),
                    Err(e) => error_response(&e),
                }
            },

            (&Method::Get, "/client") => self.serve_client_page(),

            (&Method::Get, "/status") => {
                json_response(&ApiResponse::success(api::status(service, stats)), 200)
            },

            // Published images, when the URL base is a local path prefix
            _ if method == Method::Get && self.is_published_path(path) => {
                self.serve_published(path)
            },

            // 404 for everything else
            _ => error_response(&ApiError::not_found(format!(
                "no such route: {method} {path}"
            ))),
        }
    }

    fn is_published_path(&self, path: &str) -> bool {
        self.img_url_base.starts_with('/') && path.starts_with(&self.img_url_base)
    }

    /// Serve a published image straight from the publish directory
    fn serve_published(&self, path: &str) -> Response<Cursor<Vec<u8>>> {
        let name = path.strip_prefix(&self.img_url_base).unwrap_or("");
        if name.is_empty() || name.contains('/') || name.contains("..") {
            return error_response(&ApiError::not_found(format!(
                "no such image: {path}"
            )));
        }
        match fs::read(self.img_dir.join(name)) {
            Ok(bytes) => Response::from_data(bytes).with_header(
                Header::from_bytes("Content-Type", content_type_for(name))
                    .unwrap(),
            ),
            Err(e) => {
                debug!("published image read failed for {name}: {e}");
                error_response(&ApiError::not_found(format!("no such image: {name}")))
            },
        }
    }

    /// Serve the companion viewer page: the configured file when set,
    /// otherwise the embedded viewer
    fn serve_client_page(&self) -> Response<Cursor<Vec<u8>>> {
        match &self.client_page {
            Some(path) => match fs::read_to_string(path) {
                Ok(html) => serve_html(&html),
                Err(e) => {
                    warn!("client page {} unreadable: {e}", path.display());
                    error_response(&ApiError::not_found(format!(
                        "client page not found: {}",
                        path.display()
                    )))
                },
            },
            None => serve_html(VIEWER_HTML),
        }
    }
}

// =============================================================================
// QUERY PARSING
// =============================================================================

/// Decode a raw query string into key/value pairs
fn parse_query(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

// =============================================================================
// RESPONSE HELPERS
// =============================================================================

fn serve_html(content: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(content.as_bytes().to_vec()).with_header(
        Header::from_bytes("Content-Type", "text/html; charset=utf-8")
            .unwrap(),
    )
}

fn serve_text(content: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(content.as_bytes().to_vec()).with_header(
        Header::from_bytes("Content-Type", "text/plain; charset=utf-8")
            .unwrap(),
    )
}

/// Serialize data to a JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json =
        serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    Response::from_data(json.into_bytes())
        .with_header(
            Header::from_bytes("Content-Type", "application/json")
                .unwrap(),
        )
        .with_status_code(StatusCode(status))
}

/// Create an error JSON response with the error's status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_response(&response, error.status_code())
}

fn content_type_for(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("ppm") => "image/x-portable-pixmap",
        _ => "application/octet-stream",
    }
}

// =============================================================================
// EMBEDDED PAGES
// =============================================================================

/// The `/` test page: capture once and show the result
fn test_page(img_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>framecam</title></head>
<body>
<h2>This is a reply from framecam</h2>
<img src="{img_url}" alt="current view"/>
</body>
</html>
"#
    )
}

/// Embedded fallback for `/client` when no companion page is configured
const VIEWER_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>framecam viewer</title>
    <style>
        body { font-family: 'SF Mono', 'Menlo', monospace; background: #1a1a2e; color: #eee; padding: 2rem; }
        label { display: inline-block; width: 3rem; color: #888; }
        input { width: 5rem; background: #16213e; color: #eee; border: 1px solid #0f3460; padding: 0.25rem; }
        button { background: #e94560; color: #eee; border: none; padding: 0.5rem 1rem; border-radius: 4px; cursor: pointer; margin-right: 0.5rem; }
        #view { margin-top: 1rem; max-width: 100%; }
        #out { color: #888; margin-top: 0.5rem; }
    </style>
</head>
<body>
    <h2>framecam viewer</h2>
    <div>
        <label>pos</label>
        <input id="posX" value="0"> <input id="posY" value="6"> <input id="posZ" value="30">
    </div>
    <div>
        <label>ort</label>
        <input id="ortX" value="0"> <input id="ortY" value="0"> <input id="ortZ" value="0"> <input id="ortW" value="1">
    </div>
    <p>
        <button onclick="render()">Render</button>
        <button onclick="preview()">Preview</button>
    </p>
    <img id="view" alt="rendered view"/>
    <div id="out"></div>

    <script>
        function query() {
            const names = ['posX', 'posY', 'posZ', 'ortX', 'ortY', 'ortZ', 'ortW'];
            return names.map(n => n + '=' + encodeURIComponent(document.getElementById(n).value)).join('&');
        }

        async function fetchImage(path) {
            const resp = await fetch(path + '?' + query());
            const text = await resp.text();
            if (!resp.ok) {
                document.getElementById('out').textContent = text;
                return;
            }
            document.getElementById('view').src = text;
            document.getElementById('out').textContent = text;
        }

        function render() { fetchImage('/renderimg'); }
        function preview() { fetchImage('/preview'); }
    </script>
</body>
</html>
"#;
