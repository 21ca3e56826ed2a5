// ABOUTME: Preview server for the termconf application
// ABOUTME: Serves the generated site over HTTP so pages can resolve their own origin

use log::{debug, error, info};
use std::fs;
use std::path::{Component, Path, PathBuf};

use tiny_http::{Header, Request, Response, Server, StatusCode};

use crate::config::INDEX_FILE;
use crate::errors::{Result, SiteError};

/// Map a request URL onto a file under `root`.
///
/// Returns `None` for paths that try to leave the root.
pub fn resolve_request_path(root: &Path, url: &str) -> Option<PathBuf> {
    let path = url.split(['?', '#']).next().unwrap_or("");
    let clean = path.trim_start_matches('/');
    if clean.is_empty() {
        return Some(root.join(INDEX_FILE));
    }

    let relative = Path::new(clean);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(relative))
}

pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn respond_status(request: Request, code: u16, body: &str) {
    let response = Response::from_string(body).with_status_code(StatusCode(code));
    if let Err(e) = request.respond(response) {
        error!("Failed to send response: {}", e);
    }
}

fn handle(root: &Path, request: Request) {
    let Some(file_path) = resolve_request_path(root, request.url()) else {
        respond_status(request, 403, "403 Forbidden");
        return;
    };

    debug!("Request for {:?} -> {:?}", request.url(), file_path);

    if !file_path.is_file() {
        respond_status(request, 404, "404 Not Found");
        return;
    }

    match fs::read(&file_path) {
        Ok(content) => {
            let mut response = Response::from_data(content);
            if let Ok(header) = Header::from_bytes("Content-Type", content_type(&file_path)) {
                response = response.with_header(header);
            }
            if let Err(e) = request.respond(response) {
                error!("Failed to send response: {}", e);
            }
        }
        Err(e) => {
            error!("Failed to read file {:?}: {}", file_path, e);
            respond_status(request, 500, &format!("Failed to read file: {}", e));
        }
    }
}

/// Serve `root` on `port` until the process is interrupted
pub fn serve_site(root: &Path, port: u16) -> Result<()> {
    let server = Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| SiteError::ServerError(format!("Failed to start HTTP server: {}", e)))?;

    info!("HTTP server listening on http://localhost:{}", port);
    println!("Serving {:?} at http://localhost:{}", root, port);

    for request in server.incoming_requests() {
        handle(root, request);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_maps_to_index() {
        let root = Path::new("/site");
        assert_eq!(
            resolve_request_path(root, "/"),
            Some(PathBuf::from("/site/index.html"))
        );
        assert_eq!(
            resolve_request_path(root, "/?theme=matrix"),
            Some(PathBuf::from("/site/index.html"))
        );
    }

    #[test]
    fn test_nested_paths_resolve_under_root() {
        let root = Path::new("/site");
        assert_eq!(
            resolve_request_path(root, "/template/css/style.css"),
            Some(PathBuf::from("/site/template/css/style.css"))
        );
    }

    #[test]
    fn test_parent_components_are_rejected() {
        let root = Path::new("/site");
        assert_eq!(resolve_request_path(root, "/../etc/passwd"), None);
        assert_eq!(resolve_request_path(root, "/css/../../secret"), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("print.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("sections.json")), "application/json");
        assert_eq!(content_type(Path::new("program.PDF")), "application/pdf");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }
}
