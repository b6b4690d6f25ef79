//! Static asset server for local pocketchat development.
//!
//! Maps request paths straight onto files under a root directory, with a
//! small extension-to-MIME table and permissive CORS on every response.
//! Error text is rendered into the response body, which is acceptable for
//! a local dev tool and nothing else.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

/// Content type for a file path, by extension.
///
/// Unknown extensions fall back to plain text.
pub fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "text/plain",
    }
}

/// Resolve a request path to a file under `root`.
///
/// `/` rewrites to `index.html`. Paths that would escape the root
/// (parent-dir or absolute components) resolve to `None`.
fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    let relative = if trimmed.is_empty() {
        "index.html"
    } else {
        trimmed
    };

    let candidate = Path::new(relative);
    for component in candidate.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => return None,
        }
    }
    Some(root.join(candidate))
}

/// Build the dev server router, serving files under `root`.
pub fn build_router(root: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .fallback(get(serve_file))
        .layer(cors)
        .with_state(Arc::new(root))
}

async fn serve_file(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let request_path = uri.path();

    let Some(file_path) = resolve(&root, request_path) else {
        return not_found(request_path);
    };

    match tokio::fs::read(&file_path).await {
        Ok(bytes) => {
            let mime = mime_type(&file_path);
            tracing::debug!("200 {} ({})", request_path, mime);
            ([(header::CONTENT_TYPE, mime)], bytes).into_response()
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => not_found(request_path),
        Err(err) => {
            tracing::error!("failed to read {}: {}", file_path.display(), err);
            internal_error(&err.to_string())
        }
    }
}

fn not_found(request_path: &str) -> Response {
    let body = format!(
        "<html>\n  <head><title>404 - Not Found</title></head>\n  <body>\n    <h1>404 - Not Found</h1>\n    <p>Requested file: {request_path}</p>\n    <p><a href=\"/\">Back to the main page</a></p>\n  </body>\n</html>\n"
    );
    (StatusCode::NOT_FOUND, Html(body)).into_response()
}

fn internal_error(message: &str) -> Response {
    let body = format!(
        "<html>\n  <head><title>500 - Server Error</title></head>\n  <body>\n    <h1>500 - Internal Server Error</h1>\n    <p>{message}</p>\n  </body>\n</html>\n"
    );
    (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
}
