//! Router-level tests for the static asset server.
//!
//! Exercises the file resolution, MIME mapping, CORS, and error body
//! behavior through `tower::ServiceExt::oneshot` without binding a port.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use pocketchat_devserver::build_router;
use tower::ServiceExt;

/// Write a small site into a temp dir and build a router over it.
fn test_site() -> (tempfile::TempDir, axum::Router) {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("index.html"), "<html>pocketchat</html>").unwrap();
    std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets/app.js"), "console.log('hi');").unwrap();
    let router = build_router(dir.path().to_path_buf());
    (dir, router)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_root_serves_index_html() {
    let (_dir, app) = test_site();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html"
    );
    assert_eq!(body_string(response).await, "<html>pocketchat</html>");
}

#[tokio::test]
async fn test_css_served_with_mime_and_cors() {
    let (_dir, app) = test_site();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/style.css")
                .header(header::ORIGIN, "http://localhost:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_nested_path_served() {
    let (_dir, app) = test_site();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/assets/app.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/javascript"
    );
}

#[tokio::test]
async fn test_missing_file_yields_readable_404() {
    let (_dir, app) = test_site();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/missing.html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("404"));
    assert!(body.contains("/missing.html"));
}

#[tokio::test]
async fn test_traversal_is_rejected() {
    let (_dir, app) = test_site();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/assets/../../outside.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
