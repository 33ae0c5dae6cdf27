#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use hashlink::{config::AppConfig, routes::app_router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

pub const BASE_URL: &str = "http://sho.rt";

pub fn create_test_state() -> Arc<AppState> {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 8090,
        base_url: BASE_URL.to_string(),
    };
    Arc::new(AppState::new(config))
}

pub fn create_test_app(state: Arc<AppState>) -> Router {
    app_router(state)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

/// Multipart body with one text part per `(name, value)`.
pub fn post_multipart(uri: &str, parts: &[(&str, &str)]) -> Request<Body> {
    const BOUNDARY: &str = "hashlink-test-boundary";

    let mut body = String::new();
    for (name, value) in parts {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
