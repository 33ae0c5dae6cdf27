use std::sync::Arc;

use axum::{
    routing::{any, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{handlers, AppState};

/// Build the application router around shared state.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Only POST creates mappings; every other method gets a 405
        .route(
            "/shorten",
            post(handlers::shorten::shorten).fallback(handlers::shorten::method_not_allowed),
        )
        // Liveness probe, no store access
        .route("/health", get(|| async { axum::http::StatusCode::OK }))
        .route("/", any(handlers::redirect::missing_key))
        // Short-key redirect for every method. Fixed routes above take priority.
        .route("/:key", any(handlers::redirect::redirect))
        .fallback(handlers::redirect::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
