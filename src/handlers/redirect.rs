use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// ANY /:key
///
/// Resolve the key against the store and answer with a 302 to the original
/// URL, or 404 when the key is unknown.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    let original_url = state.store.resolve(&key).ok_or_else(|| {
        tracing::debug!("Unknown short key '{}'", key);
        AppError::NotFound
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]).into_response())
}

/// ANY /
///
/// The bare root carries no key to resolve.
pub async fn missing_key() -> AppError {
    AppError::MissingKey
}

/// Fallback for paths that can never name a short key, e.g. `/a/b`.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
