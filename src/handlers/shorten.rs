use crate::{error::AppError, AppState};
use axum::{
    extract::{Form, FromRequest, Multipart, Query, Request, State},
    http::header,
};
use std::sync::Arc;

/// Urlencoded pairs in arrival order. Repeated keys are allowed.
type Pairs = Vec<(String, String)>;

/// POST /shorten
///
/// Takes `url` from the request body (urlencoded or multipart form), falling
/// back to the query string, stores it and answers with the public short URL
/// as plain text. When a source repeats `url`, its first value is used.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<String, AppError> {
    let from_query = Query::<Pairs>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(pairs)| first_url(pairs));

    let from_body = url_from_body(request, &state).await;

    let url = from_body
        .filter(|u| !u.is_empty())
        .or(from_query)
        .filter(|u| !u.is_empty())
        .ok_or(AppError::MissingUrl)?;

    let key = state.store.shorten(&url);
    tracing::info!("Shortened '{}' to key '{}'", url, key);

    Ok(format!("Shortened URL: {}\n", state.config.short_url(&key)))
}

/// Any method other than POST on /shorten.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

// ── Helpers ────────────────────────────────────────────────────────────────

/// Read `url` from a multipart or urlencoded body. Any other content type,
/// or a body that fails to parse, yields nothing.
async fn url_from_body(request: Request, state: &Arc<AppState>) -> Option<String> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    if is_multipart {
        let multipart = Multipart::from_request(request, state).await.ok()?;
        return multipart_url(multipart).await;
    }

    Form::<Pairs>::from_request(request, state)
        .await
        .ok()
        .and_then(|Form(pairs)| first_url(pairs))
}

/// First `url` field of a multipart body.
async fn multipart_url(mut multipart: Multipart) -> Option<String> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("url") {
            return field.text().await.ok();
        }
    }
    None
}

fn first_url(pairs: Pairs) -> Option<String> {
    pairs
        .into_iter()
        .find(|(name, _)| name == "url")
        .map(|(_, value)| value)
}
