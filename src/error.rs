use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Request failures surfaced to HTTP clients as plain-text errors, one line
/// each, newline-terminated.
///
/// The store itself never fails; every variant here is rejected by the
/// transport before or after calling it.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request method")]
    MethodNotAllowed,

    #[error("URL parameter is missing")]
    MissingUrl,

    #[error("Short key is missing")]
    MissingKey,

    #[error("Short URL not found")]
    NotFound,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MissingUrl | AppError::MissingKey => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), format!("{self}\n")).into_response()
    }
}
