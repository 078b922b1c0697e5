use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use acmon_classify::ClassifyError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the shape `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A classification cycle failed. Per-cycle only; the next poll
    /// retries from scratch.
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    /// Missing or invalid session credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Classify(err) => {
                tracing::warn!(error = %err, "Classification cycle failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "CLASSIFICATION_ERROR",
                    err.to_string(),
                )
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
