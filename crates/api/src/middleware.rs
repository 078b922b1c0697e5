//! Session-check middleware for dashboard routes.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;
use crate::state::AppState;

/// Require a valid `Authorization: Bearer <token>` session on the
/// request. Applied to every route under `/api/v1` except login.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;

    if !state.sessions.is_valid(token) {
        return Err(AppError::Unauthorized("Invalid or expired session".to_string()));
    }

    Ok(next.run(request).await)
}
