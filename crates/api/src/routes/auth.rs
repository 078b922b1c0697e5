//! Dashboard login / logout.

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::config::sha256_hex;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /auth/login -- digest comparison against configured
/// credentials; mints a bearer token on success.
async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let user_ok = body.username == state.config.dashboard_user;
    let password_ok = sha256_hex(&body.password) == state.config.dashboard_password_sha256;

    if !(user_ok && password_ok) {
        tracing::info!(username = %body.username, "Rejected login attempt");
        return Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    let token = state.sessions.issue();
    tracing::info!(username = %body.username, "Dashboard login");
    Ok(Json(DataResponse {
        data: LoginResponse { token },
    }))
}

/// POST /auth/logout -- revokes the presented session token.
async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    if let Some(token) = token {
        state.sessions.revoke(token);
    }
    StatusCode::NO_CONTENT
}

/// Open auth routes (no session required).
pub fn router() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// Auth routes that require a live session.
pub fn protected_router() -> Router<AppState> {
    Router::new().route("/auth/logout", post(logout))
}
