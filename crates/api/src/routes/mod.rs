//! API route modules.

pub mod auth;
pub mod classification;
pub mod health;
pub mod telemetry;

use axum::middleware::from_fn_with_state;
use axum::Router;

use crate::middleware::require_session;
use crate::state::AppState;

/// Assemble all `/api/v1` routes.
///
/// Login is open; everything else requires a live session.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(telemetry::router())
        .merge(classification::router())
        .merge(auth::protected_router())
        .layer(from_fn_with_state(state.clone(), require_session));

    Router::new().merge(auth::router()).merge(protected)
}
