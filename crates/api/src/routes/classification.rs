//! Component health endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use acmon_classify::Evaluation;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /classification -- run one evaluation cycle over the current
/// snapshot. Classifier failures surface as a per-cycle error; they
/// never affect ingestion.
async fn evaluate(State(state): State<AppState>) -> AppResult<Json<DataResponse<Evaluation>>> {
    let snapshot = state.store.current();
    let evaluation = state.orchestrator.evaluate(&snapshot)?;
    Ok(Json(DataResponse { data: evaluation }))
}

/// Mount classification routes under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/classification", get(evaluate))
}
