//! Telemetry read and administrative endpoints consumed by the
//! polling dashboard.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;

use acmon_core::{Reading, Snapshot};

use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the history endpoint.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Return only the most recent N readings (default: all).
    pub limit: Option<usize>,
}

/// GET /telemetry/current -- the current snapshot.
async fn current(State(state): State<AppState>) -> Json<DataResponse<Snapshot>> {
    Json(DataResponse {
        data: state.store.current(),
    })
}

/// GET /telemetry/history?limit=N -- readings in acceptance order,
/// optionally trimmed to the most recent N.
async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<DataResponse<Vec<Reading>>> {
    let mut readings = state.store.history();
    if let Some(limit) = query.limit {
        let start = readings.len().saturating_sub(limit);
        readings.drain(..start);
    }
    Json(DataResponse { data: readings })
}

/// DELETE /telemetry/history -- empty the history buffer. The current
/// snapshot and lifetime counters are untouched.
async fn clear_history(State(state): State<AppState>) -> StatusCode {
    state.store.clear_history();
    tracing::info!("History cleared by dashboard request");
    StatusCode::NO_CONTENT
}

/// GET /telemetry/export -- CSV download of the full history.
async fn export(State(state): State<AppState>) -> impl IntoResponse {
    let readings = state.store.history();
    let filename = format!("data_{}.csv", Utc::now().format("%Y%m%d_%H%M%S"));

    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        history_csv(&readings),
    )
}

/// Serialize readings to CSV, header row first, oldest reading first.
/// A pure projection over `history()`.
pub fn history_csv(readings: &[Reading]) -> String {
    let mut csv = String::from(
        "timestamp,sequence_number,noise_db,expansion_valve_outlet_temp,\
         condenser_inlet_temp,ambient_temp,humidity,voltage,current_ma,power_mw\n",
    );
    for reading in readings {
        let v = &reading.values;
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            reading.history_timestamp(),
            reading.sequence_number,
            v.noise_db,
            v.expansion_valve_outlet_temp,
            v.condenser_inlet_temp,
            v.ambient_temp,
            v.humidity,
            v.voltage,
            v.current_ma,
            v.power_mw,
        ));
    }
    csv
}

/// Mount telemetry routes under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/telemetry/current", get(current))
        .route(
            "/telemetry/history",
            get(history).delete(clear_history),
        )
        .route("/telemetry/export", get(export))
}

#[cfg(test)]
mod tests {
    use super::*;
    use acmon_core::SensorValues;
    use chrono::TimeZone;

    #[test]
    fn csv_has_header_and_one_row_per_reading() {
        let readings = vec![Reading {
            sequence_number: 7,
            received_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
                + chrono::Duration::microseconds(123456),
            values: SensorValues {
                noise_db: 42.5,
                expansion_valve_outlet_temp: 18.5,
                ..SensorValues::default()
            },
        }];

        let csv = history_csv(&readings);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("timestamp,sequence_number,noise_db"));
        assert!(lines[1].starts_with("2024-06-01 12:00:00.123456,7,42.5,18.5,"));
    }

    #[test]
    fn empty_history_exports_header_only() {
        let csv = history_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }
}
