//! Integration tests for the component health endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get_auth};

use acmon_core::SensorValues;

#[tokio::test]
async fn nominal_readings_report_all_normal() {
    let test_app = build_test_app();
    let token = test_app.sessions.issue();
    test_app.store.record(SensorValues {
        noise_db: 42.0,
        expansion_valve_outlet_temp: 18.5,
        ..SensorValues::default()
    });

    let response = get_auth(test_app.app, "/api/v1/classification", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["fault_count"], 0);
    assert_eq!(body["data"]["all_normal"], true);

    let reports = body["data"]["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["component"], "bearings");
    assert_eq!(reports[0]["status"], "normal");
    assert_eq!(reports[1]["component"], "radiator");
    assert_eq!(reports[1]["status"], "normal");
}

#[tokio::test]
async fn excessive_noise_reports_bearing_fault() {
    let test_app = build_test_app();
    let token = test_app.sessions.issue();
    test_app.store.record(SensorValues {
        noise_db: 120.0,
        expansion_valve_outlet_temp: 18.5,
        ..SensorValues::default()
    });

    let body = body_json(get_auth(test_app.app, "/api/v1/classification", &token).await).await;
    assert_eq!(body["data"]["fault_count"], 1);
    assert_eq!(body["data"]["all_normal"], false);

    let reports = body["data"]["reports"].as_array().unwrap();
    assert_eq!(reports[0]["component"], "bearings");
    assert_eq!(reports[0]["status"], "fault");
}

#[tokio::test]
async fn classification_works_before_any_message() {
    // All-zero snapshot is below every fault bound.
    let test_app = build_test_app();
    let token = test_app.sessions.issue();

    let response = get_auth(test_app.app, "/api/v1/classification", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["all_normal"], true);
}
