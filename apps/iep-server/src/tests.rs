//! Integration tests for the IEP validation server API.

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn test_server() -> TestServer {
    TestServer::new(crate::build_router()).expect("router should build")
}

fn sample_input() -> Value {
    json!({
        "performance_narrative": "Todd reads 85 words per minute with 5 errors at the 5th percentile.",
        "grade_level": "4th grade",
        "areas_of_concern": "Academic (reading)",
        "priority_goal_areas": ["Reading fluency"],
        "accommodations": ["Extended time"]
    })
}

#[tokio::test]
async fn health_reports_service_identity() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "iep-server");
}

#[tokio::test]
async fn validate_accepts_a_clean_draft() {
    let server = test_server();

    let response = server
        .post("/api/validate")
        .json(&json!({
            "input": sample_input(),
            "document": "<h3>🔍 Present Levels</h3><p>Todd reads 85 words per minute with 5 errors.</p>"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["result"]["compliant"], true);
    assert_eq!(body["result"]["summary"]["total"], 0);
    assert!(body.get("report").is_none());
}

#[tokio::test]
async fn validate_flags_invented_data_with_report() {
    let server = test_server();

    let response = server
        .post("/api/validate")
        .json(&json!({
            "input": sample_input(),
            "document": "<h3>🔍 Present Levels</h3><p>Todd works independently 50% of the time.</p>",
            "report_format": "text"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["result"]["compliant"], false);
    let rules: Vec<&str> = body["result"]["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["rule"].as_str().unwrap())
        .collect();
    assert!(rules.contains(&"DATA_INVENTION"));
    let report = body["report"].as_str().unwrap();
    assert!(report.contains("NOT COMPLIANT"));
}

#[tokio::test]
async fn validate_rejects_unknown_report_format() {
    let server = test_server();

    let response = server
        .post("/api/validate")
        .json(&json!({
            "input": sample_input(),
            "document": "<p>anything</p>",
            "report_format": "pdf"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INVALID_REQUEST");
}
