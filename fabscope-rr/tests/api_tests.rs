//! Integration tests for fabscope-rr API endpoints
//!
//! Tests cover:
//! - [REQ-RR-F-010] Run log document passthrough
//! - [REQ-RR-F-020] Recipe listing and degenerate selection handling
//! - [REQ-RR-F-030, REQ-RR-F-040] RCA comparison and analysis lookup
//! - [REQ-RR-F-050, REQ-RR-F-060, REQ-RR-F-070] Optimizer comparison
//! - [REQ-RR-NF-040] Health endpoint

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use fabscope_common::dataset::MetadataDataset;
use fabscope_common::runlog::RunLog;
use fabscope_rr::{build_router, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: In-memory metadata dataset fixture
fn sample_dataset() -> MetadataDataset {
    serde_json::from_value(json!({
        "recipes": ["R1", "R2", "R3"],
        "metadata": {
            "R1": {
                "optimized_value": { "timeseries": [1.0, 2.0, 3.0] },
                "temperature": { "timeseries": [350.0, 351.0] },
                "optimization_contribution": { "power_factor": 40, "temperature": 60 }
            },
            "R2": {
                "optimized_value": { "timeseries": [2.0, 2.0] }
            },
            "R3": {}
        },
        "analysis": {
            "R1_vs_R2": "R1 trends upward while R2 holds steady."
        }
    }))
    .expect("fixture should parse")
}

/// Test helper: In-memory run log fixture
fn sample_runs() -> RunLog {
    serde_json::from_value(json!({
        "columns": [
            { "key": "id", "title": "Run ID", "sortable": true },
            { "key": "recipe", "title": "Recipe", "sortable": true },
            { "key": "yield", "title": "Yield (%)", "sortable": true },
            { "key": "ET", "title": "Error Trigger" }
        ],
        "data": [
            { "id": "RUN-001", "recipe": "R1", "yield": 97.25, "ET": false },
            { "id": "RUN-002", "recipe": "R2", "yield": 91.0, "ET": true }
        ]
    }))
    .expect("fixture should parse")
}

/// Test helper: Create app with in-memory fixtures
fn setup_app() -> axum::Router {
    let state = AppState::new(sample_dataset(), sample_runs());
    build_router(state)
}

/// Test helper: Create GET request
fn test_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint Tests [REQ-RR-NF-040]
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app();
    let response = app.oneshot(test_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "fabscope-rr");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let app = setup_app();
    let response = app.oneshot(test_request("/api/buildinfo")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["version"].is_string());
    assert!(body["git_hash"].is_string());
    assert!(body["build_timestamp"].is_string());
}

// =============================================================================
// Recipe Listing Tests [REQ-RR-F-020]
// =============================================================================

#[tokio::test]
async fn test_list_recipes_in_dataset_order() {
    let app = setup_app();
    let response = app.oneshot(test_request("/api/recipes")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[0]["id"], "R1");
    assert_eq!(recipes[1]["id"], "R2");
    assert_eq!(recipes[2]["id"], "R3");

    // Per-recipe metric names in document order
    assert_eq!(
        recipes[0]["metrics"],
        json!(["optimized_value", "temperature"])
    );
    assert_eq!(recipes[2]["metrics"], json!([]));
}

// =============================================================================
// Run Log Tests [REQ-RR-F-010]
// =============================================================================

#[tokio::test]
async fn test_run_log_document_passthrough() {
    let app = setup_app();
    let response = app.oneshot(test_request("/api/runs")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["columns"].as_array().unwrap().len(), 4);
    assert_eq!(body["columns"][0]["key"], "id");
    assert_eq!(body["columns"][3]["sortable"], false);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["yield"], 97.25);
    assert_eq!(body["data"][1]["ET"], true);
}

// =============================================================================
// RCA Comparison Tests [REQ-RR-F-030, REQ-RR-F-040]
// =============================================================================

#[tokio::test]
async fn test_rca_compare_auto_selects_first_metric() {
    let app = setup_app();
    let response = app
        .oneshot(test_request("/api/rca/compare?recipe1=R1&recipe2=R2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["metric"], "optimized_value");
    assert_eq!(
        body["available_metrics"],
        json!(["optimized_value", "temperature"])
    );
    assert_eq!(body["aligned"]["labels"], json!(["T1", "T2", "T3"]));
    assert_eq!(body["analysis"], "R1 trends upward while R2 holds steady.");
}

#[tokio::test]
async fn test_rca_compare_explicit_metric_pads_missing_series() {
    let app = setup_app();
    let response = app
        .oneshot(test_request(
            "/api/rca/compare?recipe1=R1&recipe2=R2&metric=temperature",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["metric"], "temperature");
    // R2 has no temperature series; it degrades to empty, padded with null
    assert_eq!(body["aligned"]["labels"], json!(["T1", "T2"]));
    assert_eq!(body["aligned"]["series_b"], json!([null, null]));
}

#[tokio::test]
async fn test_rca_analysis_lookup_is_order_independent() {
    let app = setup_app();

    let forward = app
        .clone()
        .oneshot(test_request("/api/rca/compare?recipe1=R1&recipe2=R2"))
        .await
        .unwrap();
    let reverse = app
        .oneshot(test_request("/api/rca/compare?recipe1=R2&recipe2=R1"))
        .await
        .unwrap();

    let forward_body = extract_json(forward.into_body()).await;
    let reverse_body = extract_json(reverse.into_body()).await;
    assert_eq!(forward_body["analysis"], reverse_body["analysis"]);
}

#[tokio::test]
async fn test_rca_analysis_fallback_for_unknown_pair() {
    let app = setup_app();
    let response = app
        .oneshot(test_request("/api/rca/compare?recipe1=R2&recipe2=R3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(
        body["analysis"],
        "No analysis available for this recipe combination."
    );
}

#[tokio::test]
async fn test_rca_compare_same_recipe_rejected() {
    let app = setup_app();
    let response = app
        .oneshot(test_request("/api/rca/compare?recipe1=R1&recipe2=R1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("select two different recipes"));
}

#[tokio::test]
async fn test_rca_compare_missing_selection_rejected() {
    let app = setup_app();
    let response = app
        .oneshot(test_request("/api/rca/compare?recipe1=R1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Optimizer Comparison Tests [REQ-RR-F-050, REQ-RR-F-060, REQ-RR-F-070]
// =============================================================================

#[tokio::test]
async fn test_optimizer_compare_full_artifacts() {
    let app = setup_app();
    let response = app
        .oneshot(test_request("/api/optimizer/compare?recipe1=R1&recipe2=R2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;

    // R1 has 3 points, R2 has 2; aligned to 3 with one null pad
    assert_eq!(body["aligned"]["labels"], json!(["T1", "T2", "T3"]));
    assert_eq!(body["aligned"]["series_b"][2], Value::Null);

    // Mean tie resolved in favor of recipe1
    assert_eq!(body["stats"]["mean_a"], 2.0);
    assert_eq!(body["stats"]["mean_b"], 2.0);
    assert_eq!(body["stats"]["winner"], "R1");
    assert_eq!(body["stats"]["relative_improvement_pct"], 0.0);

    let narrative = body["narrative"].as_str().unwrap();
    assert!(narrative.contains("R1 demonstrates superior performance"));

    // Contribution: present for R1, absent for R2
    let slices = body["contribution_a"]["slices"].as_array().unwrap();
    assert_eq!(slices[0]["label"], "Power factor");
    assert_eq!(slices[0]["value"], 40.0);
    assert_eq!(slices[1]["label"], "Temperature");
    assert_eq!(body["contribution_b"], Value::Null);
}

#[tokio::test]
async fn test_optimizer_compare_same_recipe_rejected() {
    let app = setup_app();
    let response = app
        .oneshot(test_request("/api/optimizer/compare?recipe1=R2&recipe2=R2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_optimizer_compare_empty_selection_rejected() {
    let app = setup_app();
    let response = app
        .oneshot(test_request("/api/optimizer/compare"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_optimizer_unknown_recipes_degrade_to_no_data() {
    let app = setup_app();
    let response = app
        .oneshot(test_request("/api/optimizer/compare?recipe1=R98&recipe2=R99"))
        .await
        .unwrap();

    // Distinct selections are total, even for recipes absent from the dataset
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["aligned"]["labels"], json!([]));
    assert_eq!(body["stats"]["mean_a"], Value::Null);
    assert_eq!(body["stats"]["winner"], Value::Null);
    assert!(body["narrative"]
        .as_str()
        .unwrap()
        .contains("Insufficient time-series data"));
}

// =============================================================================
// Empty Dataset Degradation [REQ-RR-NF-020]
// =============================================================================

#[tokio::test]
async fn test_empty_datasets_render_empty_documents() {
    let state = AppState::new(MetadataDataset::default(), RunLog::default());
    let app = build_router(state);

    let response = app
        .clone()
        .oneshot(test_request("/api/recipes"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["recipes"], json!([]));

    let response = app.oneshot(test_request("/api/runs")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["columns"], json!([]));
    assert_eq!(body["data"], json!([]));
}

// =============================================================================
// UI Serving Tests
// =============================================================================

#[tokio::test]
async fn test_index_page_served() {
    let app = setup_app();
    let response = app.oneshot(test_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_app_js_served_with_content_type() {
    let app = setup_app();
    let response = app.oneshot(test_request("/static/app.js")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/javascript"
    );
}
