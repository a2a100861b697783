//! Comparison API for the RCA and Optimizer views
//!
//! [REQ-RR-F-030]: RCA comparison chart per selected metric
//! [REQ-RR-F-040]: Precomputed analysis text with fallback
//! [REQ-RR-F-050]: Optimizer aligned trends
//! [REQ-RR-F-060]: Optimizer statistics and narrative
//!
//! Handlers are thin: they drive the view controllers in
//! `crate::analysis::controller` and serialize the derived artifacts.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::analysis::align::AlignedSeries;
use crate::analysis::contribution::LabeledDistribution;
use crate::analysis::controller::{OptimizerController, RcaController};
use crate::analysis::stats::ComparisonResult;
use crate::AppState;

/// Query parameters shared by both comparison endpoints
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    #[serde(default)]
    pub recipe1: String,
    #[serde(default)]
    pub recipe2: String,
    /// RCA only: metric to chart; defaults to the first available
    pub metric: Option<String>,
}

/// RCA comparison response
#[derive(Debug, Serialize)]
pub struct RcaCompareResponse {
    pub recipe1: String,
    pub recipe2: String,
    pub metric: Option<String>,
    pub available_metrics: Vec<String>,
    pub aligned: AlignedSeries,
    pub analysis: String,
}

/// GET /api/rca/compare?recipe1=A&recipe2=B&metric=temperature
///
/// Returns the aligned series for the selected metric plus the precomputed
/// analysis text for the pair. [REQ-RR-F-030, REQ-RR-F-040]
pub async fn rca_compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<RcaCompareResponse>, CompareError> {
    let mut controller = RcaController::new(state.dataset.clone());
    controller.select_recipe1(&query.recipe1);
    controller.select_recipe2(&query.recipe2);
    if let Some(metric) = &query.metric {
        controller.select_metric(metric);
    }

    if !controller.confirm() {
        return Err(CompareError::DegenerateSelection);
    }
    // confirm() succeeded, so artifacts are available
    let artifacts = controller
        .artifacts()
        .ok_or(CompareError::DegenerateSelection)?;

    Ok(Json(RcaCompareResponse {
        recipe1: query.recipe1,
        recipe2: query.recipe2,
        metric: artifacts.metric,
        available_metrics: controller.available_metrics(),
        aligned: artifacts.aligned,
        analysis: artifacts.analysis,
    }))
}

/// Optimizer comparison response
#[derive(Debug, Serialize)]
pub struct OptimizerCompareResponse {
    pub recipe1: String,
    pub recipe2: String,
    pub aligned: AlignedSeries,
    pub stats: ComparisonResult,
    pub narrative: String,
    pub contribution_a: Option<LabeledDistribution>,
    pub contribution_b: Option<LabeledDistribution>,
}

/// GET /api/optimizer/compare?recipe1=A&recipe2=B
///
/// Returns aligned optimized-value series, statistics, narrative, and both
/// contribution breakdowns. [REQ-RR-F-050, REQ-RR-F-060, REQ-RR-F-070]
pub async fn optimizer_compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<OptimizerCompareResponse>, CompareError> {
    let mut controller = OptimizerController::new(state.dataset.clone());
    controller.select_recipe1(&query.recipe1);
    controller.select_recipe2(&query.recipe2);

    let artifacts = controller
        .artifacts()
        .ok_or(CompareError::DegenerateSelection)?;

    Ok(Json(OptimizerCompareResponse {
        recipe1: query.recipe1,
        recipe2: query.recipe2,
        aligned: artifacts.aligned,
        stats: artifacts.stats,
        narrative: artifacts.narrative,
        contribution_a: artifacts.contribution_a,
        contribution_b: artifacts.contribution_b,
    }))
}

/// Comparison API errors
#[derive(Debug)]
pub enum CompareError {
    /// Equal or empty recipe selection; a defined UI state, not a crash
    DegenerateSelection,
}

impl IntoResponse for CompareError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CompareError::DegenerateSelection => (
                StatusCode::BAD_REQUEST,
                "Please select two different recipes".to_string(),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
