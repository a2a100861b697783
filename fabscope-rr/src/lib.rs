//! fabscope-rr library - Recipe Review module
//!
//! [REQ-RR-NF-060]: On-demand microservice presenting pre-computed recipe
//! run data: run log table, RCA comparison, and optimizer comparison.

use std::sync::Arc;

use axum::Router;
use fabscope_common::dataset::MetadataDataset;
use fabscope_common::runlog::RunLog;
use tower_http::trace::TraceLayer;

pub mod analysis;
pub mod api;

/// Application state shared across HTTP handlers
///
/// Both datasets are loaded once at startup and immutable for the session;
/// handlers share them by reference without synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Recipe metadata dataset [REQ-RR-NF-020]
    pub dataset: Arc<MetadataDataset>,
    /// Run log document for the tabular view
    pub runs: Arc<RunLog>,
}

impl AppState {
    /// Create new application state
    pub fn new(dataset: MetadataDataset, runs: RunLog) -> Self {
        Self {
            dataset: Arc::new(dataset),
            runs: Arc::new(runs),
        }
    }
}

/// Build application router
///
/// [REQ-RR-NF-040]: Health endpoint
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/recipes", get(api::list_recipes))
        .route("/api/runs", get(api::get_run_log))
        .route("/api/rca/compare", get(api::rca_compare))
        .route("/api/optimizer/compare", get(api::optimizer_compare))
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
