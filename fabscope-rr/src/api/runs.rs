//! Run log API
//!
//! [REQ-RR-F-010]: Serves the previous-runs document verbatim for the
//! client-side sortable/searchable table.

use axum::{extract::State, Json};
use fabscope_common::runlog::RunLog;

use crate::AppState;

/// GET /api/runs
///
/// Returns the run log document: column spec plus row objects. An empty
/// document (load failure at startup) renders as an empty table.
pub async fn get_run_log(State(state): State<AppState>) -> Json<RunLog> {
    Json(state.runs.as_ref().clone())
}
