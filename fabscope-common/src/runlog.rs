//! Run log dataset model
//!
//! Mirrors the shape of `previous-runs.json`: a column specification plus
//! row objects, consumed verbatim by the dashboard's tabular view. Sorting
//! and searching happen client-side; the engine never derives from this
//! document. [REQ-RR-F-010]

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fixture;
use crate::Result;

/// Column specification for the run table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunLogColumn {
    /// Row field key
    pub key: String,
    /// Column header shown in the UI
    pub title: String,
    /// Whether the UI offers sorting on this column
    #[serde(default)]
    pub sortable: bool,
}

/// Run log document: column spec plus row objects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunLog {
    #[serde(default)]
    pub columns: Vec<RunLogColumn>,

    /// Row objects; field set follows `columns`, plus optional `id` and `ET`
    #[serde(default)]
    pub data: Vec<serde_json::Map<String, Value>>,
}

impl RunLog {
    /// Load the run log from a JSON fixture file
    pub async fn load(path: &Path) -> Result<Self> {
        fixture::load_fixture(path).await
    }

    /// Load the run log, degrading to empty on any failure [REQ-RR-NF-020]
    pub async fn load_or_empty(path: &Path) -> Self {
        fixture::load_fixture_or_default(path).await
    }
}
