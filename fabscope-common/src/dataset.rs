//! Recipe metadata dataset model
//!
//! Mirrors the shape of `recipes-metadata.json`:
//!
//! ```json
//! {
//!   "recipes": ["RCP-1042", "RCP-1043"],
//!   "metadata": {
//!     "RCP-1042": {
//!       "optimized_value": { "timeseries": [81.2, 82.9] },
//!       "temperature": { "timeseries": [351.0, 352.5] },
//!       "optimization_contribution": { "temperature": 40, "power_factor": 60 }
//!     }
//!   },
//!   "analysis": { "RCP-1042_vs_RCP-1043": "..." }
//! }
//! ```
//!
//! The dataset is immutable once loaded; all comparison artifacts are pure
//! functions of it. A recipe may carry any set of named metrics; a missing
//! metric degrades to an empty series rather than an error.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fixture;
use crate::Result;

/// Ordered factor name -> percentage map under `optimization_contribution`
///
/// Key order is presentation order (serde_json `preserve_order`). Values are
/// assumed pre-normalized by the data producer; the sum is not validated.
pub type ContributionMap = serde_json::Map<String, Value>;

/// A single named time-indexed measurement for a recipe
///
/// Index position is the time coordinate (labeled T1, T2, ... downstream).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricSeries {
    #[serde(default)]
    pub timeseries: Vec<f64>,
}

/// Per-recipe metadata: named metrics plus an optional contribution breakdown
///
/// Metric entries are kept as raw JSON values so that an entry of unexpected
/// shape degrades to an empty series instead of failing the whole dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeMetadata {
    /// Proportional breakdown of the recipe's optimization score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_contribution: Option<ContributionMap>,

    /// Named metric entries, each expected to hold a `timeseries` array
    #[serde(flatten)]
    pub metrics: serde_json::Map<String, Value>,
}

impl RecipeMetadata {
    /// Names of metrics that carry a time series, in document order
    pub fn metric_names(&self) -> Vec<&str> {
        self.metrics
            .iter()
            .filter(|(_, v)| v.get("timeseries").map(Value::is_array).unwrap_or(false))
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Time series for a named metric; empty when absent or malformed
    pub fn timeseries(&self, metric: &str) -> Vec<f64> {
        self.metrics
            .get(metric)
            .and_then(|v| v.get("timeseries"))
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_f64).collect())
            .unwrap_or_default()
    }
}

/// Top-level recipe metadata dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataDataset {
    /// Recipe identifiers in presentation order
    #[serde(default)]
    pub recipes: Vec<String>,

    /// Per-recipe metadata keyed by recipe identifier
    #[serde(default)]
    pub metadata: HashMap<String, RecipeMetadata>,

    /// Precomputed narratives keyed by composite `"<A>_vs_<B>"` keys
    #[serde(default)]
    pub analysis: HashMap<String, String>,
}

impl MetadataDataset {
    /// Time series for a recipe's metric; empty when either is unknown
    pub fn timeseries(&self, recipe: &str, metric: &str) -> Vec<f64> {
        self.metadata
            .get(recipe)
            .map(|m| m.timeseries(metric))
            .unwrap_or_default()
    }

    /// Contribution breakdown for a recipe, when it carries one
    pub fn contribution(&self, recipe: &str) -> Option<&ContributionMap> {
        self.metadata
            .get(recipe)?
            .optimization_contribution
            .as_ref()
    }

    /// Metric names recorded for a recipe, in document order
    pub fn metric_names(&self, recipe: &str) -> Vec<&str> {
        self.metadata
            .get(recipe)
            .map(|m| m.metric_names())
            .unwrap_or_default()
    }

    /// Load the dataset from a JSON fixture file
    pub async fn load(path: &Path) -> Result<Self> {
        fixture::load_fixture(path).await
    }

    /// Load the dataset, degrading to empty on any failure [REQ-RR-NF-020]
    pub async fn load_or_empty(path: &Path) -> Self {
        fixture::load_fixture_or_default(path).await
    }
}
