//! Contribution factor labeling for pie rendering
//!
//! [REQ-RR-F-070]: A recipe without an `optimization_contribution` entry is
//! a valid state, not an error. Values pass through unvalidated; the data
//! producer owns normalization to 100.

use fabscope_common::dataset::ContributionMap;
use serde::Serialize;
use serde_json::Value;

/// A single labeled contribution factor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    /// Display label: first letter capitalized, underscores become spaces
    pub label: String,
    /// Percentage share, passed through from the dataset
    pub value: f64,
}

/// Proportional breakdown ready for pie/donut rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledDistribution {
    pub slices: Vec<Slice>,
}

/// Turn a factor key into its display label
///
/// `"power_factor"` becomes `"Power factor"`.
pub fn display_label(key: &str) -> String {
    let mut chars = key.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    capitalized.replace('_', " ")
}

/// Label a recipe's contribution map, preserving input key order
///
/// Returns `None` when the recipe carries no contribution entry.
/// Non-numeric values are skipped.
pub fn labeled_distribution(contribution: Option<&ContributionMap>) -> Option<LabeledDistribution> {
    let contribution = contribution?;

    let slices = contribution
        .iter()
        .filter_map(|(key, value)| {
            value.as_f64().map(|v| Slice {
                label: display_label(key),
                value: v,
            })
        })
        .collect();

    Some(LabeledDistribution { slices })
}
