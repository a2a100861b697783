//! Precomputed analysis text lookup
//!
//! [REQ-RR-F-040]: The composite key is symmetric: `"A_vs_B"` and
//! `"B_vs_A"` resolve to the same narrative if either exists.

use fabscope_common::dataset::MetadataDataset;

/// Returned when neither orientation of the composite key exists
pub const NO_ANALYSIS_FALLBACK: &str = "No analysis available for this recipe combination.";

/// Resolve the precomputed analysis for an unordered recipe pair
///
/// Total: never fails, independent of selection order.
pub fn analysis_text(dataset: &MetadataDataset, recipe_a: &str, recipe_b: &str) -> String {
    let key = format!("{}_vs_{}", recipe_a, recipe_b);
    let reverse_key = format!("{}_vs_{}", recipe_b, recipe_a);

    dataset
        .analysis
        .get(&key)
        .or_else(|| dataset.analysis.get(&reverse_key))
        .cloned()
        .unwrap_or_else(|| NO_ANALYSIS_FALLBACK.to_string())
}
