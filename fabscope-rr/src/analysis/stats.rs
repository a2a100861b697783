//! Scalar comparison statistics for a pair of series
//!
//! [REQ-RR-F-060]: Single source of truth for both the narrative and the
//! optimizer API response. Means of empty series and zero/negative
//! denominators are reported as absent, never as NaN or infinity.

use serde::Serialize;

/// Derived statistics for a two-recipe comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub label_a: String,
    pub label_b: String,
    /// Arithmetic mean of series A; absent when the series is empty
    pub mean_a: Option<f64>,
    /// Arithmetic mean of series B; absent when the series is empty
    pub mean_b: Option<f64>,
    /// Label of the series with the strictly greater mean; ties favor A.
    /// Absent when either mean is absent.
    pub winner: Option<String>,
    /// `|mean_a - mean_b| / min(mean_a, mean_b) * 100`; absent when either
    /// mean is absent or the denominator is not strictly positive.
    pub relative_improvement_pct: Option<f64>,
}

impl ComparisonResult {
    /// Whether this result describes a valid two-recipe comparison
    pub fn can_compare(&self) -> bool {
        !self.label_a.is_empty() && !self.label_b.is_empty() && self.label_a != self.label_b
    }

    /// Label of the recipe that did not win, when a winner exists
    pub fn runner_up(&self) -> Option<&str> {
        match self.winner.as_deref() {
            Some(w) if w == self.label_a => Some(&self.label_b),
            Some(_) => Some(&self.label_a),
            None => None,
        }
    }
}

/// Arithmetic mean; `None` for an empty series
pub fn mean(series: &[f64]) -> Option<f64> {
    if series.is_empty() {
        None
    } else {
        Some(series.iter().sum::<f64>() / series.len() as f64)
    }
}

/// Compute comparison statistics for two labeled series
pub fn compare(a: &[f64], b: &[f64], label_a: &str, label_b: &str) -> ComparisonResult {
    let mean_a = mean(a);
    let mean_b = mean(b);

    let winner = match (mean_a, mean_b) {
        // Tie-break favors label A, deterministically
        (Some(ma), Some(mb)) if mb > ma => Some(label_b.to_string()),
        (Some(_), Some(_)) => Some(label_a.to_string()),
        _ => None,
    };

    let relative_improvement_pct = match (mean_a, mean_b) {
        (Some(ma), Some(mb)) => {
            let denominator = ma.min(mb);
            if denominator > 0.0 {
                Some((ma - mb).abs() / denominator * 100.0)
            } else {
                // Not applicable for zero or negative means
                None
            }
        }
        _ => None,
    };

    ComparisonResult {
        label_a: label_a.to_string(),
        label_b: label_b.to_string(),
        mean_a,
        mean_b,
        winner,
        relative_improvement_pct,
    }
}
