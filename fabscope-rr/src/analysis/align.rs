//! Series alignment onto a shared time-point domain
//!
//! [REQ-RR-F-050]: Two recipes' series may have unequal length; the longer
//! one is never truncated. Positions past a series' own end are absent, not
//! zero, and serialize as JSON `null` so the chart layer renders gaps.

use serde::Serialize;

/// Two series aligned onto a shared `T1..Tn` index domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedSeries {
    /// Time-point labels, `T1` through `Tn` where n = max(len a, len b)
    pub labels: Vec<String>,
    /// First series, padded with absent points to length n
    pub series_a: Vec<Option<f64>>,
    /// Second series, padded with absent points to length n
    pub series_b: Vec<Option<f64>>,
}

/// Align two series of possibly unequal length
pub fn align(a: &[f64], b: &[f64]) -> AlignedSeries {
    let len = a.len().max(b.len());
    let pad = |series: &[f64]| (0..len).map(|i| series.get(i).copied()).collect();

    AlignedSeries {
        labels: (1..=len).map(|i| format!("T{}", i)).collect(),
        series_a: pad(a),
        series_b: pad(b),
    }
}
