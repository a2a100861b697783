//! Narrative report generation
//!
//! [REQ-RR-F-060]: Fixed-template plain-text summary of a two-recipe
//! comparison. Deterministic: the same `ComparisonResult` always renders
//! the byte-identical string. Not free-form generation.

use crate::analysis::stats::ComparisonResult;

fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{:.2}", value),
        None => "no data".to_string(),
    }
}

/// Render the analysis report for a comparison result
///
/// Returns the empty string when the result is not a valid comparison
/// (missing or equal labels).
pub fn generate(result: &ComparisonResult) -> String {
    if !result.can_compare() {
        return String::new();
    }

    let mut report = String::new();

    report.push_str("Optimization Analysis Results:\n\n");

    report.push_str("Recipe Performance Comparison:\n");
    report.push_str(&format!(
        "• {}: Average optimized value of {}\n",
        result.label_a,
        format_mean(result.mean_a)
    ));
    report.push_str(&format!(
        "• {}: Average optimized value of {}\n\n",
        result.label_b,
        format_mean(result.mean_b)
    ));

    report.push_str("Key Findings:\n");
    match (&result.winner, result.runner_up()) {
        (Some(winner), Some(runner_up)) => {
            let margin = match result.relative_improvement_pct {
                Some(pct) => format!("{:.1}% higher optimization values", pct),
                // Margin is not applicable for zero or negative means
                None => "consistently higher optimization values".to_string(),
            };
            report.push_str(&format!(
                "• {} demonstrates superior performance with {}\n",
                winner, margin
            ));
            report.push_str(&format!(
                "• {} shows potential for improvement through parameter adjustment\n",
                runner_up
            ));
            report.push_str(&format!(
                "• Time series analysis reveals {} maintains more consistent optimization levels\n\n",
                winner
            ));

            report.push_str("Recommendations:\n");
            report.push_str(&format!(
                "• Consider adopting parameters from {} for improved process efficiency\n",
                winner
            ));
            report.push_str("• Monitor optimization trends to identify optimal operating windows\n");
            report.push_str(
                "• Implement process controls to maintain peak optimization levels consistently",
            );
        }
        _ => {
            report.push_str(
                "• Insufficient time-series data to determine the better performing recipe\n\n",
            );
            report.push_str("Recommendations:\n");
            report.push_str(
                "• Record optimized value runs for both recipes before drawing comparisons\n",
            );
            report.push_str("• Monitor optimization trends to identify optimal operating windows");
        }
    }

    report
}
