//! Selection state machines for the RCA and Optimizer views
//!
//! [REQ-RR-F-020]: Both views require two distinct selected recipes before
//! any comparison artifact is computed; equal or empty selections are a
//! defined "select two different recipes" state, never a degenerate
//! self-comparison.
//!
//! The RCA view guards against stale comparisons: changing either recipe
//! resets the shown flag, and derived views refresh only on an explicit
//! confirm. The optimizer recomputes eagerly on every selection change.

use std::sync::Arc;

use fabscope_common::dataset::MetadataDataset;

use crate::analysis::align::{align, AlignedSeries};
use crate::analysis::contribution::{labeled_distribution, LabeledDistribution};
use crate::analysis::lookup::analysis_text;
use crate::analysis::narrative::generate;
use crate::analysis::stats::{compare, ComparisonResult};

/// Metric compared by the optimizer view
pub const OPTIMIZED_VALUE_METRIC: &str = "optimized_value";

/// View-mode for the two mutually exclusive collapsible sections
///
/// Opening one section structurally closes the other; both may be closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionView {
    Closed,
    /// Chart section open (trends chart on the optimizer view)
    #[default]
    ShowingChart,
    /// Analysis section open
    ShowingAnalysis,
}

impl SectionView {
    /// Toggle the chart section: open it (closing analysis) or close it
    pub fn toggle_chart(self) -> SectionView {
        match self {
            SectionView::ShowingChart => SectionView::Closed,
            _ => SectionView::ShowingChart,
        }
    }

    /// Toggle the analysis section: open it (closing chart) or close it
    pub fn toggle_analysis(self) -> SectionView {
        match self {
            SectionView::ShowingAnalysis => SectionView::Closed,
            _ => SectionView::ShowingAnalysis,
        }
    }
}

/// Rendering state of the selection pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStatus {
    /// Neither slot selected; show the welcome prompt
    Empty,
    /// One slot selected, or both slots hold the same recipe;
    /// show "select two different recipes"
    NeedTwoDistinct,
    /// Two distinct recipes selected
    Ready,
}

/// The two recipe selection slots shared by both views
#[derive(Debug, Clone, Default)]
struct Selection {
    recipe1: Option<String>,
    recipe2: Option<String>,
}

impl Selection {
    /// Empty input clears the slot (the UI's "Select Recipe" placeholder)
    fn set(slot: &mut Option<String>, recipe: &str) {
        *slot = if recipe.is_empty() {
            None
        } else {
            Some(recipe.to_string())
        };
    }

    fn can_compare(&self) -> bool {
        matches!((&self.recipe1, &self.recipe2), (Some(a), Some(b)) if a != b)
    }

    fn status(&self) -> SelectionStatus {
        match (&self.recipe1, &self.recipe2) {
            (None, None) => SelectionStatus::Empty,
            (Some(a), Some(b)) if a != b => SelectionStatus::Ready,
            _ => SelectionStatus::NeedTwoDistinct,
        }
    }

    fn pair(&self) -> Option<(&str, &str)> {
        if self.can_compare() {
            Some((self.recipe1.as_deref()?, self.recipe2.as_deref()?))
        } else {
            None
        }
    }
}

/// Derived artifacts for the RCA view
#[derive(Debug, Clone)]
pub struct RcaArtifacts {
    /// Metric being charted; absent when the recipes carry no metrics
    pub metric: Option<String>,
    pub aligned: AlignedSeries,
    /// Precomputed analysis text, or the documented fallback
    pub analysis: String,
}

/// RCA view controller [REQ-RR-F-030]
///
/// Selecting a new recipe in either slot hides the comparison until the
/// next explicit `confirm`, so a stale chart is never shown for a new pair.
pub struct RcaController {
    dataset: Arc<MetadataDataset>,
    selection: Selection,
    selected_metric: Option<String>,
    comments: String,
    comparison_shown: bool,
    section: SectionView,
}

impl RcaController {
    pub fn new(dataset: Arc<MetadataDataset>) -> Self {
        Self {
            dataset,
            selection: Selection::default(),
            selected_metric: None,
            comments: String::new(),
            comparison_shown: false,
            section: SectionView::default(),
        }
    }

    /// Select (or clear, with "") the first recipe; hides the comparison
    pub fn select_recipe1(&mut self, recipe: &str) {
        Selection::set(&mut self.selection.recipe1, recipe);
        self.comparison_shown = false;
    }

    /// Select (or clear, with "") the second recipe; hides the comparison
    pub fn select_recipe2(&mut self, recipe: &str) {
        Selection::set(&mut self.selection.recipe2, recipe);
        self.comparison_shown = false;
    }

    /// Select the metric to chart; empty input clears it
    pub fn select_metric(&mut self, metric: &str) {
        self.selected_metric = if metric.is_empty() {
            None
        } else {
            Some(metric.to_string())
        };
    }

    /// Session-only free-text comments, discarded with the controller
    pub fn set_comments(&mut self, comments: &str) {
        self.comments = comments.to_string();
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// Metric names offered by the parameter dropdown
    ///
    /// Populated from the first recipe's metadata once both recipes are
    /// selected and known to the dataset.
    pub fn available_metrics(&self) -> Vec<String> {
        match (&self.selection.recipe1, &self.selection.recipe2) {
            (Some(r1), Some(r2))
                if self.dataset.metadata.contains_key(r1)
                    && self.dataset.metadata.contains_key(r2) =>
            {
                self.dataset
                    .metric_names(r1)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Confirm the current pair, auto-selecting the first available metric
    /// when none is selected. Returns false for a degenerate selection.
    pub fn confirm(&mut self) -> bool {
        if !self.selection.can_compare() {
            return false;
        }
        if self.selected_metric.is_none() {
            self.selected_metric = self.available_metrics().into_iter().next();
        }
        self.comparison_shown = true;
        true
    }

    pub fn status(&self) -> SelectionStatus {
        self.selection.status()
    }

    pub fn comparison_shown(&self) -> bool {
        self.comparison_shown
    }

    pub fn section(&self) -> SectionView {
        self.section
    }

    pub fn toggle_chart(&mut self) {
        self.section = self.section.toggle_chart();
    }

    pub fn toggle_analysis(&mut self) {
        self.section = self.section.toggle_analysis();
    }

    /// Derived comparison artifacts; `None` until a valid pair is confirmed
    pub fn artifacts(&self) -> Option<RcaArtifacts> {
        if !self.comparison_shown {
            return None;
        }
        let (r1, r2) = self.selection.pair()?;

        let (aligned, metric) = match &self.selected_metric {
            Some(metric) => (
                align(
                    &self.dataset.timeseries(r1, metric),
                    &self.dataset.timeseries(r2, metric),
                ),
                Some(metric.clone()),
            ),
            // No metric recorded for either recipe; chart stays empty
            None => (align(&[], &[]), None),
        };

        Some(RcaArtifacts {
            metric,
            aligned,
            analysis: analysis_text(&self.dataset, r1, r2),
        })
    }
}

/// Derived artifacts for the optimizer view
#[derive(Debug, Clone)]
pub struct OptimizerArtifacts {
    pub aligned: AlignedSeries,
    pub stats: ComparisonResult,
    pub narrative: String,
    /// Contribution breakdown for the first recipe, when present
    pub contribution_a: Option<LabeledDistribution>,
    /// Contribution breakdown for the second recipe, when present
    pub contribution_b: Option<LabeledDistribution>,
}

/// Optimizer view controller [REQ-RR-F-050, REQ-RR-F-060]
///
/// No confirm step: artifacts recompute eagerly whenever two distinct
/// recipes are selected.
pub struct OptimizerController {
    dataset: Arc<MetadataDataset>,
    selection: Selection,
    section: SectionView,
}

impl OptimizerController {
    pub fn new(dataset: Arc<MetadataDataset>) -> Self {
        Self {
            dataset,
            selection: Selection::default(),
            section: SectionView::default(),
        }
    }

    /// Select (or clear, with "") the first recipe
    pub fn select_recipe1(&mut self, recipe: &str) {
        Selection::set(&mut self.selection.recipe1, recipe);
    }

    /// Select (or clear, with "") the second recipe
    pub fn select_recipe2(&mut self, recipe: &str) {
        Selection::set(&mut self.selection.recipe2, recipe);
    }

    pub fn status(&self) -> SelectionStatus {
        self.selection.status()
    }

    pub fn section(&self) -> SectionView {
        self.section
    }

    pub fn toggle_chart(&mut self) {
        self.section = self.section.toggle_chart();
    }

    pub fn toggle_analysis(&mut self) {
        self.section = self.section.toggle_analysis();
    }

    /// Derived comparison artifacts; `None` unless two distinct recipes
    /// are selected
    pub fn artifacts(&self) -> Option<OptimizerArtifacts> {
        let (r1, r2) = self.selection.pair()?;

        let series_a = self.dataset.timeseries(r1, OPTIMIZED_VALUE_METRIC);
        let series_b = self.dataset.timeseries(r2, OPTIMIZED_VALUE_METRIC);

        let stats = compare(&series_a, &series_b, r1, r2);
        let narrative = generate(&stats);

        Some(OptimizerArtifacts {
            aligned: align(&series_a, &series_b),
            narrative,
            contribution_a: labeled_distribution(self.dataset.contribution(r1)),
            contribution_b: labeled_distribution(self.dataset.contribution(r2)),
            stats,
        })
    }
}
