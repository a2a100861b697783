//! Recipe time-series comparison and analysis engine
//!
//! The logic shared by the RCA and Optimizer views: aligning two named
//! time series onto a common index domain, deriving scalar statistics,
//! labeling contribution breakdowns, resolving precomputed analysis text,
//! and rendering the narrative summary. Everything here is a pure function
//! of the immutable dataset plus the controller's selection state; every
//! input has a defined total result.

pub mod align;
pub mod contribution;
pub mod controller;
pub mod lookup;
pub mod narrative;
pub mod stats;

pub use align::{align, AlignedSeries};
pub use contribution::{labeled_distribution, LabeledDistribution};
pub use controller::{OptimizerController, RcaController, SectionView, SelectionStatus};
pub use lookup::{analysis_text, NO_ANALYSIS_FALLBACK};
pub use narrative::generate;
pub use stats::{compare, ComparisonResult};
