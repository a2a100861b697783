//! HTTP API handlers for fabscope-rr

pub mod buildinfo;
pub mod compare;
pub mod health;
pub mod recipes;
pub mod runs;
pub mod ui;

pub use buildinfo::get_build_info;
pub use compare::{optimizer_compare, rca_compare};
pub use health::health_routes;
pub use recipes::list_recipes;
pub use runs::get_run_log;
pub use ui::{serve_app_js, serve_index};
