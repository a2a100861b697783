//! # Fabscope Common Library
//!
//! Shared code for the Fabscope dashboard services including:
//! - Recipe metadata and run log dataset models
//! - JSON fixture loading with degrade-to-empty semantics
//! - Configuration and data folder resolution
//! - Common error types

pub mod config;
pub mod dataset;
pub mod error;
pub mod fixture;
pub mod runlog;

pub use error::{Error, Result};
