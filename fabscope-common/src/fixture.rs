//! JSON fixture loading
//!
//! [REQ-RR-NF-020]: Fixtures are read once per session; a load failure
//! degrades to an empty document instead of crashing the service.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::Result;

/// Load and parse a JSON fixture file
pub async fn load_fixture<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Load a JSON fixture, substituting the default value on any failure
///
/// Transport and parse failures are logged and recovered locally; callers
/// always receive a renderable document.
pub async fn load_fixture_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_fixture(path).await {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Could not load fixture {}: {}", path.display(), e);
            T::default()
        }
    }
}
