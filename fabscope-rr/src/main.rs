//! fabscope-rr (Recipe Review) - Process recipe comparison dashboard
//!
//! Serves the web UI and JSON API for inspecting pre-computed recipe run
//! data: previous runs table, RCA comparison, and optimizer comparison.
//!
//! [REQ-RR-NF-010]: Zero-config startup
//! [REQ-RR-NF-020]: Read-only fixture data, degrade to empty on load failure
//! [REQ-RR-NF-040]: Health endpoint
//! [REQ-RR-NF-050]: Default port 5740

use anyhow::Result;
use clap::Parser;
use fabscope_common::config::resolve_data_folder;
use fabscope_common::dataset::MetadataDataset;
use fabscope_common::runlog::RunLog;
use fabscope_rr::{build_router, AppState};
use std::path::PathBuf;
use tracing::{info, warn};

/// Recipe Review dashboard service
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Folder containing the JSON fixtures (overrides FABSCOPE_DATA and config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Listen port [REQ-RR-NF-050]
    #[arg(long, env = "FABSCOPE_PORT", default_value_t = 5740)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Fabscope Recipe Review (fabscope-rr) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    // [REQ-RR-NF-010]: Zero-config startup with 4-tier resolution
    let data_dir_arg = args.data_dir.as_ref().map(|p| p.to_string_lossy().to_string());
    let data_folder = resolve_data_folder(data_dir_arg.as_deref());
    info!("Data folder: {}", data_folder.display());

    // [REQ-RR-NF-020]: One load per session; failure degrades to empty
    let metadata_path = data_folder.join("recipes-metadata.json");
    let dataset = MetadataDataset::load_or_empty(&metadata_path).await;
    if dataset.recipes.is_empty() {
        warn!("Recipe metadata dataset is empty; comparison views will have nothing to select");
    } else {
        info!("✓ Loaded {} recipes from {}", dataset.recipes.len(), metadata_path.display());
    }

    let runs_path = data_folder.join("previous-runs.json");
    let runs = RunLog::load_or_empty(&runs_path).await;
    info!("✓ Loaded {} run records", runs.data.len());

    // Create application state and router
    let state = AppState::new(dataset, runs);
    let app = build_router(state);

    // [REQ-RR-NF-050]: Start server on the configured port
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("fabscope-rr listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
