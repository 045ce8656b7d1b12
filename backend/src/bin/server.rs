//! Patient Insights HTTP Server Binary
//!
//! Loads the configured dataset once, then serves the view API.
//!
//! # Usage
//!
//! ```bash
//! DATASET_PATH=healthcare_dataset.csv cargo run --bin insights-server
//! ```
//!
//! # Environment Variables
//!
//! - `DATASET_PATH`: CSV file to load (default: healthcare_dataset.csv)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)
//!
//! Values in `insights.toml` are used when the variables are unset.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use patient_insights::dataset::{self, EngineConfig};
use patient_insights::http::{create_router, AppState};
use patient_insights::services::cache::AggregateCache;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Patient Insights HTTP Server");

    let config = EngineConfig::resolve().context("Invalid configuration")?;

    dataset::init_dataset(&config.dataset.path)?;
    let dataset = Arc::clone(dataset::get_dataset()?);
    info!(
        "Dataset loaded from {} ({} records)",
        config.dataset.path.display(),
        dataset.len()
    );

    let mut state = AppState::new(dataset);
    if config.cache.enabled {
        info!("Result cache enabled");
        state = state.with_cache(Arc::new(AggregateCache::new()));
    }

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);
    info!("Views: http://{}/v1/views", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
