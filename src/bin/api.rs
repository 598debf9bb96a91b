//! HealthBot API Server
//!
//! Run with: cargo run --bin healthbot-api
//!
//! # Configuration
//!
//! Read from `config.toml` (see `healthbot-cli config`), then overridden by:
//! - `HEALTHBOT_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `HEALTHBOT_API_PORT`: Port to listen on (default: 8082)
//! - `HEALTHBOT_DATASET_SEED`: Synthetic dataset seed (default: 42)
//! - `HEALTHBOT_DATASET_SIZE`: Synthetic dataset rows (default: 50)
//! - `HEALTHBOT_LOG_LEVEL` / `HEALTHBOT_LOG_FORMAT`
//! - `RUST_LOG`: Full filter override

use healthbot::api::{serve, AppState};
use healthbot::config::Config;
use healthbot::dataset::Dataset;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    config.logging.init();

    tracing::info!("Starting HealthBot API server v{}", env!("CARGO_PKG_VERSION"));

    let generator = config.dataset.generator();
    tracing::info!(
        seed = generator.seed,
        size = generator.size,
        "Generating synthetic dataset"
    );
    let dataset = Arc::new(Dataset::generate(generator));

    let state = AppState::new(dataset, config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("HealthBot API server stopped");
    Ok(())
}
