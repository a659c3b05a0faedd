//! Severity prediction server
//!
//! Loads the model artifact once, then serves `POST /api/predict`.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=stacking_model.json PORT=8053 cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `BIND_ADDRESS` - Listen address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 8053)
//! - `MODEL_PATH` - Model artifact, `.onnx` or smartcore JSON (default: stacking_model.json)
//! - `ONNX_THREADS` - Intra-op threads for ONNX models (default: 1)

use anyhow::{Context, Result};
use piu_severity::application::ml::ModelLoader;
use piu_severity::application::prediction_service::PredictionService;
use piu_severity::config::Config;
use piu_severity::domain::types::PredictionRequest;
use piu_severity::interfaces::router;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Severity server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: addr={}:{}, model={:?}",
        config.bind_address, config.port, config.model_path
    );

    // The service must not accept requests without a model.
    let predictor = ModelLoader::new(config.onnx_threads)
        .load(&config.model_path)
        .context("Failed to load model")?;
    let service = PredictionService::new(predictor);

    let warmup = service
        .predict(&PredictionRequest::sample())
        .context("Model warm-up prediction failed")?;
    info!(
        raw_score = warmup.raw_score,
        prediction = warmup.class.as_u8(),
        thresholds = ?service.thresholds().cuts(),
        "Warm-up prediction ok"
    );

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received. Exiting...");
}
