//! Application setup and initialization
//!
//! Builds the store client, the gateway and the router from a loaded `Config`.

pub mod routes;
pub mod server;

use crate::services::gateway::UploadGateway;
use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use uploadgate_core::Config;
use uploadgate_storage::create_storage;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.is_production());

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    let store = create_storage(&config).context("Failed to initialize S3 storage")?;
    let gateway = UploadGateway::new(store, config.public_base_url());
    let state = Arc::new(AppState::new(config.clone(), gateway));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
