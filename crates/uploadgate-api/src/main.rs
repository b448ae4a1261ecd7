use uploadgate_core::Config;

// Use mimalloc as the global allocator for lower fragmentation under large
// buffered uploads, especially on musl-based container images.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (telemetry, store client, routes)
    let (_state, router) = uploadgate_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    uploadgate_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
