use anyhow::Result;
use employee_directory::config::Config;
use employee_directory::server::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("employee_directory={},tower_http=debug", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting employee directory service");
    tracing::info!(
        "Configuration: bind_address={}, request_limit={}/{}s, backoff={}s, seed_count={}",
        config.bind_address,
        config.request_limit,
        config.window_secs,
        config.backoff_secs,
        config.seed_count
    );

    // Create and run the server
    let server = Server::new(config);

    server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
