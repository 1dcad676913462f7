use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Inventory dashboard REST API
///
/// - config/: server, CORS, database and storage settings
/// - setup/: dependency wiring and the HTTP server
/// - api/: route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database and apply migrations
    let pool = database_config::init_database(&config.database).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, config.storage);

    // 6. Run server
    Server::run(config.server, config.cors, container).await
}
