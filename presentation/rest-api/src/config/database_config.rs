use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Item store settings
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: SQL migrations directory
///   (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => 5,
        };
        let migrations_path =
            lookup("DATABASE_MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

/// Opens the connection pool and brings the schema up to date.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let config =
        DatabaseConfig::new(settings.url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config)
        .await
        .context("could not connect to the item store")?;
    run_migrations(&pool, &settings.migrations_path)
        .await
        .with_context(|| format!("could not apply migrations from {}", settings.migrations_path))?;
    Ok(pool)
}
