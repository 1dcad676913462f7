use sqlx::{PgPool, migrate::Migrator, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    Connection(#[source] sqlx::Error),
    #[error("database.migrations_not_found")]
    MigrationsNotFound(String),
    #[error("database.migration_error")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

/// Connection settings for the item store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(DatabaseError::Connection)
}

/// Applies the SQL migrations found in `migrations_path`.
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.is_dir() {
        return Err(DatabaseError::MigrationsNotFound(migrations_path.to_string()));
    }

    let migrator = Migrator::new(path).await.map_err(DatabaseError::Migration)?;
    migrator.run(pool).await.map_err(DatabaseError::Migration)?;
    tracing::info!(
        migrations = migrator.iter().count(),
        "Item store migrations applied"
    );
    Ok(())
}
