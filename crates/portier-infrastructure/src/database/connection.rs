//! Database connection pool

use portier_shared::config::DatabaseSettings;
use sqlx::{migrate::MigrateError, postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(&settings.dsn)
        .await
}

#[derive(Error, Debug)]
#[error("Migration failed: {0}")]
pub struct MigrationError(#[from] MigrateError);

/// Applies the embedded schema migrations (`tenants`, `users`, `keys`,
/// `copies`, `cache`).
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrationError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
