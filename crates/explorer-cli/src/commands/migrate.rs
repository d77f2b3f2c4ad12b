//! Database migrations.

use explorer_core::config::{AppConfig, StoreBackend};
use explorer_core::error::AppError;
use explorer_database::DatabasePool;
use explorer_database::migration::run_migrations;

use crate::output;

/// Execute the migrate command
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    if config.store.backend != StoreBackend::Postgres {
        return Err(AppError::configuration(format!(
            "Migrations need the postgres backend, store is '{}'",
            config.store.backend.as_str()
        )));
    }

    apply(&config).await?;
    output::print_success("All migrations applied successfully.");
    Ok(())
}

/// Connect to the configured database and run pending migrations.
pub async fn apply(config: &AppConfig) -> Result<(), AppError> {
    println!("Running database migrations...");
    let pool = DatabasePool::connect(&config.database).await?;
    let result = run_migrations(pool.pool()).await;
    pool.close().await;
    result
}
