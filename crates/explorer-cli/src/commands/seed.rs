//! Load the sample hierarchy.

use explorer_core::config::StoreBackend;
use explorer_core::error::AppError;
use explorer_database::seed::seed_sample_data;
use explorer_database::{DatabasePool, MemoryStore};

use crate::output;

/// Execute the seed command
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    let summary = match config.store.backend {
        StoreBackend::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            let summary = seed_sample_data(&pool.stores()).await;
            pool.close().await;
            summary?
        }
        StoreBackend::Memory => {
            output::print_warning("Memory store is not persisted; set store.seed_on_start instead.");
            seed_sample_data(&MemoryStore::new().stores()).await?
        }
    };

    output::print_success(&format!(
        "Seeded {} folders and {} files.",
        summary.folders, summary.files
    ));
    Ok(())
}
