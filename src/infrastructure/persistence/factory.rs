//! Repository factory - Creates repository instances based on configuration
//!
//! Chooses between the SQLite backend (default) and the in-memory backend
//! while keeping the services coupled only to the port traits.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;

use crate::application::ports::outbound::{CreatureRepositoryPort, ZoneRepositoryPort};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{
    InMemoryZooStore, SqliteCreatureRepository, SqliteZoneRepository,
};

/// Repository handles shared by the application services
pub struct Repositories {
    pub zones: Arc<dyn ZoneRepositoryPort>,
    pub creatures: Arc<dyn CreatureRepositoryPort>,
}

pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Build the repositories named by `DATABASE_BACKEND`
    pub async fn create(config: &AppConfig) -> Result<Repositories> {
        match config.database_backend.as_str() {
            "memory" => {
                tracing::info!("Using in-memory repositories (state is not persisted)");
                let store = InMemoryZooStore::new();
                Ok(Repositories {
                    zones: Arc::new(store.clone()),
                    creatures: Arc::new(store),
                })
            }
            "sqlite" => {
                let pool = SqlitePoolOptions::new()
                    .max_connections(5)
                    .connect(&config.database_url)
                    .await
                    .with_context(|| {
                        format!("Failed to connect to database: {}", config.database_url)
                    })?;

                // Zones first: the creatures table references it
                let zones = SqliteZoneRepository::new(pool.clone())
                    .await
                    .context("Failed to initialize zones table")?;
                let creatures = SqliteCreatureRepository::new(pool)
                    .await
                    .context("Failed to initialize creatures table")?;

                Ok(Repositories {
                    zones: Arc::new(zones),
                    creatures: Arc::new(creatures),
                })
            }
            other => anyhow::bail!("Unknown database backend: {other}"),
        }
    }
}
