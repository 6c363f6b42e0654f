//! Repository ports - Interfaces for data persistence
//!
//! These traits define the contracts that infrastructure repositories must
//! implement. Application services depend on these traits, not concrete
//! implementations, so the storage backend can be swapped for a test double.

use async_trait::async_trait;

use crate::domain::entities::{Creature, Zone};
use crate::domain::value_objects::{CreatureId, ZoneId};

/// Errors surfaced by repository adapters
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

/// Repository port for Zone operations
#[async_trait]
pub trait ZoneRepositoryPort: Send + Sync {
    /// Persist a new zone
    async fn create(&self, zone: &Zone) -> Result<(), RepositoryError>;

    /// Get a zone by ID
    async fn get(&self, id: ZoneId) -> Result<Option<Zone>, RepositoryError>;

    /// List all zones
    async fn list(&self) -> Result<Vec<Zone>, RepositoryError>;

    /// Overwrite an existing zone row
    async fn update(&self, zone: &Zone) -> Result<(), RepositoryError>;

    /// Remove a zone row
    async fn delete(&self, id: ZoneId) -> Result<(), RepositoryError>;
}

/// Repository port for Creature operations
#[async_trait]
pub trait CreatureRepositoryPort: Send + Sync {
    /// Persist a new creature
    async fn create(&self, creature: &Creature) -> Result<(), RepositoryError>;

    /// Get a creature by ID
    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepositoryError>;

    /// List all creatures
    async fn list(&self) -> Result<Vec<Creature>, RepositoryError>;

    /// Overwrite an existing creature row
    async fn update(&self, creature: &Creature) -> Result<(), RepositoryError>;

    /// Remove a creature row
    async fn delete(&self, id: CreatureId) -> Result<(), RepositoryError>;

    /// Creatures housed in a zone (reverse lookup on the zone reference)
    async fn list_by_zone(&self, zone_id: ZoneId) -> Result<Vec<Creature>, RepositoryError>;

    /// Number of creatures housed in a zone
    async fn count_by_zone(&self, zone_id: ZoneId) -> Result<usize, RepositoryError>;
}
