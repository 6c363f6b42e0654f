//! In-memory adapter for the repository ports
//!
//! Selectable as a backend for throwaway deployments and used as the test
//! double in the service test suites. Cloning shares the underlying maps.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::{
    CreatureRepositoryPort, RepositoryError, ZoneRepositoryPort,
};
use crate::domain::entities::{Creature, Zone};
use crate::domain::value_objects::{CreatureId, ZoneId};

#[derive(Clone, Default)]
pub struct InMemoryZooStore {
    zones: Arc<RwLock<HashMap<ZoneId, Zone>>>,
    creatures: Arc<RwLock<HashMap<CreatureId, Creature>>>,
}

impl InMemoryZooStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ZoneRepositoryPort for InMemoryZooStore {
    async fn create(&self, zone: &Zone) -> Result<(), RepositoryError> {
        self.zones.write().await.insert(zone.id, zone.clone());
        Ok(())
    }

    async fn get(&self, id: ZoneId) -> Result<Option<Zone>, RepositoryError> {
        Ok(self.zones.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Zone>, RepositoryError> {
        Ok(self.zones.read().await.values().cloned().collect())
    }

    async fn update(&self, zone: &Zone) -> Result<(), RepositoryError> {
        self.zones.write().await.insert(zone.id, zone.clone());
        Ok(())
    }

    async fn delete(&self, id: ZoneId) -> Result<(), RepositoryError> {
        self.zones.write().await.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CreatureRepositoryPort for InMemoryZooStore {
    async fn create(&self, creature: &Creature) -> Result<(), RepositoryError> {
        self.creatures
            .write()
            .await
            .insert(creature.id, creature.clone());
        Ok(())
    }

    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepositoryError> {
        Ok(self.creatures.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Creature>, RepositoryError> {
        Ok(self.creatures.read().await.values().cloned().collect())
    }

    async fn update(&self, creature: &Creature) -> Result<(), RepositoryError> {
        self.creatures
            .write()
            .await
            .insert(creature.id, creature.clone());
        Ok(())
    }

    async fn delete(&self, id: CreatureId) -> Result<(), RepositoryError> {
        self.creatures.write().await.remove(&id);
        Ok(())
    }

    async fn list_by_zone(&self, zone_id: ZoneId) -> Result<Vec<Creature>, RepositoryError> {
        Ok(self
            .creatures
            .read()
            .await
            .values()
            .filter(|c| c.zone_id == zone_id)
            .cloned()
            .collect())
    }

    async fn count_by_zone(&self, zone_id: ZoneId) -> Result<usize, RepositoryError> {
        Ok(self
            .creatures
            .read()
            .await
            .values()
            .filter(|c| c.zone_id == zone_id)
            .count())
    }
}
