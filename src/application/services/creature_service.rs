//! Creature Service - Application service for creature management
//!
//! Use case implementations for creating, updating, and deleting creatures,
//! including the critical-health deletion rule and the required zone
//! reference.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{CreatureRepositoryPort, ZoneRepositoryPort};
use crate::application::services::error::ServiceError;
use crate::domain::entities::Creature;
use crate::domain::value_objects::{CreatureId, ZoneId};

/// Request to create a new creature in an existing zone
#[derive(Debug, Clone)]
pub struct CreateCreatureRequest {
    pub zone_id: ZoneId,
    pub name: String,
    pub species: String,
    pub size: f64,
    pub danger_level: u8,
    pub health_status: String,
}

/// Request to replace the mutable fields of a creature
///
/// The zone reference is not part of the payload; moving a creature between
/// zones is not an update operation.
#[derive(Debug, Clone)]
pub struct UpdateCreatureRequest {
    pub name: String,
    pub species: String,
    pub size: f64,
    pub danger_level: u8,
    pub health_status: String,
}

/// Creature service trait defining the application use cases
#[async_trait]
pub trait CreatureService: Send + Sync {
    /// Create a new creature, verifying the referenced zone exists
    async fn create_creature(
        &self,
        request: CreateCreatureRequest,
    ) -> Result<Creature, ServiceError>;

    /// Get a creature by ID
    async fn get_creature(&self, id: CreatureId) -> Result<Creature, ServiceError>;

    /// List all creatures
    async fn list_creatures(&self) -> Result<Vec<Creature>, ServiceError>;

    /// Replace the mutable fields of a creature
    async fn update_creature(
        &self,
        id: CreatureId,
        request: UpdateCreatureRequest,
    ) -> Result<Creature, ServiceError>;

    /// Delete a creature, rejected while its health is critical
    async fn delete_creature(&self, id: CreatureId) -> Result<(), ServiceError>;
}

/// Default implementation of CreatureService over the repository ports
pub struct CreatureServiceImpl {
    creatures: Arc<dyn CreatureRepositoryPort>,
    zones: Arc<dyn ZoneRepositoryPort>,
}

impl CreatureServiceImpl {
    pub fn new(
        creatures: Arc<dyn CreatureRepositoryPort>,
        zones: Arc<dyn ZoneRepositoryPort>,
    ) -> Self {
        Self { creatures, zones }
    }

    /// Validate the shape of a creature payload before any store call
    fn validate_payload(
        name: &str,
        species: &str,
        size: f64,
        danger_level: u8,
        health_status: &str,
    ) -> Result<(), ServiceError> {
        if name.trim().is_empty() {
            return Err(ServiceError::validation("Creature name cannot be empty"));
        }
        if species.trim().is_empty() {
            return Err(ServiceError::validation("Creature species cannot be empty"));
        }
        // The comparison is written so NaN fails too
        if !(size >= 0.0) {
            return Err(ServiceError::validation(
                "Creature size must be zero or positive",
            ));
        }
        if !(1..=10).contains(&danger_level) {
            return Err(ServiceError::validation(
                "Creature danger level must be between 1 and 10",
            ));
        }
        if health_status.trim().is_empty() {
            return Err(ServiceError::validation(
                "Creature health status cannot be empty",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CreatureService for CreatureServiceImpl {
    #[instrument(skip(self), fields(name = %request.name, zone_id = %request.zone_id))]
    async fn create_creature(
        &self,
        request: CreateCreatureRequest,
    ) -> Result<Creature, ServiceError> {
        Self::validate_payload(
            &request.name,
            &request.species,
            request.size,
            request.danger_level,
            &request.health_status,
        )?;

        // Required zone reference must resolve before anything is written
        if self.zones.get(request.zone_id).await?.is_none() {
            return Err(ServiceError::NotFound("Zone"));
        }

        let creature = Creature::new(
            request.zone_id,
            request.name,
            request.species,
            request.size,
            request.danger_level,
            request.health_status,
        );
        self.creatures.create(&creature).await?;

        info!(creature_id = %creature.id, "Created new creature: {}", creature.name);
        Ok(creature)
    }

    #[instrument(skip(self))]
    async fn get_creature(&self, id: CreatureId) -> Result<Creature, ServiceError> {
        debug!(creature_id = %id, "Fetching creature");
        self.creatures
            .get(id)
            .await?
            .ok_or(ServiceError::NotFound("Creature"))
    }

    #[instrument(skip(self))]
    async fn list_creatures(&self) -> Result<Vec<Creature>, ServiceError> {
        debug!("Listing all creatures");
        Ok(self.creatures.list().await?)
    }

    #[instrument(skip(self), fields(creature_id = %id))]
    async fn update_creature(
        &self,
        id: CreatureId,
        request: UpdateCreatureRequest,
    ) -> Result<Creature, ServiceError> {
        Self::validate_payload(
            &request.name,
            &request.species,
            request.size,
            request.danger_level,
            &request.health_status,
        )?;

        let mut creature = self.get_creature(id).await?;
        creature.name = request.name;
        creature.species = request.species;
        creature.size = request.size;
        creature.danger_level = request.danger_level;
        creature.health_status = request.health_status.into();

        self.creatures.update(&creature).await?;

        info!(creature_id = %creature.id, "Updated creature: {}", creature.name);
        Ok(creature)
    }

    #[instrument(skip(self), fields(creature_id = %id))]
    async fn delete_creature(&self, id: CreatureId) -> Result<(), ServiceError> {
        let creature = self.get_creature(id).await?;

        if creature.is_critical() {
            return Err(ServiceError::CriticalHealth);
        }

        self.creatures.delete(id).await?;
        info!(creature_id = %id, "Deleted creature: {}", creature.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::zone_service::{
        CreateZoneRequest, ZoneService, ZoneServiceImpl,
    };
    use crate::infrastructure::persistence::InMemoryZooStore;

    fn creature_service(store: &InMemoryZooStore) -> CreatureServiceImpl {
        CreatureServiceImpl::new(Arc::new(store.clone()), Arc::new(store.clone()))
    }

    async fn seed_zone(store: &InMemoryZooStore) -> ZoneId {
        let zones = ZoneServiceImpl::new(Arc::new(store.clone()), Arc::new(store.clone()));
        zones
            .create_zone(CreateZoneRequest {
                name: "Enchanted Lake".to_string(),
                description: "Home of aquatic creatures".to_string(),
                capacity: 5,
            })
            .await
            .unwrap()
            .id
    }

    fn phoenix_request(zone_id: ZoneId) -> CreateCreatureRequest {
        CreateCreatureRequest {
            zone_id,
            name: "Phoenix".to_string(),
            species: "Firebird".to_string(),
            size: 2.5,
            danger_level: 7,
            health_status: "stable".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_preserves_fields_and_zone_reference() {
        let store = InMemoryZooStore::new();
        let zone_id = seed_zone(&store).await;
        let service = creature_service(&store);

        let created = service.create_creature(phoenix_request(zone_id)).await.unwrap();
        let fetched = service.get_creature(created.id).await.unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.zone_id, zone_id);
        assert_eq!(fetched.name, "Phoenix");
        assert_eq!(fetched.species, "Firebird");
        assert_eq!(fetched.size, 2.5);
        assert_eq!(fetched.danger_level, 7);
        assert_eq!(fetched.health_status.as_str(), "stable");
    }

    #[tokio::test]
    async fn create_rejects_unknown_zone() {
        let store = InMemoryZooStore::new();
        let service = creature_service(&store);

        let result = service.create_creature(phoenix_request(ZoneId::new())).await;
        assert!(matches!(result, Err(ServiceError::NotFound("Zone"))));
        assert!(service.list_creatures().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_malformed_payloads() {
        let store = InMemoryZooStore::new();
        let zone_id = seed_zone(&store).await;
        let service = creature_service(&store);

        let mut request = phoenix_request(zone_id);
        request.species = "  ".to_string();
        assert!(matches!(
            service.create_creature(request).await,
            Err(ServiceError::Validation(_))
        ));

        let mut request = phoenix_request(zone_id);
        request.size = -0.5;
        assert!(matches!(
            service.create_creature(request).await,
            Err(ServiceError::Validation(_))
        ));

        let mut request = phoenix_request(zone_id);
        request.size = f64::NAN;
        assert!(matches!(
            service.create_creature(request).await,
            Err(ServiceError::Validation(_))
        ));

        for level in [0u8, 11] {
            let mut request = phoenix_request(zone_id);
            request.danger_level = level;
            assert!(matches!(
                service.create_creature(request).await,
                Err(ServiceError::Validation(_))
            ));
        }

        let mut request = phoenix_request(zone_id);
        request.health_status = "".to_string();
        assert!(matches!(
            service.create_creature(request).await,
            Err(ServiceError::Validation(_))
        ));

        assert!(service.list_creatures().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields_but_not_zone_reference() {
        let store = InMemoryZooStore::new();
        let zone_id = seed_zone(&store).await;
        let service = creature_service(&store);

        let created = service.create_creature(phoenix_request(zone_id)).await.unwrap();
        let updated = service
            .update_creature(
                created.id,
                UpdateCreatureRequest {
                    name: "Golden Phoenix".to_string(),
                    species: "Legendary bird".to_string(),
                    size: 7.7,
                    danger_level: 5,
                    health_status: "healthy".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.zone_id, zone_id);
        assert_eq!(updated.name, "Golden Phoenix");
        assert_eq!(updated.species, "Legendary bird");
        assert_eq!(updated.size, 7.7);
        assert_eq!(updated.danger_level, 5);
        assert_eq!(updated.health_status.as_str(), "healthy");
    }

    #[tokio::test]
    async fn update_unknown_creature_is_not_found_and_writes_nothing() {
        let store = InMemoryZooStore::new();
        let service = creature_service(&store);

        let result = service
            .update_creature(
                CreatureId::new(),
                UpdateCreatureRequest {
                    name: "Ghost".to_string(),
                    species: "Spirit".to_string(),
                    size: 1.0,
                    danger_level: 1,
                    health_status: "stable".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(ServiceError::NotFound("Creature"))));
        assert!(service.list_creatures().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_stable_creature_succeeds() {
        let store = InMemoryZooStore::new();
        let zone_id = seed_zone(&store).await;
        let service = creature_service(&store);

        let created = service.create_creature(phoenix_request(zone_id)).await.unwrap();
        service.delete_creature(created.id).await.unwrap();

        assert!(matches!(
            service.get_creature(created.id).await,
            Err(ServiceError::NotFound("Creature"))
        ));
    }

    #[tokio::test]
    async fn delete_critical_creature_is_blocked_in_any_case() {
        let store = InMemoryZooStore::new();
        let zone_id = seed_zone(&store).await;
        let service = creature_service(&store);

        for status in ["critical", "CRITICAL", "Critical"] {
            let mut request = phoenix_request(zone_id);
            request.name = format!("Siren ({status})");
            request.health_status = status.to_string();
            let created = service.create_creature(request).await.unwrap();

            assert!(matches!(
                service.delete_creature(created.id).await,
                Err(ServiceError::CriticalHealth)
            ));
            // The rejected delete leaves the record intact
            assert!(service.get_creature(created.id).await.is_ok());
        }
    }
}
