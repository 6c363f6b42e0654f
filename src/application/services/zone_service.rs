//! Zone Service - Application service for enclosure management
//!
//! Use case implementations for creating, updating, and deleting zones,
//! including the non-empty-zone deletion rule.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{CreatureRepositoryPort, ZoneRepositoryPort};
use crate::application::services::error::ServiceError;
use crate::domain::entities::{Creature, Zone};
use crate::domain::value_objects::ZoneId;

/// Request to create a new zone
#[derive(Debug, Clone)]
pub struct CreateZoneRequest {
    pub name: String,
    pub description: String,
    pub capacity: u32,
}

/// Request to replace the mutable fields of a zone
///
/// Updates are full-field replacement; there are no partial/patch semantics.
/// The id and the creature association set are never touched.
#[derive(Debug, Clone)]
pub struct UpdateZoneRequest {
    pub name: String,
    pub description: String,
    pub capacity: u32,
}

/// Zone together with the creatures currently housed in it
#[derive(Debug, Clone)]
pub struct ZoneWithCreatures {
    pub zone: Zone,
    pub creatures: Vec<Creature>,
}

/// Zone service trait defining the application use cases
#[async_trait]
pub trait ZoneService: Send + Sync {
    /// Create a new zone with validation
    async fn create_zone(&self, request: CreateZoneRequest) -> Result<Zone, ServiceError>;

    /// Get a zone by ID
    async fn get_zone(&self, id: ZoneId) -> Result<Zone, ServiceError>;

    /// Get a zone with its derived creature set
    async fn get_zone_with_creatures(&self, id: ZoneId)
        -> Result<ZoneWithCreatures, ServiceError>;

    /// List all zones
    async fn list_zones(&self) -> Result<Vec<Zone>, ServiceError>;

    /// Replace the mutable fields of a zone
    async fn update_zone(
        &self,
        id: ZoneId,
        request: UpdateZoneRequest,
    ) -> Result<Zone, ServiceError>;

    /// Delete a zone, rejected while creatures still reference it
    async fn delete_zone(&self, id: ZoneId) -> Result<(), ServiceError>;
}

/// Default implementation of ZoneService over the repository ports
pub struct ZoneServiceImpl {
    zones: Arc<dyn ZoneRepositoryPort>,
    creatures: Arc<dyn CreatureRepositoryPort>,
}

impl ZoneServiceImpl {
    pub fn new(zones: Arc<dyn ZoneRepositoryPort>, creatures: Arc<dyn CreatureRepositoryPort>) -> Self {
        Self { zones, creatures }
    }

    /// Validate the shape of a zone payload before any store call
    fn validate_payload(name: &str, description: &str, capacity: u32) -> Result<(), ServiceError> {
        if name.trim().is_empty() {
            return Err(ServiceError::validation("Zone name cannot be empty"));
        }
        if description.trim().is_empty() {
            return Err(ServiceError::validation("Zone description cannot be empty"));
        }
        if capacity == 0 {
            return Err(ServiceError::validation("Zone capacity must be positive"));
        }
        Ok(())
    }
}

#[async_trait]
impl ZoneService for ZoneServiceImpl {
    #[instrument(skip(self), fields(name = %request.name))]
    async fn create_zone(&self, request: CreateZoneRequest) -> Result<Zone, ServiceError> {
        Self::validate_payload(&request.name, &request.description, request.capacity)?;

        let zone = Zone::new(request.name, request.description, request.capacity);
        self.zones.create(&zone).await?;

        info!(zone_id = %zone.id, "Created new zone: {}", zone.name);
        Ok(zone)
    }

    #[instrument(skip(self))]
    async fn get_zone(&self, id: ZoneId) -> Result<Zone, ServiceError> {
        debug!(zone_id = %id, "Fetching zone");
        self.zones
            .get(id)
            .await?
            .ok_or(ServiceError::NotFound("Zone"))
    }

    #[instrument(skip(self))]
    async fn get_zone_with_creatures(
        &self,
        id: ZoneId,
    ) -> Result<ZoneWithCreatures, ServiceError> {
        let zone = self.get_zone(id).await?;
        let creatures = self.creatures.list_by_zone(id).await?;
        Ok(ZoneWithCreatures { zone, creatures })
    }

    #[instrument(skip(self))]
    async fn list_zones(&self) -> Result<Vec<Zone>, ServiceError> {
        debug!("Listing all zones");
        Ok(self.zones.list().await?)
    }

    #[instrument(skip(self), fields(zone_id = %id))]
    async fn update_zone(
        &self,
        id: ZoneId,
        request: UpdateZoneRequest,
    ) -> Result<Zone, ServiceError> {
        Self::validate_payload(&request.name, &request.description, request.capacity)?;

        let mut zone = self.get_zone(id).await?;
        zone.name = request.name;
        zone.description = request.description;
        zone.capacity = request.capacity;

        self.zones.update(&zone).await?;

        info!(zone_id = %zone.id, "Updated zone: {}", zone.name);
        Ok(zone)
    }

    #[instrument(skip(self), fields(zone_id = %id))]
    async fn delete_zone(&self, id: ZoneId) -> Result<(), ServiceError> {
        let zone = self.get_zone(id).await?;

        let count = self.creatures.count_by_zone(id).await?;
        if count > 0 {
            return Err(ServiceError::ZoneNotEmpty {
                name: zone.name,
                id: zone.id,
                count,
            });
        }

        self.zones.delete(id).await?;
        info!(zone_id = %id, "Deleted zone: {}", zone.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::creature_service::{
        CreateCreatureRequest, CreatureService, CreatureServiceImpl,
    };
    use crate::infrastructure::persistence::InMemoryZooStore;

    fn zone_service(store: &InMemoryZooStore) -> ZoneServiceImpl {
        ZoneServiceImpl::new(Arc::new(store.clone()), Arc::new(store.clone()))
    }

    fn creature_service(store: &InMemoryZooStore) -> CreatureServiceImpl {
        CreatureServiceImpl::new(Arc::new(store.clone()), Arc::new(store.clone()))
    }

    fn lagoon_request() -> CreateZoneRequest {
        CreateZoneRequest {
            name: "Lagoon".to_string(),
            description: "Brackish water enclosure".to_string(),
            capacity: 5,
        }
    }

    #[tokio::test]
    async fn create_then_get_preserves_fields_and_assigns_id() {
        let store = InMemoryZooStore::new();
        let service = zone_service(&store);

        let created = service.create_zone(lagoon_request()).await.unwrap();
        let fetched = service.get_zone(created.id).await.unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Lagoon");
        assert_eq!(fetched.description, "Brackish water enclosure");
        assert_eq!(fetched.capacity, 5);
    }

    #[tokio::test]
    async fn create_rejects_blank_name_and_zero_capacity() {
        let store = InMemoryZooStore::new();
        let service = zone_service(&store);

        let mut request = lagoon_request();
        request.name = "   ".to_string();
        assert!(matches!(
            service.create_zone(request).await,
            Err(ServiceError::Validation(_))
        ));

        let mut request = lagoon_request();
        request.capacity = 0;
        assert!(matches!(
            service.create_zone(request).await,
            Err(ServiceError::Validation(_))
        ));

        let mut request = lagoon_request();
        request.description = "".to_string();
        assert!(matches!(
            service.create_zone(request).await,
            Err(ServiceError::Validation(_))
        ));

        assert!(service.list_zones().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_unknown_zone_is_not_found() {
        let store = InMemoryZooStore::new();
        let service = zone_service(&store);

        assert!(matches!(
            service.get_zone(ZoneId::new()).await,
            Err(ServiceError::NotFound("Zone"))
        ));
    }

    #[tokio::test]
    async fn update_replaces_all_mutable_fields() {
        let store = InMemoryZooStore::new();
        let service = zone_service(&store);

        let created = service.create_zone(lagoon_request()).await.unwrap();
        let updated = service
            .update_zone(
                created.id,
                UpdateZoneRequest {
                    name: "Grand Lagoon".to_string(),
                    description: "Freshly renovated".to_string(),
                    capacity: 12,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Grand Lagoon");
        assert_eq!(updated.description, "Freshly renovated");
        assert_eq!(updated.capacity, 12);

        let fetched = service.get_zone(created.id).await.unwrap();
        assert_eq!(fetched.name, "Grand Lagoon");
    }

    #[tokio::test]
    async fn update_unknown_zone_is_not_found_and_writes_nothing() {
        let store = InMemoryZooStore::new();
        let service = zone_service(&store);

        let result = service
            .update_zone(
                ZoneId::new(),
                UpdateZoneRequest {
                    name: "Ghost".to_string(),
                    description: "Does not matter".to_string(),
                    capacity: 1,
                },
            )
            .await;

        assert!(matches!(result, Err(ServiceError::NotFound("Zone"))));
        assert!(service.list_zones().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_empty_zone_succeeds_and_becomes_not_found() {
        let store = InMemoryZooStore::new();
        let service = zone_service(&store);

        let created = service.create_zone(lagoon_request()).await.unwrap();
        service.delete_zone(created.id).await.unwrap();

        assert!(matches!(
            service.get_zone(created.id).await,
            Err(ServiceError::NotFound("Zone"))
        ));
    }

    #[tokio::test]
    async fn delete_non_empty_zone_conflicts_and_leaves_records_intact() {
        let store = InMemoryZooStore::new();
        let zones = zone_service(&store);
        let creatures = creature_service(&store);

        let zone = zones.create_zone(lagoon_request()).await.unwrap();
        let eel = creatures
            .create_creature(CreateCreatureRequest {
                zone_id: zone.id,
                name: "Eel".to_string(),
                species: "Fish".to_string(),
                size: 1.2,
                danger_level: 4,
                health_status: "healthy".to_string(),
            })
            .await
            .unwrap();

        let err = zones.delete_zone(zone.id).await.unwrap_err();
        match &err {
            ServiceError::ZoneNotEmpty { name, count, .. } => {
                assert_eq!(name, "Lagoon");
                assert_eq!(*count, 1);
            }
            other => panic!("expected ZoneNotEmpty, got {other:?}"),
        }
        assert!(err.to_string().contains("Lagoon"));
        assert!(err.to_string().contains("1 creatures"));

        // Both records survive the rejected delete
        assert!(zones.get_zone(zone.id).await.is_ok());
        assert!(creatures.get_creature(eel.id).await.is_ok());

        // Removing the creature unblocks the zone
        creatures.delete_creature(eel.id).await.unwrap();
        zones.delete_zone(zone.id).await.unwrap();
        assert!(matches!(
            zones.get_zone(zone.id).await,
            Err(ServiceError::NotFound("Zone"))
        ));
    }

    #[tokio::test]
    async fn zone_with_creatures_lists_the_derived_set() {
        let store = InMemoryZooStore::new();
        let zones = zone_service(&store);
        let creatures = creature_service(&store);

        let zone = zones.create_zone(lagoon_request()).await.unwrap();
        for name in ["Eel", "Ray"] {
            creatures
                .create_creature(CreateCreatureRequest {
                    zone_id: zone.id,
                    name: name.to_string(),
                    species: "Fish".to_string(),
                    size: 1.0,
                    danger_level: 2,
                    health_status: "stable".to_string(),
                })
                .await
                .unwrap();
        }

        let detail = zones.get_zone_with_creatures(zone.id).await.unwrap();
        assert_eq!(detail.zone.id, zone.id);
        assert_eq!(detail.creatures.len(), 2);
        assert!(detail.creatures.iter().all(|c| c.zone_id == zone.id));
    }
}
