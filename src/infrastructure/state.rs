//! Shared application state

use anyhow::Result;

use crate::application::services::{CreatureServiceImpl, ZoneServiceImpl};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::RepositoryFactory;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub zone_service: ZoneServiceImpl,
    pub creature_service: CreatureServiceImpl,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let repositories = RepositoryFactory::create(&config).await?;

        let zone_service = ZoneServiceImpl::new(
            repositories.zones.clone(),
            repositories.creatures.clone(),
        );
        let creature_service =
            CreatureServiceImpl::new(repositories.creatures, repositories.zones);

        Ok(Self {
            config,
            zone_service,
            creature_service,
        })
    }
}
