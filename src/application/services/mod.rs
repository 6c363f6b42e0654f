//! Application services - Use case implementations
//!
//! Each store exposes a service trait with a default implementation that
//! accepts repository ports and returns domain entities. Domain failures are
//! explicit `ServiceError` values; HTTP translation happens at the route
//! layer.

pub mod creature_service;
pub mod error;
pub mod zone_service;

pub use creature_service::{
    CreateCreatureRequest, CreatureService, CreatureServiceImpl, UpdateCreatureRequest,
};
pub use error::ServiceError;
pub use zone_service::{
    CreateZoneRequest, UpdateZoneRequest, ZoneService, ZoneServiceImpl, ZoneWithCreatures,
};
