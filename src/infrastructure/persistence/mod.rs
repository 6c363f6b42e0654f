//! Persistence implementations - Infrastructure adapters for repository ports

mod creature_repository;
mod factory;
mod memory_repository;
mod zone_repository;

pub use creature_repository::SqliteCreatureRepository;
pub use factory::{Repositories, RepositoryFactory};
pub use memory_repository::InMemoryZooStore;
pub use zone_repository::SqliteZoneRepository;
