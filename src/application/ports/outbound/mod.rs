//! Outbound ports - Contracts the infrastructure adapters implement

mod repository_port;

pub use repository_port::{CreatureRepositoryPort, RepositoryError, ZoneRepositoryPort};
