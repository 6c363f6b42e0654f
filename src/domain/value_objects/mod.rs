//! Value objects - Immutable objects defined by their attributes

mod health_status;
mod ids;

pub use health_status::HealthStatus;
pub use ids::*;
