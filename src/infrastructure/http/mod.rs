//! HTTP REST API routes

mod creature_routes;
mod zone_routes;

use axum::{
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::application::services::ServiceError;
use crate::infrastructure::state::AppState;

pub use creature_routes::*;
pub use zone_routes::*;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Zone routes
        .route("/api/zones", get(zone_routes::list_zones))
        .route("/api/zones", post(zone_routes::create_zone))
        .route("/api/zones/{id}", get(zone_routes::get_zone))
        .route("/api/zones/{id}", put(zone_routes::update_zone))
        .route("/api/zones/{id}", delete(zone_routes::delete_zone))
        // Creature routes
        .route("/api/creatures", get(creature_routes::list_creatures))
        .route("/api/creatures", post(creature_routes::create_creature))
        .route("/api/creatures/{id}", get(creature_routes::get_creature))
        .route("/api/creatures/{id}", put(creature_routes::update_creature))
        .route(
            "/api/creatures/{id}",
            delete(creature_routes::delete_creature),
        )
}

/// Translate a service failure into a response status and body
///
/// Deleting a critical-health creature maps to 409 Conflict, matching the
/// non-empty-zone precedent.
pub(crate) fn error_response(err: ServiceError) -> (StatusCode, String) {
    let status = match &err {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::ZoneNotEmpty { .. } => StatusCode::CONFLICT,
        ServiceError::CriticalHealth => StatusCode::CONFLICT,
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::RepositoryError;
    use crate::domain::value_objects::ZoneId;

    #[test]
    fn not_found_maps_to_404() {
        let (status, body) = error_response(ServiceError::NotFound("Zone"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Zone not found");
    }

    #[test]
    fn zone_not_empty_maps_to_409_with_descriptive_body() {
        let id = ZoneId::new();
        let (status, body) = error_response(ServiceError::ZoneNotEmpty {
            name: "Lagoon".to_string(),
            id,
            count: 1,
        });
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body.contains("Lagoon"));
        assert!(body.contains(&id.to_string()));
        assert!(body.contains("1 creatures"));
    }

    #[test]
    fn critical_health_maps_to_409() {
        let (status, body) = error_response(ServiceError::CriticalHealth);
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, "Cannot delete a creature in critical health");
    }

    #[test]
    fn validation_maps_to_400() {
        let (status, _) = error_response(ServiceError::validation("bad shape"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn repository_failure_maps_to_500() {
        let (status, _) = error_response(ServiceError::Repository(RepositoryError::Database(
            "disk gone".to_string(),
        )));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
