//! Zone API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::services::{
    CreateZoneRequest as ServiceCreateZoneRequest,
    UpdateZoneRequest as ServiceUpdateZoneRequest, ZoneService, ZoneWithCreatures,
};
use crate::domain::entities::Zone;
use crate::domain::value_objects::ZoneId;
use crate::infrastructure::http::creature_routes::CreatureResponse;
use crate::infrastructure::http::error_response;
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ZoneRequest {
    pub name: String,
    pub description: String,
    pub capacity: u32,
}

#[derive(Debug, Serialize)]
pub struct ZoneResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub capacity: u32,
}

impl From<Zone> for ZoneResponse {
    fn from(z: Zone) -> Self {
        Self {
            id: z.id.to_string(),
            name: z.name,
            description: z.description,
            capacity: z.capacity,
        }
    }
}

/// Zone with its derived creature set
#[derive(Debug, Serialize)]
pub struct ZoneDetailResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub capacity: u32,
    pub creatures: Vec<CreatureResponse>,
}

impl From<ZoneWithCreatures> for ZoneDetailResponse {
    fn from(detail: ZoneWithCreatures) -> Self {
        Self {
            id: detail.zone.id.to_string(),
            name: detail.zone.name,
            description: detail.zone.description,
            capacity: detail.zone.capacity,
            creatures: detail
                .creatures
                .into_iter()
                .map(CreatureResponse::from)
                .collect(),
        }
    }
}

fn parse_zone_id(id: &str) -> Result<ZoneId, (StatusCode, String)> {
    Uuid::parse_str(id)
        .map(ZoneId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid zone ID".to_string()))
}

/// List all zones
pub async fn list_zones(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ZoneResponse>>, (StatusCode, String)> {
    let zones = state
        .zone_service
        .list_zones()
        .await
        .map_err(error_response)?;

    Ok(Json(zones.into_iter().map(ZoneResponse::from).collect()))
}

/// Create a zone
pub async fn create_zone(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ZoneRequest>,
) -> Result<(StatusCode, Json<ZoneResponse>), (StatusCode, String)> {
    let zone = state
        .zone_service
        .create_zone(ServiceCreateZoneRequest {
            name: req.name,
            description: req.description,
            capacity: req.capacity,
        })
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(ZoneResponse::from(zone))))
}

/// Get a zone by ID, with the creatures it houses
pub async fn get_zone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ZoneDetailResponse>, (StatusCode, String)> {
    let zone_id = parse_zone_id(&id)?;

    let detail = state
        .zone_service
        .get_zone_with_creatures(zone_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ZoneDetailResponse::from(detail)))
}

/// Update a zone
pub async fn update_zone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ZoneRequest>,
) -> Result<Json<ZoneResponse>, (StatusCode, String)> {
    let zone_id = parse_zone_id(&id)?;

    let zone = state
        .zone_service
        .update_zone(
            zone_id,
            ServiceUpdateZoneRequest {
                name: req.name,
                description: req.description,
                capacity: req.capacity,
            },
        )
        .await
        .map_err(error_response)?;

    Ok(Json(ZoneResponse::from(zone)))
}

/// Delete a zone
pub async fn delete_zone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let zone_id = parse_zone_id(&id)?;

    state
        .zone_service
        .delete_zone(zone_id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
