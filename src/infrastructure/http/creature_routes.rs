//! Creature API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::services::{
    CreateCreatureRequest as ServiceCreateCreatureRequest, CreatureService,
    UpdateCreatureRequest as ServiceUpdateCreatureRequest,
};
use crate::domain::entities::Creature;
use crate::domain::value_objects::{CreatureId, ZoneId};
use crate::infrastructure::http::error_response;
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCreatureRequest {
    pub name: String,
    pub species: String,
    pub size: f64,
    pub danger_level: u8,
    pub health_status: String,
    pub zone_id: String,
}

/// Update payload: the zone reference is not part of an update
#[derive(Debug, Deserialize)]
pub struct UpdateCreatureRequest {
    pub name: String,
    pub species: String,
    pub size: f64,
    pub danger_level: u8,
    pub health_status: String,
}

#[derive(Debug, Serialize)]
pub struct CreatureResponse {
    pub id: String,
    pub name: String,
    pub species: String,
    pub size: f64,
    pub danger_level: u8,
    pub health_status: String,
    pub zone_id: String,
}

impl From<Creature> for CreatureResponse {
    fn from(c: Creature) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name,
            species: c.species,
            size: c.size,
            danger_level: c.danger_level,
            health_status: c.health_status.to_string(),
            zone_id: c.zone_id.to_string(),
        }
    }
}

fn parse_creature_id(id: &str) -> Result<CreatureId, (StatusCode, String)> {
    Uuid::parse_str(id)
        .map(CreatureId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid creature ID".to_string()))
}

/// List all creatures
pub async fn list_creatures(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CreatureResponse>>, (StatusCode, String)> {
    let creatures = state
        .creature_service
        .list_creatures()
        .await
        .map_err(error_response)?;

    Ok(Json(
        creatures.into_iter().map(CreatureResponse::from).collect(),
    ))
}

/// Create a creature in an existing zone
pub async fn create_creature(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCreatureRequest>,
) -> Result<(StatusCode, Json<CreatureResponse>), (StatusCode, String)> {
    let zone_uuid = Uuid::parse_str(&req.zone_id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid zone ID".to_string()))?;

    let creature = state
        .creature_service
        .create_creature(ServiceCreateCreatureRequest {
            zone_id: ZoneId::from_uuid(zone_uuid),
            name: req.name,
            species: req.species,
            size: req.size,
            danger_level: req.danger_level,
            health_status: req.health_status,
        })
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(CreatureResponse::from(creature))))
}

/// Get a creature by ID
pub async fn get_creature(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CreatureResponse>, (StatusCode, String)> {
    let creature_id = parse_creature_id(&id)?;

    let creature = state
        .creature_service
        .get_creature(creature_id)
        .await
        .map_err(error_response)?;

    Ok(Json(CreatureResponse::from(creature)))
}

/// Update a creature
pub async fn update_creature(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCreatureRequest>,
) -> Result<Json<CreatureResponse>, (StatusCode, String)> {
    let creature_id = parse_creature_id(&id)?;

    let creature = state
        .creature_service
        .update_creature(
            creature_id,
            ServiceUpdateCreatureRequest {
                name: req.name,
                species: req.species,
                size: req.size,
                danger_level: req.danger_level,
                health_status: req.health_status,
            },
        )
        .await
        .map_err(error_response)?;

    Ok(Json(CreatureResponse::from(creature)))
}

/// Delete a creature
pub async fn delete_creature(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let creature_id = parse_creature_id(&id)?;

    state
        .creature_service
        .delete_creature(creature_id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
