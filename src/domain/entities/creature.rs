//! Creature entity - Individual animal records

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CreatureId, HealthStatus, ZoneId};

/// An individual creature housed in a zone
///
/// Every creature references exactly one existing zone. The zone reference is
/// set at creation and is not altered by updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    /// The zone housing this creature
    pub zone_id: ZoneId,
    pub name: String,
    pub species: String,
    /// Body size in meters
    pub size: f64,
    /// How dangerous the creature is, on a 1-10 scale
    pub danger_level: u8,
    pub health_status: HealthStatus,
}

impl Creature {
    pub fn new(
        zone_id: ZoneId,
        name: impl Into<String>,
        species: impl Into<String>,
        size: f64,
        danger_level: u8,
        health_status: impl Into<HealthStatus>,
    ) -> Self {
        Self {
            id: CreatureId::new(),
            zone_id,
            name: name.into(),
            species: species.into(),
            size,
            danger_level,
            health_status: health_status.into(),
        }
    }

    /// Whether deletion of this creature is blocked by critical health
    pub fn is_critical(&self) -> bool {
        self.health_status.is_critical()
    }
}
