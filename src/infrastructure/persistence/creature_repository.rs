//! SQLite adapter for the creature repository port

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::application::ports::outbound::{CreatureRepositoryPort, RepositoryError};
use crate::domain::entities::Creature;
use crate::domain::value_objects::{CreatureId, ZoneId};

pub struct SqliteCreatureRepository {
    pool: SqlitePool,
}

impl SqliteCreatureRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        // Referential checks run at the service layer; the REFERENCES clause
        // documents the relationship in the schema.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS creatures (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                species TEXT NOT NULL,
                size REAL NOT NULL,
                danger_level INTEGER NOT NULL,
                health_status TEXT NOT NULL,
                zone_id TEXT NOT NULL REFERENCES zones(id)
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

type CreatureRow = (String, String, String, f64, i64, String, String);

const SELECT_COLUMNS: &str = "id, name, species, size, danger_level, health_status, zone_id";

fn row_to_creature(row: CreatureRow) -> Result<Creature, RepositoryError> {
    let (id, name, species, size, danger_level, health_status, zone_id) = row;
    let uuid = Uuid::parse_str(&id)
        .map_err(|e| RepositoryError::Corrupt(format!("creature id '{id}': {e}")))?;
    let zone_uuid = Uuid::parse_str(&zone_id)
        .map_err(|e| RepositoryError::Corrupt(format!("creature zone id '{zone_id}': {e}")))?;
    let danger_level = u8::try_from(danger_level)
        .map_err(|_| RepositoryError::Corrupt(format!("creature danger level {danger_level}")))?;

    Ok(Creature {
        id: CreatureId::from_uuid(uuid),
        zone_id: ZoneId::from_uuid(zone_uuid),
        name,
        species,
        size,
        danger_level,
        health_status: health_status.into(),
    })
}

#[async_trait]
impl CreatureRepositoryPort for SqliteCreatureRepository {
    async fn create(&self, creature: &Creature) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO creatures (id, name, species, size, danger_level, health_status, zone_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(creature.id.to_string())
        .bind(&creature.name)
        .bind(&creature.species)
        .bind(creature.size)
        .bind(creature.danger_level as i64)
        .bind(creature.health_status.as_str())
        .bind(creature.zone_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepositoryError> {
        let row: Option<CreatureRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM creatures WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(row_to_creature).transpose()
    }

    async fn list(&self) -> Result<Vec<Creature>, RepositoryError> {
        let rows: Vec<CreatureRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM creatures"))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(row_to_creature).collect()
    }

    async fn update(&self, creature: &Creature) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE creatures SET name = ?, species = ?, size = ?, danger_level = ?, \
             health_status = ? WHERE id = ?",
        )
        .bind(&creature.name)
        .bind(&creature.species)
        .bind(creature.size)
        .bind(creature.danger_level as i64)
        .bind(creature.health_status.as_str())
        .bind(creature.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, id: CreatureId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM creatures WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    async fn list_by_zone(&self, zone_id: ZoneId) -> Result<Vec<Creature>, RepositoryError> {
        let rows: Vec<CreatureRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM creatures WHERE zone_id = ?"
        ))
        .bind(zone_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(row_to_creature).collect()
    }

    async fn count_by_zone(&self, zone_id: ZoneId) -> Result<usize, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM creatures WHERE zone_id = ?")
            .bind(zone_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(count as usize)
    }
}
