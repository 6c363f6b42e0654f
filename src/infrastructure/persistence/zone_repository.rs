//! SQLite adapter for the zone repository port

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::application::ports::outbound::{RepositoryError, ZoneRepositoryPort};
use crate::domain::entities::Zone;
use crate::domain::value_objects::ZoneId;

pub struct SqliteZoneRepository {
    pool: SqlitePool,
}

impl SqliteZoneRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        // Create table if not exists
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS zones (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                capacity INTEGER NOT NULL
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

fn row_to_zone(row: (String, String, String, i64)) -> Result<Zone, RepositoryError> {
    let (id, name, description, capacity) = row;
    let uuid = Uuid::parse_str(&id)
        .map_err(|e| RepositoryError::Corrupt(format!("zone id '{id}': {e}")))?;
    let capacity = u32::try_from(capacity)
        .map_err(|_| RepositoryError::Corrupt(format!("zone capacity {capacity}")))?;

    Ok(Zone {
        id: ZoneId::from_uuid(uuid),
        name,
        description,
        capacity,
    })
}

#[async_trait]
impl ZoneRepositoryPort for SqliteZoneRepository {
    async fn create(&self, zone: &Zone) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO zones (id, name, description, capacity) VALUES (?, ?, ?, ?)")
            .bind(zone.id.to_string())
            .bind(&zone.name)
            .bind(&zone.description)
            .bind(zone.capacity as i64)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    async fn get(&self, id: ZoneId) -> Result<Option<Zone>, RepositoryError> {
        let row: Option<(String, String, String, i64)> =
            sqlx::query_as("SELECT id, name, description, capacity FROM zones WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(row_to_zone).transpose()
    }

    async fn list(&self) -> Result<Vec<Zone>, RepositoryError> {
        let rows: Vec<(String, String, String, i64)> =
            sqlx::query_as("SELECT id, name, description, capacity FROM zones")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(row_to_zone).collect()
    }

    async fn update(&self, zone: &Zone) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE zones SET name = ?, description = ?, capacity = ? WHERE id = ?")
            .bind(&zone.name)
            .bind(&zone.description)
            .bind(zone.capacity as i64)
            .bind(zone.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, id: ZoneId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM zones WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }
}
