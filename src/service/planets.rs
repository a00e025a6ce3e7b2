use sqlx::PgPool;

use crate::error::AppError;
use crate::model::{NewPlanet, Planet, PlanetPayload};

pub struct PlanetService;

impl PlanetService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Planet>, AppError> {
        let planets = sqlx::query_as::<_, Planet>(
            "SELECT id, name, gravity, terrain, climate FROM planets ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(planets)
    }

    pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Planet>, AppError> {
        let planet = sqlx::query_as::<_, Planet>(
            "SELECT id, name, gravity, terrain, climate FROM planets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(planet)
    }

    pub async fn create(pool: &PgPool, new: NewPlanet) -> Result<Planet, AppError> {
        tracing::debug!(name = %new.name, "creating planet");
        let planet = sqlx::query_as::<_, Planet>(
            r#"
            INSERT INTO planets (name, gravity, terrain, climate)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, gravity, terrain, climate
            "#,
        )
        .bind(new.name)
        .bind(new.gravity)
        .bind(new.terrain)
        .bind(new.climate)
        .fetch_one(pool)
        .await?;
        Ok(planet)
    }

    /// Partial update: omitted fields keep the stored values. None if the id
    /// does not exist.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        payload: PlanetPayload,
    ) -> Result<Option<Planet>, AppError> {
        let Some(current) = Self::find(pool, id).await? else {
            return Ok(None);
        };
        let merged = payload.merged_with(&current);
        let planet = sqlx::query_as::<_, Planet>(
            r#"
            UPDATE planets SET name = $2, gravity = $3, terrain = $4, climate = $5
            WHERE id = $1
            RETURNING id, name, gravity, terrain, climate
            "#,
        )
        .bind(id)
        .bind(merged.name)
        .bind(merged.gravity)
        .bind(merged.terrain)
        .bind(merged.climate)
        .fetch_one(pool)
        .await?;
        Ok(Some(planet))
    }

    /// Returns false if the id does not exist.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        tracing::debug!(id, "deleting planet");
        let deleted = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(deleted.rows_affected() > 0)
    }
}
