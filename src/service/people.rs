use sqlx::PgPool;

use crate::error::AppError;
use crate::model::{NewPerson, Person, PersonPayload};

pub struct PeopleService;

impl PeopleService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, AppError> {
        let people = sqlx::query_as::<_, Person>(
            "SELECT id, name, height, eye_color, mass FROM people ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(people)
    }

    pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Person>, AppError> {
        let person = sqlx::query_as::<_, Person>(
            "SELECT id, name, height, eye_color, mass FROM people WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(person)
    }

    pub async fn create(pool: &PgPool, new: NewPerson) -> Result<Person, AppError> {
        tracing::debug!(name = %new.name, "creating person");
        let person = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO people (name, height, eye_color, mass)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, height, eye_color, mass
            "#,
        )
        .bind(new.name)
        .bind(new.height)
        .bind(new.eye_color)
        .bind(new.mass)
        .fetch_one(pool)
        .await?;
        Ok(person)
    }

    /// Partial update: omitted fields keep the stored values. None if the id
    /// does not exist.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        payload: PersonPayload,
    ) -> Result<Option<Person>, AppError> {
        let Some(current) = Self::find(pool, id).await? else {
            return Ok(None);
        };
        let merged = payload.merged_with(&current);
        let person = sqlx::query_as::<_, Person>(
            r#"
            UPDATE people SET name = $2, height = $3, eye_color = $4, mass = $5
            WHERE id = $1
            RETURNING id, name, height, eye_color, mass
            "#,
        )
        .bind(id)
        .bind(merged.name)
        .bind(merged.height)
        .bind(merged.eye_color)
        .bind(merged.mass)
        .fetch_one(pool)
        .await?;
        Ok(Some(person))
    }

    /// Returns false if the id does not exist.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        tracing::debug!(id, "deleting person");
        let deleted = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(deleted.rows_affected() > 0)
    }
}
