//! Favorites: a join row linking a user to a liked planet or person.
//!
//! Duplicate protection is a check-then-insert with no transaction or unique
//! constraint, so two identical concurrent requests can both insert. Accepted.

use sqlx::PgPool;

use crate::error::AppError;
use crate::model::{Favorite, FavoriteView};

const FAVORITE_COLUMNS: &str = "id, id_user, id_planet, id_people";

/// Joined representation: one row per favorite with display names resolved.
/// LEFT JOINs so rows referencing deleted planets/people still come back
/// (null name).
const FAVORITE_VIEW_SELECT: &str = r#"
    SELECT f.id, f.id_user, u.name AS user_name,
           pl.name AS planet_name, pe.name AS people_name
    FROM favorites f
    LEFT JOIN users u ON u.id = f.id_user
    LEFT JOIN planets pl ON pl.id = f.id_planet
    LEFT JOIN people pe ON pe.id = f.id_people
"#;

pub struct FavoriteService;

impl FavoriteService {
    /// All favorites of one user. 200 with an empty list is fine.
    pub async fn list_for_user(pool: &PgPool, id_user: i32) -> Result<Vec<FavoriteView>, AppError> {
        let favorites = sqlx::query_as::<_, FavoriteView>(&format!(
            "{FAVORITE_VIEW_SELECT} WHERE f.id_user = $1 ORDER BY f.id",
        ))
        .bind(id_user)
        .fetch_all(pool)
        .await?;
        Ok(favorites)
    }

    /// One favorite by primary key, in the joined representation.
    async fn view(pool: &PgPool, id: i32) -> Result<FavoriteView, AppError> {
        let favorite =
            sqlx::query_as::<_, FavoriteView>(&format!("{FAVORITE_VIEW_SELECT} WHERE f.id = $1"))
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(favorite)
    }

    pub async fn add_planet(
        pool: &PgPool,
        id_user: i32,
        id_planet: i32,
    ) -> Result<FavoriteView, AppError> {
        let existing = sqlx::query_as::<_, Favorite>(&format!(
            "SELECT {FAVORITE_COLUMNS} FROM favorites WHERE id_user = $1 AND id_planet = $2",
        ))
        .bind(id_user)
        .bind(id_planet)
        .fetch_optional(pool)
        .await?;
        if existing.is_some() {
            return Err(AppError::Duplicate("Planet is already a favorite".into()));
        }
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO favorites (id_user, id_planet) VALUES ($1, $2) RETURNING id",
        )
        .bind(id_user)
        .bind(id_planet)
        .fetch_one(pool)
        .await?;
        Self::view(pool, id).await
    }

    pub async fn add_person(
        pool: &PgPool,
        id_user: i32,
        id_people: i32,
    ) -> Result<FavoriteView, AppError> {
        let existing = sqlx::query_as::<_, Favorite>(&format!(
            "SELECT {FAVORITE_COLUMNS} FROM favorites WHERE id_user = $1 AND id_people = $2",
        ))
        .bind(id_user)
        .bind(id_people)
        .fetch_optional(pool)
        .await?;
        if existing.is_some() {
            return Err(AppError::Duplicate("Person is already a favorite".into()));
        }
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO favorites (id_user, id_people) VALUES ($1, $2) RETURNING id",
        )
        .bind(id_user)
        .bind(id_people)
        .fetch_one(pool)
        .await?;
        Self::view(pool, id).await
    }

    /// Returns false if no such favorite exists.
    pub async fn remove_planet(
        pool: &PgPool,
        id_user: i32,
        id_planet: i32,
    ) -> Result<bool, AppError> {
        let deleted = sqlx::query("DELETE FROM favorites WHERE id_user = $1 AND id_planet = $2")
            .bind(id_user)
            .bind(id_planet)
            .execute(pool)
            .await?;
        Ok(deleted.rows_affected() > 0)
    }

    /// Returns false if no such favorite exists.
    pub async fn remove_person(
        pool: &PgPool,
        id_user: i32,
        id_people: i32,
    ) -> Result<bool, AppError> {
        let deleted = sqlx::query("DELETE FROM favorites WHERE id_user = $1 AND id_people = $2")
            .bind(id_user)
            .bind(id_people)
            .execute(pool)
            .await?;
        Ok(deleted.rows_affected() > 0)
    }
}
