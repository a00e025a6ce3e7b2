//! Schema DDL applied on boot. Idempotent; tables are created in foreign-key order.

use sqlx::PgPool;

use crate::error::AppError;

const SCHEMA_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS planets (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        gravity INTEGER NOT NULL,
        terrain TEXT NOT NULL,
        climate TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS people (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        height DOUBLE PRECISION NOT NULL,
        eye_color TEXT,
        mass INTEGER NOT NULL
    )
    "#,
    // No uniqueness constraint on (id_user, id_planet) / (id_user, id_people):
    // duplicates are rejected by an application-level pre-check only. No cascade
    // from planets/people either; a favorite of a deleted row renders a null name.
    r#"
    CREATE TABLE IF NOT EXISTS favorites (
        id SERIAL PRIMARY KEY,
        id_user INTEGER NOT NULL REFERENCES users (id),
        id_planet INTEGER REFERENCES planets (id),
        id_people INTEGER REFERENCES people (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS favorites_id_user_idx ON favorites (id_user)",
    "CREATE INDEX IF NOT EXISTS favorites_id_planet_idx ON favorites (id_planet)",
    "CREATE INDEX IF NOT EXISTS favorites_id_people_idx ON favorites (id_people)",
];

/// Create the schema if it does not exist yet.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for ddl in SCHEMA_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
