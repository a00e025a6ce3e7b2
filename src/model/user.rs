use serde::Serialize;
use sqlx::FromRow;

/// API representation of a user. The stored password hash has no field here,
/// so it can never appear in a response; queries must not select it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
}
