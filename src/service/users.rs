use sqlx::PgPool;

use crate::error::AppError;
use crate::model::User;

pub struct UserService;

impl UserService {
    /// All users. The password hash column is deliberately not selected.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, last_name, email FROM users ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(users)
    }
}
