use axum::{extract::State, Json};

use crate::error::AppError;
use crate::model::User;
use crate::service::UserService;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(Json(users))
}
