use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppError;
use crate::model::FavoriteView;
use crate::response::Msg;
use crate::service::FavoriteService;
use crate::state::AppState;

/// GET /users/:id/favorites. 200 with an empty array for a user with none.
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<FavoriteView>>, AppError> {
    let favorites = FavoriteService::list_for_user(&state.pool, id).await?;
    Ok(Json(favorites))
}

/// 200 with the joined view of the new favorite, 400 if already present.
pub async fn add_planet(
    State(state): State<AppState>,
    Path((id_user, id_planet)): Path<(i32, i32)>,
) -> Result<Json<FavoriteView>, AppError> {
    let favorite = FavoriteService::add_planet(&state.pool, id_user, id_planet).await?;
    Ok(Json(favorite))
}

/// 200 with the joined view of the new favorite, 400 if already present.
pub async fn add_person(
    State(state): State<AppState>,
    Path((id_user, id_people)): Path<(i32, i32)>,
) -> Result<Json<FavoriteView>, AppError> {
    let favorite = FavoriteService::add_person(&state.pool, id_user, id_people).await?;
    Ok(Json(favorite))
}

pub async fn remove_planet(
    State(state): State<AppState>,
    Path((id_user, id_planet)): Path<(i32, i32)>,
) -> Result<Json<Msg>, AppError> {
    if !FavoriteService::remove_planet(&state.pool, id_user, id_planet).await? {
        return Err(AppError::NotFound("Favorite planet not found".into()));
    }
    Ok(Json(Msg::new("Favorite planet deleted")))
}

pub async fn remove_person(
    State(state): State<AppState>,
    Path((id_user, id_people)): Path<(i32, i32)>,
) -> Result<Json<Msg>, AppError> {
    if !FavoriteService::remove_person(&state.pool, id_user, id_people).await? {
        return Err(AppError::NotFound("Favorite person not found".into()));
    }
    Ok(Json(Msg::new("Favorite person deleted")))
}
