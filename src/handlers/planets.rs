use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::model::{Planet, PlanetPayload};
use crate::response::Msg;
use crate::service::PlanetService;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Planet>>, AppError> {
    let planets = PlanetService::list(&state.pool).await?;
    Ok(Json(planets))
}

pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Planet>, AppError> {
    let planet = PlanetService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))?;
    Ok(Json(planet))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<PlanetPayload>,
) -> Result<(StatusCode, Json<Planet>), AppError> {
    let new = payload.into_new()?;
    let planet = PlanetService::create(&state.pool, new).await?;
    Ok((StatusCode::CREATED, Json(planet)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PlanetPayload>,
) -> Result<Json<Planet>, AppError> {
    let planet = PlanetService::update(&state.pool, id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))?;
    Ok(Json(planet))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Msg>, AppError> {
    if !PlanetService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Planet not found".into()));
    }
    Ok(Json(Msg::new("Planet deleted")))
}
