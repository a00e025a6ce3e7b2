use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::model::{Person, PersonPayload};
use crate::response::Msg;
use crate::service::PeopleService;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    let people = PeopleService::list(&state.pool).await?;
    Ok(Json(people))
}

pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Person>, AppError> {
    let person = PeopleService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Person not found".into()))?;
    Ok(Json(person))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<PersonPayload>,
) -> Result<(StatusCode, Json<Person>), AppError> {
    let new = payload.into_new()?;
    let person = PeopleService::create(&state.pool, new).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PersonPayload>,
) -> Result<Json<Person>, AppError> {
    let person = PeopleService::update(&state.pool, id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Person not found".into()))?;
    Ok(Json(person))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Msg>, AppError> {
    if !PeopleService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Person not found".into()));
    }
    Ok(Json(Msg::new("Person deleted")))
}
