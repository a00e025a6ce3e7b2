use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub gravity: i32,
    pub terrain: String,
    pub climate: String,
}

/// Create/update body. Every field is optional at the wire level; create
/// requires all of them, update fills omissions from the current row.
#[derive(Debug, Default, Deserialize)]
pub struct PlanetPayload {
    pub name: Option<String>,
    pub gravity: Option<i32>,
    pub terrain: Option<String>,
    pub climate: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub gravity: i32,
    pub terrain: String,
    pub climate: String,
}

impl PlanetPayload {
    pub fn into_new(self) -> Result<NewPlanet, AppError> {
        match (self.name, self.gravity, self.terrain, self.climate) {
            (Some(name), Some(gravity), Some(terrain), Some(climate)) => Ok(NewPlanet {
                name,
                gravity,
                terrain,
                climate,
            }),
            _ => Err(AppError::Validation(
                "Name, gravity, terrain, and climate are required".into(),
            )),
        }
    }

    /// PUT semantics: omitted fields keep the stored values.
    pub fn merged_with(self, current: &Planet) -> NewPlanet {
        NewPlanet {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            gravity: self.gravity.unwrap_or(current.gravity),
            terrain: self.terrain.unwrap_or_else(|| current.terrain.clone()),
            climate: self.climate.unwrap_or_else(|| current.climate.clone()),
        }
    }
}
