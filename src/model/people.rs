use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub height: f64,
    pub eye_color: Option<String>,
    pub mass: i32,
}

/// Create/update body. Create requires name, height, and mass; eye_color is
/// optional in the schema itself. Update fills omissions from the current row.
#[derive(Debug, Default, Deserialize)]
pub struct PersonPayload {
    pub name: Option<String>,
    pub height: Option<f64>,
    pub eye_color: Option<String>,
    pub mass: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewPerson {
    pub name: String,
    pub height: f64,
    pub eye_color: Option<String>,
    pub mass: i32,
}

impl PersonPayload {
    pub fn into_new(self) -> Result<NewPerson, AppError> {
        match (self.name, self.height, self.mass) {
            (Some(name), Some(height), Some(mass)) => Ok(NewPerson {
                name,
                height,
                eye_color: self.eye_color,
                mass,
            }),
            _ => Err(AppError::Validation(
                "Name, height, and mass are required".into(),
            )),
        }
    }

    /// PUT semantics: omitted fields keep the stored values. An omitted
    /// eye_color keeps the current one; there is no way to null it out here.
    pub fn merged_with(self, current: &Person) -> NewPerson {
        NewPerson {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            height: self.height.unwrap_or(current.height),
            eye_color: self.eye_color.or_else(|| current.eye_color.clone()),
            mass: self.mass.unwrap_or(current.mass),
        }
    }
}
