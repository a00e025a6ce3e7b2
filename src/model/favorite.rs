use serde::Serialize;
use sqlx::FromRow;

/// A favorites row as stored: exactly one of id_planet / id_people is set per
/// row by construction (the insert paths only ever set one).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Favorite {
    pub id: i32,
    pub id_user: i32,
    pub id_planet: Option<i32>,
    pub id_people: Option<i32>,
}

/// Listing representation: the joined display names. All three are nullable;
/// a favorite of a since-deleted planet or person renders a null name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FavoriteView {
    pub id: i32,
    pub id_user: i32,
    pub user_name: Option<String>,
    pub planet_name: Option<String>,
    pub people_name: Option<String>,
}
