//! The CRUD surface: users (read-only), people, planets, favorites.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{favorites, people, planets, users};
use crate::state::AppState;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list))
        .route("/users/:id/favorites", get(favorites::list_for_user))
        .route(
            "/users/:id/favorite/planet/:planet_id",
            post(favorites::add_planet).delete(favorites::remove_planet),
        )
        .route(
            "/users/:id/favorite/people/:people_id",
            post(favorites::add_person).delete(favorites::remove_person),
        )
        .route("/people", get(people::list).post(people::create))
        .route(
            "/people/:id",
            get(people::find).put(people::update).delete(people::remove),
        )
        .route("/planets", get(planets::list).post(planets::create))
        .route(
            "/planets/:id",
            get(planets::find)
                .put(planets::update)
                .delete(planets::remove),
        )
        .with_state(state)
}
