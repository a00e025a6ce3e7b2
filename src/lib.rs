//! Holocron: REST API over a catalog of people and planets with per-user favorites.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::Config;
pub use db::{connect, ensure_database_exists};
pub use error::AppError;
pub use migration::apply_migrations;
pub use routes::{api_routes, common_routes_with_ready};
pub use state::AppState;
