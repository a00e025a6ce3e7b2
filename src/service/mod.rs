//! Query execution against PostgreSQL, one service per entity.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;

pub use favorites::FavoriteService;
pub use people::PeopleService;
pub use planets::PlanetService;
pub use users::UserService;
