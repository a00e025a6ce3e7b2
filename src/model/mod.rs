//! Typed rows and request payloads, one module per entity.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;

pub use favorite::{Favorite, FavoriteView};
pub use people::{NewPerson, Person, PersonPayload};
pub use planet::{NewPlanet, Planet, PlanetPayload};
pub use user::User;
