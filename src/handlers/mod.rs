//! Request handlers: parse path/body, call one service, shape the response.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;
