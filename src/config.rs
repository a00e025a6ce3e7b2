//! Environment-based configuration: DATABASE_URL, PORT, DEBUG.

use std::env;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/holocron";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Lowers the default log filter to debug when set.
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let debug = env::var("DEBUG")
            .map(|v| truthy(&v))
            .unwrap_or(false);
        Self {
            database_url,
            port,
            debug,
        }
    }
}

fn truthy(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
