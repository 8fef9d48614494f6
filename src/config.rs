//! Environment-driven configuration.

use std::env;

use tracing::{info, warn};

const DEFAULT_DATABASE_NAME: &str = "restaurant";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Mongo connection string. Absent means the store runs degraded.
    pub database_url: Option<String>,
    pub database_name: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Read `DATABASE_URL`, `DATABASE_NAME` and `PORT`, logging every default
    /// that kicks in. Never fails: a bad `PORT` falls back to the default.
    pub fn load() -> Self {
        let database_url = non_empty_var("DATABASE_URL");
        if database_url.is_none() {
            warn!("DATABASE_URL not set, store operations will be degraded");
        }

        let database_name = non_empty_var("DATABASE_NAME").unwrap_or_else(|| {
            info!("DATABASE_NAME not set, using default: {DEFAULT_DATABASE_NAME}");
            DEFAULT_DATABASE_NAME.to_string()
        });

        let port = match non_empty_var("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warn!("Invalid PORT value {raw:?}: {err}, using default {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            database_url,
            database_name,
            port,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
