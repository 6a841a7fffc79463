use std::env;

use db::DatabaseConfig;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Settings read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            database: DatabaseConfig::from_lookup(lookup),
        }
    }
}
