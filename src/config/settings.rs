//! Environment-backed application settings.

use std::env;

use super::constants::{DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Read settings from the process environment, loading `.env`
    /// first if one exists. Missing variables fall back to the
    /// development defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            server_host: var_or("SERVER_HOST", DEFAULT_SERVER_HOST),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The database URL may carry credentials; keep it out of logs.
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}
