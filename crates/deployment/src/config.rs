//! Environment-driven configuration.
//!
//! Connection parameters use the lowercase variable names `client`, `host`, `port`,
//! `user`, `password` and `database`. `DATABASE_URL` overrides all of them.

use std::env;

use thiserror::Error;

pub const DEFAULT_SERVER_PORT: u16 = 3001;
pub const DEFAULT_CLIENT: &str = "sqlite";
pub const DEFAULT_DATABASE: &str = "task_tracker.db";

const SQLITE_CLIENTS: &[&str] = &["sqlite", "sqlite3", "better-sqlite3"];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unsupported database client {0:?}; expected one of sqlite, sqlite3, better-sqlite3")]
    UnsupportedClient(String),
    #[error("invalid {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub client: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: String,
    pub url_override: Option<String>,
}

impl DatabaseConfig {
    /// Connection URL for the configured backend.
    pub fn url(&self) -> String {
        if let Some(url) = &self.url_override {
            return url.clone();
        }
        if self.database == ":memory:" {
            return "sqlite::memory:".to_string();
        }
        format!("sqlite://{}", self.database)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentConfig {
    pub database: DatabaseConfig,
    pub server_port: u16,
}

impl DeploymentConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let client = non_empty("client").unwrap_or_else(|| DEFAULT_CLIENT.to_string());
        let url_override = non_empty("DATABASE_URL");
        if url_override.is_none() && !SQLITE_CLIENTS.contains(&client.as_str()) {
            return Err(ConfigError::UnsupportedClient(client));
        }

        let port = non_empty("port")
            .map(|v| parse_port("port", v))
            .transpose()?;
        let server_port = non_empty("SERVER_PORT")
            .map(|v| parse_port("SERVER_PORT", v))
            .transpose()?
            .unwrap_or(DEFAULT_SERVER_PORT);

        Ok(Self {
            database: DatabaseConfig {
                client,
                host: non_empty("host"),
                port,
                user: non_empty("user"),
                password: non_empty("password"),
                database: non_empty("database").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
                url_override,
            },
            server_port,
        })
    }
}

fn parse_port(name: &'static str, value: String) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}
