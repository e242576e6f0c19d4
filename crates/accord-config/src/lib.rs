//! # accord-config
//!
//! Layered configuration loading for Accord using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ACCORD_*` prefix, `__` as separator)
//! 2. Project-level `.accord/config.toml`
//! 3. User-level `~/.config/accord/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ACCORD_DATABASE__PATH` -> `database.path`,
//! `ACCORD_SERVER__PORT` -> `server.port`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use accord_config::AccordConfig;
//!
//! let config = AccordConfig::load_with_dotenv().expect("config");
//! println!("listening on {}", config.server.bind_addr());
//! ```

mod api;
mod client;
mod database;
mod error;
mod server;

pub use api::ApiConfig;
pub use client::ClientConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AccordConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

impl AccordConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and callers can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".accord/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ACCORD_").split("__"))
    }

    /// Reject combinations figment cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.max_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.max_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.api.default_limit > self.api.max_limit {
            return Err(ConfigError::InvalidValue {
                field: "api.default_limit".into(),
                reason: format!(
                    "{} exceeds api.max_limit ({})",
                    self.api.default_limit, self.api.max_limit
                ),
            });
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".into(),
                reason: "must be a fixed port".into(),
            });
        }
        if self.database.path.is_empty() && !self.database.is_remote() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "required when no remote database is configured".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("accord").join("config.toml"))
    }
}
