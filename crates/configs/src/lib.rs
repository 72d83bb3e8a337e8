//! # configs
//!
//! Layered configuration for the forum API.
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. `config/default.{toml,yaml,json}` (optional)
//! 3. `config/local.{toml,yaml,json}` (optional, not committed)
//! 4. Environment variables, `FORUM` prefix, `__` separator
//!    (`FORUM__SERVER__PORT=8080`, `FORUM__DATABASE__URL=postgres://...`)
//!
//! `.env` is read into the process environment before anything else.

use std::collections::HashMap;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("missing required setting `{0}`")]
    Missing(&'static str),
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, ready for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    /// Process-local tables; everything is lost on restart.
    Memory,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    /// Required when `backend = "postgres"`.
    pub url: Option<SecretString>,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing key for access tokens.
    pub access_token_key: SecretString,
    pub access_token_age_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive; `RUST_LOG` still wins when set.
    pub filter: String,
    pub format: LogFormat,
}

impl AppConfig {
    /// Loads `.env`, the optional config files and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }

        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Self::environment(None))
            .build()?;

        Self::finish(config)
    }

    /// Defaults, then a TOML document, then an explicit environment map.
    /// Nothing is read from disk or from the process environment.
    pub fn from_sources(toml: &str, env: HashMap<String, String>) -> Result<Self, ConfigError> {
        let config = Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .add_source(Self::environment(Some(env)))
            .build()?;

        Self::finish(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("database.backend", "postgres")?
            .set_default("database.max_connections", 10)?
            .set_default("database.run_migrations", true)?
            .set_default("auth.access_token_age_secs", 3000)?
            .set_default("log.filter", "info")?
            .set_default("log.format", "pretty")?)
    }

    fn environment(source: Option<HashMap<String, String>>) -> Environment {
        Environment::with_prefix("FORUM").separator("__").try_parsing(true).source(source)
    }

    fn finish(config: Config) -> Result<Self, ConfigError> {
        let app: AppConfig = config.try_deserialize()?;

        if app.database.backend == StorageBackend::Postgres && app.database.url.is_none() {
            return Err(ConfigError::Missing("database.url"));
        }
        Ok(app)
    }
}
