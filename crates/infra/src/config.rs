//! Process configuration, resolved from environment variables.
//!
//! Values may also come from a `.env` file in the working directory; real
//! environment variables take precedence over the file.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `APP_PORT` | listen port | `8080` |
//! | `STORE` | `postgres` or `memory` | `postgres` |
//! | `DATABASE_URL` | full connection URL, overrides the assembled one | — |
//! | `DB_CONNECTION` | URL scheme | `postgres` |
//! | `DB_USERNAME` | database user | required without `DATABASE_URL` |
//! | `DB_PASSWORD` | database password | empty |
//! | `DB_HOST` | `host[:port]` | `localhost` |
//! | `DB_DATABASE` | database name | required without `DATABASE_URL` |
//! | `DB_MAX_CONNECTIONS` | pool size | `10` |

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to read env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

/// Which `ProductStore` backs the service.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub store: StoreKind,
    /// Present whenever `store` is `Postgres`.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Startup entrypoint: `.env` (if present) layered under the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env_file(".env")
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Process environment first, then `path`. A missing file is not an error.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = read_env_file(path.as_ref())?;
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file.get(key).cloned()))
    }

    /// Resolve configuration through an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("APP_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "APP_PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let store_raw = get("STORE").map(|s| s.trim().to_lowercase());
        let store = match store_raw.as_deref() {
            None | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "STORE",
                    value: other.to_string(),
                    reason: "expected one of: postgres, memory".to_string(),
                });
            }
        };

        let database = match store {
            StoreKind::Memory => None,
            StoreKind::Postgres => Some(DatabaseConfig {
                url: database_url(&get)?,
                max_connections: match get("DB_MAX_CONNECTIONS") {
                    Some(raw) => raw.trim().parse::<u32>().map_err(|e| ConfigError::Invalid {
                        name: "DB_MAX_CONNECTIONS",
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?,
                    None => DEFAULT_MAX_CONNECTIONS,
                },
            }),
        };

        Ok(Self {
            port,
            store,
            database,
        })
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let env_file_error = |e: dotenvy::Error| ConfigError::EnvFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(HashMap::new()),
        Err(e) => return Err(env_file_error(e)),
    };

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(env_file_error)?;
        vars.insert(key, value);
    }
    Ok(vars)
}

fn database_url<G>(get: &G) -> Result<String, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    if let Some(url) = get("DATABASE_URL") {
        return Ok(url);
    }

    let scheme = get("DB_CONNECTION").unwrap_or_else(|| "postgres".to_string());
    if scheme != "postgres" && scheme != "postgresql" {
        return Err(ConfigError::Invalid {
            name: "DB_CONNECTION",
            value: scheme,
            reason: "only postgres is supported".to_string(),
        });
    }

    let user = get("DB_USERNAME").ok_or(ConfigError::Missing("DB_USERNAME"))?;
    let password = get("DB_PASSWORD").unwrap_or_default();
    let host = get("DB_HOST").unwrap_or_else(|| "localhost".to_string());
    let name = get("DB_DATABASE").ok_or(ConfigError::Missing("DB_DATABASE"))?;

    Ok(format!("{scheme}://{user}:{password}@{host}/{name}"))
}
