//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{NotFoundPolicy, ShellConfig};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} required")]
    Missing(&'static str),
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub shell: ShellConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `SHELL_NOT_FOUND`: `blank` (default) or `page`
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is absent or any optional value is
    /// present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let var = |key: &str| std::env::var(key).ok();
        Self::from_lookup(var)
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = parse_port(lookup("PORT").as_deref())?;
        let db_max_connections = parse_max_connections(lookup("DB_MAX_CONNECTIONS").as_deref())?;
        let not_found = parse_not_found(lookup("SHELL_NOT_FOUND").as_deref())?;

        Ok(Self { database_url, port, db_max_connections, shell: ShellConfig { not_found } })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(v) => v
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: v.to_owned() }),
    }
}

fn parse_max_connections(raw: Option<&str>) -> Result<u32, ConfigError> {
    match raw {
        None => Ok(DEFAULT_DB_MAX_CONNECTIONS),
        Some(v) => match v.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", value: v.to_owned() }),
        },
    }
}

fn parse_not_found(raw: Option<&str>) -> Result<NotFoundPolicy, ConfigError> {
    match raw {
        None => Ok(NotFoundPolicy::default()),
        Some(v) => {
            NotFoundPolicy::parse(v).ok_or_else(|| ConfigError::Invalid { var: "SHELL_NOT_FOUND", value: v.to_owned() })
        }
    }
}
