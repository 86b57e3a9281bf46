//! Environment-driven server configuration.
//!
//! # Responsibility
//! - Resolve the store path, listen port, and logging options from the
//!   process environment.
//!
//! # Invariants
//! - `TODOS_DB` is required; the server refuses to start without a store
//!   location.
//! - Defaults never override an explicitly supplied value.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use todolist_core::default_log_level;

pub const DEFAULT_PORT: u16 = 5000;

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite database path (the store "connection string").
    pub db_path: PathBuf,
    /// HTTP listen port.
    pub port: u16,
    /// Log level passed to the core logging bootstrap.
    pub log_level: String,
    /// Optional absolute directory for rolling file logs; stderr when unset.
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingDbPath,
    InvalidPort(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDbPath => write!(f, "TODOS_DB is not set; supply a store path"),
            Self::InvalidPort(raw) => write!(f, "PORT value `{raw}` is not a valid port number"),
        }
    }
}

impl Error for ConfigError {}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// `.env` loading is the caller's concern; this function only reads
    /// already-present variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_path = lookup("TODOS_DB")
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingDbPath)?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let log_level =
            lookup("TODOS_LOG_LEVEL").unwrap_or_else(|| default_log_level().to_string());
        let log_dir = lookup("TODOS_LOG_DIR").map(PathBuf::from);

        Ok(Self {
            db_path,
            port,
            log_level,
            log_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ServerConfig, DEFAULT_PORT};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key| map.get(key).map(|value| (*value).to_string())
    }

    #[test]
    fn db_path_is_required() {
        let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDbPath));
    }

    #[test]
    fn defaults_apply_when_only_db_path_is_set() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("TODOS_DB", "/tmp/todos.db")])).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/todos.db"));
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("TODOS_DB", "/data/todos.db"),
            ("PORT", "8080"),
            ("TODOS_LOG_LEVEL", "warn"),
            ("TODOS_LOG_DIR", "/var/log/todolist"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/todolist")));
    }

    #[test]
    fn malformed_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[
            ("TODOS_DB", "/tmp/todos.db"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }
}
