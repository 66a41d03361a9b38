use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

/// Which `TodoRepository` implementation backs the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Hand-written SQL; ids are assigned as `MAX(id) + 1`.
    #[default]
    Sql,
    /// sea-orm entity; ids come from SQLite's rowid auto-increment.
    Orm,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Sql => f.write_str("sql"),
            StorageBackend::Orm => f.write_str("orm"),
        }
    }
}

/// Relational store settings (see `storage` table in config.toml).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Database URL for SQLite.
    /// TOML: `storage.database_url`. Default: `sqlite://todo.db`.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// TOML: `storage.backend` (`"sql"` or `"orm"`). Default: `sql`.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Upper bound on pooled SQLite connections.
    /// TOML: `storage.max_connections`. Default: `5`.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// TOML: `storage.busy_timeout_secs`. Default: `5`.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

impl StorageConfig {
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_secs)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            backend: StorageBackend::default(),
            max_connections: default_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://todo.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_busy_timeout_secs() -> u64 {
    5
}
