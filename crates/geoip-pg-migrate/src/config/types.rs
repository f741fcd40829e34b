//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure, decoded from `status_updater.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source database (SQLite Geo-IP file) configuration.
    pub geo: GeoConfig,

    /// Destination database (PostgreSQL) configuration.
    pub pg: PgConfig,
}

/// Source database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoConfig {
    /// Path to the Geo-IP SQLite file.
    pub path: PathBuf,
}

/// Destination database (PostgreSQL) configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct PgConfig {
    /// Database name.
    pub database: String,

    /// Connection pool size.
    pub num_connections: usize,

    /// Database port (default: 5432).
    #[serde(default = "default_pg_port")]
    pub port: u16,

    /// Password.
    pub password: String,

    /// Database host.
    pub server: String,

    /// Negotiate TLS. Certificate verification is intentionally skipped
    /// when enabled; the server is assumed to be on a trusted network.
    #[serde(default)]
    pub ssl: bool,

    /// Username.
    pub username: String,
}

impl std::fmt::Debug for PgConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgConfig")
            .field("database", &self.database)
            .field("num_connections", &self.num_connections)
            .field("port", &self.port)
            .field("password", &"[REDACTED]")
            .field("server", &self.server)
            .field("ssl", &self.ssl)
            .field("username", &self.username)
            .finish()
    }
}

// Default value functions for serde
fn default_pg_port() -> u16 {
    5432
}
