//! Configuration validation.

use super::Config;
use crate::error::{MigrateError, Result};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.geo.path.as_os_str().is_empty() {
        return Err(MigrateError::Config("geo.path is required".into()));
    }

    if config.pg.server.is_empty() {
        return Err(MigrateError::Config("pg.server is required".into()));
    }
    if config.pg.database.is_empty() {
        return Err(MigrateError::Config("pg.database is required".into()));
    }
    if config.pg.username.is_empty() {
        return Err(MigrateError::Config("pg.username is required".into()));
    }
    if config.pg.num_connections == 0 {
        return Err(MigrateError::Config(
            "pg.num_connections must be at least 1".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeoConfig, PgConfig};
    use std::path::PathBuf;

    fn valid_config() -> Config {
        Config {
            geo: GeoConfig {
                path: PathBuf::from("/var/lib/db4s/Geo-IP.sqlite"),
            },
            pg: PgConfig {
                database: "db4s".to_string(),
                num_connections: 5,
                port: 5432,
                password: "password".to_string(),
                server: "localhost".to_string(),
                ssl: false,
                username: "db4s".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config() {
        let config = valid_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_missing_geo_path() {
        let mut config = valid_config();
        config.geo.path = PathBuf::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_missing_server() {
        let mut config = valid_config();
        config.pg.server = "".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_missing_database() {
        let mut config = valid_config();
        config.pg.database = "".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_missing_username() {
        let mut config = valid_config();
        config.pg.username = "".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_pool_size() {
        let mut config = valid_config();
        config.pg.num_connections = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_pg_config_debug_redacts_password() {
        let mut config = valid_config();
        config.pg.password = "super_secret_password_123".to_string();
        let debug_output = format!("{:?}", config.pg);
        assert!(
            debug_output.contains("[REDACTED]"),
            "Debug output should contain [REDACTED]"
        );
        assert!(
            !debug_output.contains("super_secret_password_123"),
            "Debug output should not contain actual password value"
        );
    }
}
