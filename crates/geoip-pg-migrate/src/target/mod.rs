//! Destination connection pool for PostgreSQL.
//!
//! Uses deadpool-postgres. Only the single connection bound to the migration
//! transaction is actually used; the pool exists because its size is an
//! operator-facing setting.

mod tls;

use std::time::Duration;

use deadpool_postgres::{Manager, ManagerConfig, Object, Pool, RecyclingMethod};
use tracing::{info, warn};

use crate::config::PgConfig;
use crate::error::{MigrateError, Result};

/// Connection establishment timeout.
const POOL_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Destination connection pool.
pub struct PgPool {
    pool: Pool,
}

impl PgPool {
    /// Create a pool sized per configuration and probe one connection.
    pub async fn connect(config: &PgConfig) -> Result<Self> {
        let mut pg_config = tokio_postgres::Config::new();
        pg_config.host(&config.server);
        pg_config.port(config.port);
        pg_config.dbname(&config.database);
        pg_config.user(&config.username);
        pg_config.password(&config.password);
        pg_config.keepalives(true);
        pg_config.connect_timeout(POOL_CONNECTION_TIMEOUT);

        let mgr_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };

        let pool = if config.ssl {
            warn!(
                "pg.ssl is set: TLS enabled but the server certificate is NOT verified \
                 (trusted-network mode)"
            );
            let mgr = Manager::from_config(pg_config, tls::permissive_connector(), mgr_config);
            Pool::builder(mgr)
                .max_size(config.num_connections)
                .build()
                .map_err(|e| MigrateError::pool(e, "creating PostgreSQL pool"))?
        } else {
            warn!("PostgreSQL TLS is disabled. Credentials will be transmitted in plaintext.");
            let mgr = Manager::from_config(pg_config, tokio_postgres::NoTls, mgr_config);
            Pool::builder(mgr)
                .max_size(config.num_connections)
                .build()
                .map_err(|e| MigrateError::pool(e, "creating PostgreSQL pool"))?
        };

        // Fail at startup rather than mid-transaction if the server is
        // unreachable or the credentials are wrong.
        let client = pool
            .get()
            .await
            .map_err(|e| MigrateError::pool(e, "establishing PostgreSQL connection"))?;
        client.simple_query("SELECT 1").await?;

        info!(
            "Connected to PostgreSQL server: {}:{}/{}",
            config.server, config.port, config.database
        );

        Ok(Self { pool })
    }

    /// Check out a connection from the pool.
    pub async fn client(&self) -> Result<Object> {
        self.pool
            .get()
            .await
            .map_err(|e| MigrateError::pool(e, "acquiring PostgreSQL connection"))
    }
}
