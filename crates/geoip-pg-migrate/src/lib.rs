//! # geoip-pg-migrate
//!
//! One-shot migration of the Geo-IP IPv4 country lookup table from an
//! embedded SQLite database into PostgreSQL, so that downstream bulk country
//! lookups can run server-side.
//!
//! The pipeline is strictly sequential: load config, open the source
//! read-only, connect the destination pool, then perform the whole copy
//! (drop, create, row copy, index, count verification) inside a single
//! transaction that commits only after verification succeeds.
//!
//! ## Example
//!
//! ```rust,no_run
//! use geoip_pg_migrate::{migrate, Config, PgPool, SourceDb};
//!
//! #[tokio::main]
//! async fn main() -> geoip_pg_migrate::Result<()> {
//!     let config = Config::load(Config::locate()?)?;
//!     let source = SourceDb::open(&config.geo.path)?;
//!     let target = PgPool::connect(&config.pg).await?;
//!     let report = migrate::run(&source, &target).await?;
//!     println!("Copied {} rows", report.rows_copied);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod migrate;
pub mod source;
pub mod target;

// Re-exports for convenient access
pub use config::{Config, GeoConfig, PgConfig};
pub use error::{MigrateError, Result};
pub use migrate::MigrationReport;
pub use source::{LookupRow, SourceDb};
pub use target::PgPool;
