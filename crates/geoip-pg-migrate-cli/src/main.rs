//! geoip-pg-migrate CLI - Geo-IP country lookup table migration.
//!
//! Takes no arguments. The configuration file is resolved from the
//! `CONFIG_FILE` environment variable, falling back to
//! `~/.db4s/status_updater.toml`.

use geoip_pg_migrate::{migrate, Config, MigrateError, PgPool, SourceDb};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), MigrateError> {
    setup_logging();

    let config_path = Config::locate()?;
    let config = Config::load(&config_path)?;
    info!("Loaded configuration from {}", config_path.display());

    let source = SourceDb::open(&config.geo.path)?;
    println!("Connected to Geo-IP database: {}", config.geo.path.display());

    let target = PgPool::connect(&config.pg).await?;
    println!("Connected to PostgreSQL server: {}", config.pg.server);

    let report = migrate::run(&source, &target).await?;

    println!("\nMigration completed!");
    println!("  Rows copied: {}", report.rows_copied);
    println!("  Source rows: {}", report.source_rows);
    println!("  Destination rows: {}", report.target_rows);
    println!("  Duration: {:.2}s", report.duration_seconds);

    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
