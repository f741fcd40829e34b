//! The migration transaction: drop, create, copy, index, verify, commit.

use std::time::Instant;

use deadpool_postgres::Transaction;
use tracing::{info, warn};

use crate::error::{MigrateError, Result};
use crate::source::{LookupRow, SourceDb};
use crate::target::PgPool;

const DROP_TABLE: &str = "DROP TABLE IF EXISTS country_code_lookups";

const CREATE_TABLE: &str = "\
    CREATE TABLE country_code_lookups (
        ipfrom bigint constraint country_code_lookups_pk primary key,
        ipto bigint,
        registry text,
        assigned bigint,
        ctry text,
        cntry text,
        country text
    )";

const INSERT_ROW: &str = "\
    INSERT INTO country_code_lookups (ipfrom, ipto, registry, assigned, ctry, cntry, country) \
    VALUES ($1, $2, $3, $4, $5, $6, $7)";

const CREATE_INDEX: &str = "\
    CREATE INDEX country_code_lookups_ipto_index \
    ON country_code_lookups (ipto)";

const COUNT_ROWS: &str = "SELECT count(*) FROM country_code_lookups";

/// Result of a completed migration run.
#[derive(Debug, Clone)]
pub struct MigrationReport {
    /// Rows written to the destination table.
    pub rows_copied: u64,
    /// Row count of the source table at verification time.
    pub source_rows: i64,
    /// Row count of the destination table at verification time.
    pub target_rows: i64,
    /// Total duration in seconds.
    pub duration_seconds: f64,
}

/// Run the migration as a single transaction on one pooled connection.
///
/// The destination table is dropped and recreated, so the run is idempotent
/// at the table level. The transaction rolls back on drop, which covers
/// every error path; commit happens exactly once, after the row counts have
/// been verified.
pub async fn run(source: &SourceDb, target: &PgPool) -> Result<MigrationReport> {
    let started = Instant::now();

    let mut client = target.client().await?;
    let tx = client.transaction().await?;

    info!("Recreating destination table country_code_lookups");
    tx.execute(DROP_TABLE, &[]).await?;
    tx.execute(CREATE_TABLE, &[]).await?;

    info!("Copying lookup rows");
    let mut rows_copied: u64 = 0;
    {
        let mut stmt = source.prepare_scan()?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let row = LookupRow::from_row(row)?;
            insert_row(&tx, &row).await?;
            rows_copied += 1;
        }
    }
    info!("Copied {} rows", rows_copied);

    info!("Creating index on ipto");
    tx.execute(CREATE_INDEX, &[]).await?;

    // Counts are read inside the open transaction; tokio-postgres gives
    // read-your-writes visibility here.
    let target_rows: i64 = tx.query_one(COUNT_ROWS, &[]).await?.get(0);
    let source_rows = source.row_count()?;
    if source_rows != target_rows {
        return Err(MigrateError::Validation(format!(
            "row count mismatch after copy: source has {} rows, destination has {}",
            source_rows, target_rows
        )));
    }

    tx.commit().await?;

    Ok(MigrationReport {
        rows_copied,
        source_rows,
        target_rows,
        duration_seconds: started.elapsed().as_secs_f64(),
    })
}

/// Insert one row inside the open transaction.
///
/// A driver error is fatal. An affected-row count other than 1 is logged
/// and the copy continues.
async fn insert_row(tx: &Transaction<'_>, row: &LookupRow) -> Result<()> {
    let affected = tx
        .execute(
            INSERT_ROW,
            &[
                &row.ip_from,
                &row.ip_to,
                &row.registry,
                &row.assigned,
                &row.ctry,
                &row.cntry,
                &row.country,
            ],
        )
        .await?;
    if affected != 1 {
        warn!(
            "Wrong number of rows affected ({}) when inserting lookup row, ipfrom: {}",
            affected, row.ip_from
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_declares_primary_key_on_ipfrom() {
        assert!(CREATE_TABLE.contains("ipfrom bigint constraint country_code_lookups_pk primary key"));
    }

    #[test]
    fn test_insert_covers_all_seven_columns() {
        for col in ["ipfrom", "ipto", "registry", "assigned", "ctry", "cntry", "country"] {
            assert!(INSERT_ROW.contains(col), "missing column {}", col);
        }
        assert!(INSERT_ROW.contains("$7"));
        assert!(!INSERT_ROW.contains("$8"));
    }

    #[test]
    fn test_index_targets_ipto() {
        assert!(CREATE_INDEX.contains("country_code_lookups_ipto_index"));
        assert!(CREATE_INDEX.trim_end().ends_with("(ipto)"));
    }
}
