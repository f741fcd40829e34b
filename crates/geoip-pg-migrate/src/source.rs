//! Read-only access to the Geo-IP SQLite source database.

use crate::error::Result;
use rusqlite::{Connection, OpenFlags, Row, Statement};
use std::path::Path;
use tracing::debug;

/// Ordered scan over the source lookup table. Ascending `IPFROM` matches the
/// destination primary key order.
const SCAN_QUERY: &str = "\
    SELECT IPFROM, IPTO, REGISTRY, ASSIGNED, CTRY, CNTRY, COUNTRY \
    FROM ipv4 \
    ORDER BY IPFROM ASC";

const COUNT_QUERY: &str = "SELECT count(*) FROM ipv4";

/// One IPv4 address-range-to-country mapping record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRow {
    /// Inclusive lower bound of the range.
    pub ip_from: i64,
    /// Inclusive upper bound of the range.
    pub ip_to: i64,
    /// Allocating registry code.
    pub registry: String,
    /// Assignment timestamp per source semantics.
    pub assigned: i64,
    /// Short country code.
    pub ctry: String,
    /// Alternate country code.
    pub cntry: String,
    /// Full country name.
    pub country: String,
}

impl LookupRow {
    /// Map a scan result row positionally. No transformation is applied.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            ip_from: row.get(0)?,
            ip_to: row.get(1)?,
            registry: row.get(2)?,
            assigned: row.get(3)?,
            ctry: row.get(4)?,
            cntry: row.get(5)?,
            country: row.get(6)?,
        })
    }
}

/// Handle to the Geo-IP SQLite file, held read-only for the whole run.
pub struct SourceDb {
    conn: Connection,
}

impl SourceDb {
    /// Open the source database read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!("Opened Geo-IP database: {}", path.as_ref().display());
        Ok(Self { conn })
    }

    /// Prepare the ordered scan over the `ipv4` table.
    ///
    /// The caller drives the returned statement row by row, so each row can
    /// be written to the destination before the next one is read.
    pub fn prepare_scan(&self) -> Result<Statement<'_>> {
        Ok(self.conn.prepare(SCAN_QUERY)?)
    }

    /// Count the rows in the `ipv4` table.
    pub fn row_count(&self) -> Result<i64> {
        Ok(self.conn.query_row(COUNT_QUERY, [], |row| row.get(0))?)
    }
}
