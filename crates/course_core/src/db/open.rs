//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open one file-backed SQLite connection per operation.
//! - Configure a bounded busy timeout for concurrent writers.
//! - Ensure and verify the course schema before returning a handle.
//!
//! # Invariants
//! - Returned connections always see a `Courses` table of the expected shape.
//! - Failures are returned to the caller, never retried here.
//!
//! # See also
//! - docs/architecture/logging.md

use super::schema::{apply_schema, verify_schema};
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the course store at `path` and returns a ready-to-use handle.
///
/// The file is created when missing. The returned connection is meant to be
/// used for a single statement and dropped by the caller.
///
/// # Side effects
/// - May create the database file and the `Courses` table.
/// - Emits `db_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();

    let conn = match Connection::open(path.as_ref()) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Idempotently creates the `Courses` table at `path`.
///
/// Safe to call repeatedly and from several threads or processes at once.
pub fn ensure_schema(path: impl AsRef<Path>) -> DbResult<()> {
    let conn = open_store(path)?;
    drop(conn);
    Ok(())
}

fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_schema(conn)?;
    verify_schema(conn)?;
    Ok(())
}
