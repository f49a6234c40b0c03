//! Fixed single-table schema for course storage.
//!
//! # Invariants
//! - `id` is the primary key and is supplied by callers, never generated.
//! - All four columns are `NOT NULL`; partial rows cannot be stored.

use super::{DbError, DbResult};
use rusqlite::Connection;

pub const COURSES_TABLE: &str = "Courses";

/// Column set of `Courses`, in declaration order.
pub const COURSE_COLUMNS: [&str; 4] = ["id", "name", "fee", "duration"];

pub(crate) const CREATE_COURSES_SQL: &str = "CREATE TABLE IF NOT EXISTS Courses (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    fee REAL NOT NULL,
    duration INTEGER NOT NULL
);";

/// Creates `Courses` on the given connection when it is absent.
pub(crate) fn apply_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_COURSES_SQL)?;
    Ok(())
}

/// Checks that `Courses` exists with every column course operations need.
///
/// A pre-existing table with another shape is reported instead of being
/// silently used, since `CREATE TABLE IF NOT EXISTS` would not touch it.
pub fn verify_schema(conn: &Connection) -> DbResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [COURSES_TABLE],
        |row| row.get(0),
    )?;
    if exists == 0 {
        return Err(DbError::MissingTable(COURSES_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present = stmt
        .query_map([COURSES_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    for column in COURSE_COLUMNS {
        if !present.iter().any(|name| name.eq_ignore_ascii_case(column)) {
            return Err(DbError::MissingColumn {
                table: COURSES_TABLE,
                column,
            });
        }
    }

    Ok(())
}
