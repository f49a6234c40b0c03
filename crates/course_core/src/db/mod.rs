//! SQLite storage handle provider.
//!
//! # Responsibility
//! - Open call-scoped SQLite connections for course operations.
//! - Guarantee the `Courses` table exists before any data statement runs.
//!
//! # Invariants
//! - Schema creation is conditional (`IF NOT EXISTS`) and safe to repeat.
//! - Handles are never cached; every caller owns and drops its own.
//!
//! # See also
//! - docs/architecture/data-model.md

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{ensure_schema, open_store};
pub use schema::{verify_schema, COURSES_TABLE, COURSE_COLUMNS};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// A persisted row could not be decoded into a `Course`.
    InvalidRow(String),
    MissingTable(&'static str),
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::InvalidRow(message) => write!(f, "invalid persisted course row: {message}"),
            Self::MissingTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::InvalidRow(_) | Self::MissingTable(_) | Self::MissingColumn { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
