//! Default store location.
//!
//! Resolved once per process: `COURSE_DB_PATH` when set and non-blank,
//! otherwise `college.db` in the working directory.

use std::path::PathBuf;
use std::sync::OnceLock;

pub const DB_PATH_ENV: &str = "COURSE_DB_PATH";
pub const DEFAULT_DB_FILE_NAME: &str = "college.db";

static DEFAULT_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Returns the well-known store location used when callers give none.
pub fn default_db_path() -> PathBuf {
    DEFAULT_DB_PATH
        .get_or_init(|| resolve_db_path(std::env::var(DB_PATH_ENV).ok()))
        .clone()
}

fn resolve_db_path(raw: Option<String>) -> PathBuf {
    if let Some(raw) = raw {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    PathBuf::from(DEFAULT_DB_FILE_NAME)
}
