//! Course repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide single-statement CRUD APIs over the `Courses` table.
//! - Translate zero-row writes and key conflicts into semantic errors.
//!
//! # Invariants
//! - Every method issues exactly one SQL statement, so each write is atomic.
//! - Inputs are already validated; this layer does not re-validate them.
//! - Read paths decode rows explicitly and reject invalid persisted state
//!   instead of masking it.

use crate::db::DbError;
use crate::model::course::{Course, CourseChanges, CourseId};
use rusqlite::{ffi, params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const COURSE_SELECT_SQL: &str = "SELECT
    id,
    name,
    fee,
    duration
FROM Courses";

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    NotFound(CourseId),
    Duplicate(CourseId),
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "course not found: {id}"),
            Self::Duplicate(id) => write!(f, "course already exists: {id}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::Duplicate(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for course CRUD operations.
pub trait CourseRepository {
    fn insert_course(&self, course: &Course) -> RepoResult<()>;
    fn get_course(&self, id: CourseId) -> RepoResult<Option<Course>>;
    /// Writes only the fields present in `changes`.
    fn update_course(&self, id: CourseId, changes: &CourseChanges) -> RepoResult<()>;
    fn delete_course(&self, id: CourseId) -> RepoResult<()>;
    /// All courses, ascending by `id`.
    fn list_courses(&self) -> RepoResult<Vec<Course>>;
}

/// SQLite-backed course repository borrowing a call-scoped connection.
pub struct SqliteCourseRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCourseRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CourseRepository for SqliteCourseRepository<'_> {
    fn insert_course(&self, course: &Course) -> RepoResult<()> {
        let result = self.conn.execute(
            "INSERT INTO Courses (id, name, fee, duration) VALUES (?1, ?2, ?3, ?4);",
            params![
                course.id,
                course.name.as_str(),
                course.fee,
                course.duration
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_key_conflict(&err) => Err(RepoError::Duplicate(course.id)),
            Err(err) => Err(err.into()),
        }
    }

    fn get_course(&self, id: CourseId) -> RepoResult<Option<Course>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COURSE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_course_row(row)?));
        }

        Ok(None)
    }

    fn update_course(&self, id: CourseId, changes: &CourseChanges) -> RepoResult<()> {
        // NULL parameters keep the stored value, so one fixed statement
        // serves every combination of present fields.
        let changed = self.conn.execute(
            "UPDATE Courses
             SET
                name = COALESCE(?1, name),
                fee = COALESCE(?2, fee),
                duration = COALESCE(?3, duration)
             WHERE id = ?4;",
            params![
                changes.name.as_deref(),
                changes.fee,
                changes.duration,
                id
            ],
        )?;

        // SQLite reports a no-op UPDATE as success.
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_course(&self, id: CourseId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM Courses WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn list_courses(&self) -> RepoResult<Vec<Course>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COURSE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut courses = Vec::new();

        while let Some(row) = rows.next()? {
            courses.push(parse_course_row(row)?);
        }

        Ok(courses)
    }
}

fn parse_course_row(row: &Row<'_>) -> RepoResult<Course> {
    let course = Course {
        id: row.get("id")?,
        name: row.get("name")?,
        fee: row.get("fee")?,
        duration: row.get("duration")?,
    };

    course.validate().map_err(|err| {
        DbError::InvalidRow(format!("Courses row with id {}: {err}", course.id))
    })?;

    Ok(course)
}

fn is_key_conflict(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) => {
            failure.code == ErrorCode::ConstraintViolation
                && matches!(
                    failure.extended_code,
                    ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE
                )
        }
        _ => false,
    }
}
