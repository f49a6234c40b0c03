//! Course use-case service.
//!
//! # Responsibility
//! - Provide the five public course operations plus schema bootstrap.
//! - Validate input before acquiring a store handle.
//! - Translate repository failures into the domain error taxonomy.
//!
//! # Invariants
//! - Invalid input never opens (or creates) the store file.
//! - Each call acquires one handle, runs one statement, and drops the handle
//!   before returning. No state is cached between calls.
//! - Failures are never retried here.

use crate::config::default_db_path;
use crate::db::open_store;
use crate::error::{CourseError, CourseResult};
use crate::model::course::{Course, CourseDraft, CourseId, CoursePatch};
use crate::model::validation::{validate_id, FieldValue, ValidationError};
use crate::repo::course_repo::{CourseRepository, RepoError, SqliteCourseRepository};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Operation layer bound to one store location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseService {
    location: PathBuf,
}

impl Default for CourseService {
    /// Binds the service to [`default_db_path`].
    fn default() -> Self {
        Self::new(default_db_path())
    }
}

impl CourseService {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Creates the `Courses` table when absent. Idempotent.
    pub fn ensure_schema(&self) -> CourseResult<()> {
        self.run("ensure_schema", None, |_| Ok(()))
    }

    /// Inserts a new course.
    ///
    /// # Errors
    /// - `Validation` for any invalid field (store untouched).
    /// - `Duplicate` when the id already exists; the stored row is unchanged.
    pub fn create(&self, draft: &CourseDraft) -> CourseResult<()> {
        let course = validated("create_course", draft.validate())?;
        self.run("create_course", Some(course.id), |repo| {
            repo.insert_course(&course)
        })
    }

    /// Returns the full record for `id`, or `NotFound`.
    pub fn get(&self, id: impl Into<FieldValue>) -> CourseResult<Course> {
        let id = validated("get_course", validate_id(&id.into()))?;
        self.run("get_course", Some(id), |repo| {
            repo.get_course(id)?.ok_or(RepoError::NotFound(id))
        })
    }

    /// Applies only the fields present in `patch`.
    ///
    /// # Errors
    /// - `Validation` for an invalid id or supplied field.
    /// - `BadRequest` when `patch` carries no field, whether or not `id`
    ///   exists.
    /// - `NotFound` when no row has this id.
    pub fn update(&self, id: impl Into<FieldValue>, patch: &CoursePatch) -> CourseResult<()> {
        let id = validated("update_course", validate_id(&id.into()))?;
        let changes = validated("update_course", patch.validate())?;
        if changes.is_empty() {
            warn!("event=update_course module=service status=rejected error_kind=bad_request course_id={id}");
            return Err(CourseError::BadRequest(
                "at least one of name, fee or duration must be provided".to_string(),
            ));
        }

        self.run("update_course", Some(id), |repo| {
            repo.update_course(id, &changes)
        })
    }

    /// Removes the course with `id`, or fails with `NotFound`.
    pub fn delete(&self, id: impl Into<FieldValue>) -> CourseResult<()> {
        let id = validated("delete_course", validate_id(&id.into()))?;
        self.run("delete_course", Some(id), |repo| repo.delete_course(id))
    }

    /// Every course ascending by id. An empty store yields an empty list.
    pub fn list(&self) -> CourseResult<Vec<Course>> {
        self.run("list_courses", None, |repo| repo.list_courses())
    }

    fn run<T>(
        &self,
        operation: &'static str,
        course_id: Option<CourseId>,
        f: impl FnOnce(&SqliteCourseRepository<'_>) -> Result<T, RepoError>,
    ) -> CourseResult<T> {
        let started_at = Instant::now();
        let id_label = course_id.map_or_else(|| "-".to_string(), |id| id.to_string());

        let conn = open_store(&self.location).map_err(|err| {
            error!(
                "event={operation} module=service status=error error_kind=infrastructure course_id={id_label} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            CourseError::infrastructure(operation, err)
        })?;

        let result = f(&SqliteCourseRepository::new(&conn));
        drop(conn);

        let result = result.map_err(|err| match err {
            RepoError::NotFound(id) => CourseError::NotFound(id),
            RepoError::Duplicate(id) => CourseError::Duplicate(id),
            RepoError::Db(source) => CourseError::infrastructure(operation, source),
        });

        let duration_ms = started_at.elapsed().as_millis();
        match &result {
            Ok(_) => info!(
                "event={operation} module=service status=ok course_id={id_label} duration_ms={duration_ms}"
            ),
            Err(err) if err.is_retryable() => error!(
                "event={operation} module=service status=error error_kind={} course_id={id_label} duration_ms={duration_ms} error={err}",
                err.kind()
            ),
            Err(err) => warn!(
                "event={operation} module=service status=rejected error_kind={} course_id={id_label} duration_ms={duration_ms}",
                err.kind()
            ),
        }

        result
    }
}

fn validated<T>(operation: &'static str, result: Result<T, ValidationError>) -> CourseResult<T> {
    result.map_err(|err| {
        warn!("event={operation} module=service status=rejected error_kind=validation error={err}");
        CourseError::Validation(err)
    })
}

/// Creates the `Courses` table at `location` when absent.
pub fn ensure_schema(location: impl AsRef<Path>) -> CourseResult<()> {
    CourseService::new(location.as_ref()).ensure_schema()
}

/// Validates all four fields and inserts a new course at `location`.
pub fn create_course(
    id: impl Into<FieldValue>,
    name: impl Into<FieldValue>,
    fee: impl Into<FieldValue>,
    duration: impl Into<FieldValue>,
    location: impl AsRef<Path>,
) -> CourseResult<()> {
    CourseService::new(location.as_ref()).create(&CourseDraft::new(id, name, fee, duration))
}

pub fn get_course(id: impl Into<FieldValue>, location: impl AsRef<Path>) -> CourseResult<Course> {
    CourseService::new(location.as_ref()).get(id)
}

/// Partially updates the course with `id`; see [`CourseService::update`].
pub fn update_course(
    id: impl Into<FieldValue>,
    patch: &CoursePatch,
    location: impl AsRef<Path>,
) -> CourseResult<()> {
    CourseService::new(location.as_ref()).update(id, patch)
}

pub fn delete_course(id: impl Into<FieldValue>, location: impl AsRef<Path>) -> CourseResult<()> {
    CourseService::new(location.as_ref()).delete(id)
}

pub fn list_courses(location: impl AsRef<Path>) -> CourseResult<Vec<Course>> {
    CourseService::new(location.as_ref()).list()
}
