//! Core domain logic for course records.
//! This crate is the single source of truth for course invariants.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::default_db_path;
pub use error::{CourseError, CourseResult, ErrorKind};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::{Course, CourseChanges, CourseDraft, CourseId, CoursePatch};
pub use model::validation::{
    validate_duration, validate_fee, validate_id, validate_name, FieldValue, ValidationError,
};
pub use repo::course_repo::{CourseRepository, RepoError, RepoResult, SqliteCourseRepository};
pub use service::course_service::{
    create_course, delete_course, ensure_schema, get_course, list_courses, update_course,
    CourseService,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
