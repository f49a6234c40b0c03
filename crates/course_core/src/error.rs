//! Domain error taxonomy for course operations.
//!
//! # Responsibility
//! - Give every failure a distinguishable kind so callers can decide to
//!   fix input, treat as no-op, or retry.
//! - Keep raw SQLite details behind infrastructure context.
//!
//! # Invariants
//! - Validation and bad-request errors are produced before any store access.
//! - Constraint violations never leak as raw store errors.

use crate::db::DbError;
use crate::model::course::CourseId;
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CourseResult<T> = Result<T, CourseError>;

/// Coarse error category exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    BadRequest,
    NotFound,
    Duplicate,
    Infrastructure,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::BadRequest => "bad_request",
            Self::NotFound => "not_found",
            Self::Duplicate => "duplicate",
            Self::Infrastructure => "infrastructure",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum CourseError {
    Validation(ValidationError),
    /// Structurally valid but semantically incomplete call.
    BadRequest(String),
    NotFound(CourseId),
    Duplicate(CourseId),
    /// Store could not be reached, opened, read or written.
    Infrastructure {
        operation: &'static str,
        table: &'static str,
        source: DbError,
    },
}

impl CourseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Duplicate(_) => ErrorKind::Duplicate,
            Self::Infrastructure { .. } => ErrorKind::Infrastructure,
        }
    }

    /// Only infrastructure failures may succeed on a later attempt.
    /// This layer itself never retries.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Infrastructure
    }

    pub(crate) fn infrastructure(operation: &'static str, source: DbError) -> Self {
        Self::Infrastructure {
            operation,
            table: crate::db::COURSES_TABLE,
            source,
        }
    }
}

impl Display for CourseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid input: {err}"),
            Self::BadRequest(message) => write!(f, "bad request: {message}"),
            Self::NotFound(id) => write!(f, "course with id {id} not found"),
            Self::Duplicate(id) => write!(f, "course with id {id} already exists"),
            Self::Infrastructure {
                operation,
                table,
                source,
            } => write!(f, "{operation} on `{table}` failed: {source}"),
        }
    }
}

impl Error for CourseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Infrastructure { source, .. } => Some(source),
            Self::BadRequest(_) | Self::NotFound(_) | Self::Duplicate(_) => None,
        }
    }
}

impl From<ValidationError> for CourseError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
