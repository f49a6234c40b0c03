//! Course domain record.
//!
//! # Invariants
//! - `id` is caller-supplied and never reassigned after creation.
//! - `name` is stored trimmed.

use super::validation::{
    validate_duration, validate_fee, validate_id, validate_name, FieldValue, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Primary key of a course. Always strictly positive once validated.
pub type CourseId = i64;

/// The single managed entity: one row of the `Courses` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    /// Non-negative; zero means free.
    pub fee: f64,
    /// Count of time units, strictly positive.
    pub duration: i64,
}

impl Course {
    /// Builds a validated course from loosely-typed field values.
    ///
    /// The name is trimmed and the fee/duration are coerced to their
    /// storage types.
    pub fn new(
        id: impl Into<FieldValue>,
        name: impl Into<FieldValue>,
        fee: impl Into<FieldValue>,
        duration: impl Into<FieldValue>,
    ) -> Result<Self, ValidationError> {
        CourseDraft::new(id, name, fee, duration).validate()
    }

    /// Re-checks every field rule on an already-typed record.
    ///
    /// Used on rows read back from storage.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id(&FieldValue::Integer(self.id))?;
        let name = validate_name(&FieldValue::Text(self.name.clone()))?;
        if name != self.name {
            return Err(ValidationError::UntrimmedName);
        }
        validate_fee(&FieldValue::Real(self.fee))?;
        validate_duration(&FieldValue::Integer(self.duration))?;
        Ok(())
    }
}

/// Raw, unvalidated input for creating a course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDraft {
    pub id: FieldValue,
    pub name: FieldValue,
    pub fee: FieldValue,
    pub duration: FieldValue,
}

impl CourseDraft {
    pub fn new(
        id: impl Into<FieldValue>,
        name: impl Into<FieldValue>,
        fee: impl Into<FieldValue>,
        duration: impl Into<FieldValue>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fee: fee.into(),
            duration: duration.into(),
        }
    }

    /// Validates all four fields, stopping at the first rejection.
    pub fn validate(&self) -> Result<Course, ValidationError> {
        Ok(Course {
            id: validate_id(&self.id)?,
            name: validate_name(&self.name)?,
            fee: validate_fee(&self.fee)?,
            duration: validate_duration(&self.duration)?,
        })
    }
}

/// Raw field update set for a partial update.
///
/// Each field is independently present or absent; absent fields keep
/// their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePatch {
    pub name: Option<FieldValue>,
    pub fee: Option<FieldValue>,
    pub duration: Option<FieldValue>,
}

impl CoursePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, value: impl Into<FieldValue>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn fee(mut self, value: impl Into<FieldValue>) -> Self {
        self.fee = Some(value.into());
        self
    }

    pub fn duration(mut self, value: impl Into<FieldValue>) -> Self {
        self.duration = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.fee.is_none() && self.duration.is_none()
    }

    /// Validates each supplied field individually.
    ///
    /// An empty patch validates to empty changes; rejecting it is the
    /// caller's decision.
    pub fn validate(&self) -> Result<CourseChanges, ValidationError> {
        Ok(CourseChanges {
            name: self.name.as_ref().map(validate_name).transpose()?,
            fee: self.fee.as_ref().map(validate_fee).transpose()?,
            duration: self.duration.as_ref().map(validate_duration).transpose()?,
        })
    }
}

/// Validated, normalized field update set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseChanges {
    pub name: Option<String>,
    pub fee: Option<f64>,
    pub duration: Option<i64>,
}

impl CourseChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.fee.is_none() && self.duration.is_none()
    }
}
