//! Field-level validation for course input.
//!
//! # Responsibility
//! - Check type and domain rules for each course field.
//! - Normalize accepted values (trim names, coerce numerics).
//!
//! # Invariants
//! - Every function here is pure and total: it either returns the
//!   normalized value or a `ValidationError`, and never touches storage.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Loosely-typed input value for a single course field.
///
/// Lets dynamically-typed callers (CLI arguments, JSON payloads) go through
/// the same type checks as typed Rust callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl FieldValue {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        Self::Real(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Rejection of caller input, raised before any store access.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    NonPositive {
        field: &'static str,
        value: i64,
    },
    BlankName,
    /// Only reachable when re-checking stored rows.
    UntrimmedName,
    NegativeFee(f64),
    NonFiniteFee,
    FractionalDuration(f64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongType {
                field,
                expected,
                found,
            } => write!(f, "{field} must be {expected}, got {found}"),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be a positive integer, got {value}")
            }
            Self::BlankName => write!(f, "name must be a non-empty string"),
            Self::UntrimmedName => write!(f, "name must not carry surrounding whitespace"),
            Self::NegativeFee(value) => write!(f, "fee must be non-negative, got {value}"),
            Self::NonFiniteFee => write!(f, "fee must be a finite number"),
            Self::FractionalDuration(value) => {
                write!(f, "duration must be a whole number of units, got {value}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Accepts only integers strictly greater than zero.
pub fn validate_id(value: &FieldValue) -> Result<i64, ValidationError> {
    let FieldValue::Integer(id) = value else {
        return Err(wrong_type("id", "an integer", value));
    };
    if *id <= 0 {
        return Err(ValidationError::NonPositive {
            field: "id",
            value: *id,
        });
    }
    Ok(*id)
}

/// Accepts text that is non-empty after trimming; returns the trimmed text.
pub fn validate_name(value: &FieldValue) -> Result<String, ValidationError> {
    let FieldValue::Text(name) = value else {
        return Err(wrong_type("name", "a string", value));
    };
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankName);
    }
    Ok(trimmed.to_string())
}

/// Accepts anything convertible to a finite, non-negative real number.
///
/// Text is parsed after trimming, so `"12.50"` is a valid fee.
pub fn validate_fee(value: &FieldValue) -> Result<f64, ValidationError> {
    let fee = match value {
        FieldValue::Integer(fee) => *fee as f64,
        FieldValue::Real(fee) => *fee,
        FieldValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| wrong_type("fee", "a number", value))?,
    };
    if !fee.is_finite() {
        return Err(ValidationError::NonFiniteFee);
    }
    if fee < 0.0 {
        return Err(ValidationError::NegativeFee(fee));
    }
    // Collapses -0.0.
    Ok(fee + 0.0)
}

/// Accepts integers, or reals with no fractional part, that are positive.
pub fn validate_duration(value: &FieldValue) -> Result<i64, ValidationError> {
    let duration = match value {
        FieldValue::Integer(duration) => *duration,
        FieldValue::Real(duration) => real_to_whole(*duration)?,
        FieldValue::Text(_) => {
            return Err(wrong_type(
                "duration",
                "an integer number of units",
                value,
            ))
        }
    };
    if duration <= 0 {
        return Err(ValidationError::NonPositive {
            field: "duration",
            value: duration,
        });
    }
    Ok(duration)
}

fn real_to_whole(value: f64) -> Result<i64, ValidationError> {
    // 2^63 is exactly representable; anything at or beyond it overflows i64.
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    if !value.is_finite() || value.fract() != 0.0 || value.abs() >= I64_BOUND {
        return Err(ValidationError::FractionalDuration(value));
    }
    Ok(value as i64)
}

fn wrong_type(field: &'static str, expected: &'static str, value: &FieldValue) -> ValidationError {
    ValidationError::WrongType {
        field,
        expected,
        found: value.type_name(),
    }
}
