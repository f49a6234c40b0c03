//! Course domain model and input validation.
//!
//! # Responsibility
//! - Define the canonical `Course` record.
//! - Check and normalize caller input before any store access.
//!
//! # Invariants
//! - A `Course` value built through this module always satisfies every
//!   field rule (positive `id`, trimmed non-empty `name`, non-negative
//!   `fee`, positive `duration`).
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod course;
pub mod validation;
