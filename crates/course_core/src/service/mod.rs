//! Course operation layer.
//!
//! # Responsibility
//! - Compose validation with a single store interaction per call.
//! - Keep CLI and other callers decoupled from storage details.

pub mod course_service;
