//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the course data access contract.
//! - Isolate SQLite statements from the operation layer.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `Duplicate`) in
//!   addition to DB transport errors.

pub mod course_repo;
