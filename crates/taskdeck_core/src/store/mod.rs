//! Storage layer contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the authoritative holder for all projects and tasks.
//! - Keep referential integrity between the task table and the
//!   project-to-task index; no business rules live here.
//!
//! # Invariants
//! - Every id in an index bucket resolves to a task table entry.
//! - Every task's owning project id appears in exactly one bucket.

pub mod memory_store;
