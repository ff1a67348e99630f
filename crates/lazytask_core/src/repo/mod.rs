//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the fetch/persist contract the services depend on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Task::validate()` before persistence.
//! - Repository reads reject invalid persisted rows instead of masking them.

pub mod task_repo;
