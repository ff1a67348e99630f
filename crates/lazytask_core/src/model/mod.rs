//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical `Task` record used by ordering, storage and services.
//! - Define the external wire shape delivered by the task API.
//!
//! # Invariants
//! - Every task is identified by a stable, non-empty `TaskId`.
//! - `Priority` is a closed enumeration; unknown values are rejected at parse
//!   boundaries and never reach the ordering logic.
//! - Timestamps are absolute instants in Unix epoch milliseconds.

pub mod record;
pub mod task;
