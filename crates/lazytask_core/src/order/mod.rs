//! Display ordering for task lists.
//!
//! # Responsibility
//! - Turn a task snapshot into the top-to-bottom order shown to the user.
//! - Keep the comparator independent of storage and rendering.
//!
//! # Invariants
//! - Ordering is pure, stateless and never mutates its input.
//! - Key precedence: completion, priority rank, deadline, newest creation.

pub mod task_order;

pub use task_order::{
    compare_tasks, is_display_ordered, order_tasks, order_tasks_owned, TaskSortKey,
};
