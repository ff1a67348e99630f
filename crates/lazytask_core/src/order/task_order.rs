//! Multi-key task comparator and stable ordering entry points.
//!
//! # Invariants
//! - Open tasks always precede completed tasks.
//! - Within a completion bucket, lower `Priority::rank` comes first.
//! - Then earlier deadline first.
//! - Then later `created_at` first; this is the only descending key.
//! - Full ties keep input relative order (`sort_by` is stable).

use crate::model::task::{Task, Timestamp};
use std::cmp::{Ordering, Reverse};

/// Materialized sort key for one task.
///
/// Field order is the comparison precedence, so the derived `Ord` is the
/// display order. Matches `compare_tasks` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TaskSortKey {
    pub is_completed: bool,
    pub priority_rank: u8,
    pub deadline: Timestamp,
    pub created_at: Reverse<Timestamp>,
}

impl TaskSortKey {
    pub fn of(task: &Task) -> Self {
        Self {
            is_completed: task.is_completed,
            priority_rank: task.priority.rank(),
            deadline: task.deadline,
            created_at: Reverse(task.created_at),
        }
    }
}

/// Compares two tasks by display precedence.
pub fn compare_tasks(left: &Task, right: &Task) -> Ordering {
    left.is_completed
        .cmp(&right.is_completed)
        .then_with(|| left.priority.rank().cmp(&right.priority.rank()))
        .then_with(|| left.deadline.cmp(&right.deadline))
        .then_with(|| right.created_at.cmp(&left.created_at))
}

/// Returns references to `tasks` in display order.
///
/// The input slice is left untouched; the result holds the same elements.
pub fn order_tasks(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|left, right| compare_tasks(left, right));
    ordered
}

/// Reorders an owned snapshot into display order.
pub fn order_tasks_owned(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(compare_tasks);
    tasks
}

/// Whether a sequence already satisfies display order.
pub fn is_display_ordered<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> bool {
    let mut previous: Option<&Task> = None;
    for task in tasks {
        if let Some(prev) = previous {
            if compare_tasks(prev, task) == Ordering::Greater {
                return false;
            }
        }
        previous = Some(task);
    }
    true
}
