//! Core domain logic for LazyTask.
//! This crate is the single source of truth for task invariants and for the
//! order in which task lists are displayed.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod order;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::record::{tasks_from_records, TaskRecord};
pub use model::task::{Priority, Task, TaskId, TaskValidationError, Timestamp};
pub use order::{compare_tasks, is_display_ordered, order_tasks, order_tasks_owned, TaskSortKey};
pub use repo::task_repo::{RepoError, RepoResult, SqliteTaskRepository, TaskRepository};
pub use service::task_service::{
    NewTask, TaskService, TaskServiceError, TaskServiceResult, TaskStats, TaskUpdate,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
