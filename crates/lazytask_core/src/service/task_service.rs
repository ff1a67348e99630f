//! Task use-case service.
//!
//! # Responsibility
//! - Provide create/update/complete/delete entry points for task screens.
//! - Serve the task list in display order with summary counts.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - `created_at` is assigned once here and never changed by updates.
//! - Listing always goes through `order_tasks_owned`; storage order is never
//!   exposed.
//! - Task titles and descriptions are never written to logs.

use crate::model::task::{Priority, Task, TaskId, TaskValidationError, Timestamp};
use crate::order::order_tasks_owned;
use crate::repo::task_repo::{RepoError, TaskRepository};
use chrono::Utc;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Service error for task use-cases.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Target task does not exist.
    TaskNotFound(TaskId),
    /// Input rejected before reaching storage.
    Validation(TaskValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TaskNotFound(_) => None,
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::TaskNotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

impl From<TaskValidationError> for TaskServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Request model for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to the creation instant when absent.
    pub scheduled_at: Option<Timestamp>,
    pub deadline: Timestamp,
    /// Defaults to `Priority::Medium` when absent.
    pub priority: Option<Priority>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, deadline: Timestamp) -> Self {
        Self {
            title: title.into(),
            description: None,
            scheduled_at: None,
            deadline,
            priority: None,
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Full replacement of the user-editable task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: Timestamp,
    pub deadline: Timestamp,
    pub priority: Priority,
    pub is_completed: bool,
}

impl From<&Task> for TaskUpdate {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            scheduled_at: task.scheduled_at,
            deadline: task.deadline,
            priority: task.priority,
            is_completed: task.is_completed,
        }
    }
}

/// Summary counts shown above the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            if task.is_completed {
                stats.completed += 1;
            } else {
                stats.pending += 1;
            }
            stats
        })
    }
}

type Clock = Box<dyn Fn() -> Timestamp>;

/// Use-case service wrapper for task operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
    clock: Clock,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the wall clock.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, || Utc::now().timestamp_millis())
    }

    /// Creates a service with a caller-provided clock.
    pub fn with_clock(repo: R, clock: impl Fn() -> Timestamp + 'static) -> Self {
        Self {
            repo,
            clock: Box::new(clock),
        }
    }

    /// Creates an open task and returns the stored record.
    ///
    /// # Contract
    /// - `created_at == updated_at ==` current clock value.
    /// - Blank titles are rejected with `TaskValidationError::EmptyTitle`.
    pub fn create_task(&self, request: NewTask) -> TaskServiceResult<Task> {
        let now = (self.clock)();
        let mut task = Task::new(request.title, request.deadline, now);
        task.description = request.description;
        task.scheduled_at = request.scheduled_at.unwrap_or(now);
        task.priority = request.priority.unwrap_or_default();

        if let Err(err) = self.repo.create_task(&task) {
            warn!("event=task_create module=service status=error error={err}");
            return Err(err.into());
        }
        info!(
            "event=task_create module=service status=ok task_id={} priority={}",
            task.id, task.priority
        );
        Ok(task)
    }

    /// Replaces editable fields of an existing task.
    pub fn update_task(&self, id: &TaskId, update: TaskUpdate) -> TaskServiceResult<Task> {
        let mut task = self.require_task(id)?;
        task.title = update.title;
        task.description = update.description;
        task.scheduled_at = update.scheduled_at;
        task.deadline = update.deadline;
        task.priority = update.priority;
        task.is_completed = update.is_completed;
        self.persist(task, "task_update")
    }

    /// Sets completion state explicitly.
    pub fn set_completed(&self, id: &TaskId, is_completed: bool) -> TaskServiceResult<Task> {
        let mut task = self.require_task(id)?;
        if is_completed {
            task.complete();
        } else {
            task.reopen();
        }
        self.persist(task, "task_complete")
    }

    /// Flips completion state, as done by the list checkbox.
    pub fn toggle_completed(&self, id: &TaskId) -> TaskServiceResult<Task> {
        let mut task = self.require_task(id)?;
        task.toggle_completed();
        self.persist(task, "task_toggle")
    }

    /// Permanently removes a task.
    pub fn delete_task(&self, id: &TaskId) -> TaskServiceResult<()> {
        self.repo.delete_task(id)?;
        info!("event=task_delete module=service status=ok task_id={id}");
        Ok(())
    }

    pub fn get_task(&self, id: &TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repo.get_task(id)?)
    }

    /// Returns every stored task in display order.
    pub fn list_ordered(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = order_tasks_owned(self.repo.list_tasks()?);
        info!(
            "event=task_list module=service status=ok count={}",
            tasks.len()
        );
        Ok(tasks)
    }

    /// Counts all, completed and pending tasks.
    pub fn stats(&self) -> TaskServiceResult<TaskStats> {
        let tasks = self.repo.list_tasks()?;
        Ok(TaskStats::from_tasks(&tasks))
    }

    fn require_task(&self, id: &TaskId) -> TaskServiceResult<Task> {
        self.repo
            .get_task(id)?
            .ok_or_else(|| TaskServiceError::TaskNotFound(id.clone()))
    }

    fn persist(&self, mut task: Task, event: &'static str) -> TaskServiceResult<Task> {
        task.updated_at = (self.clock)();
        if let Err(err) = self.repo.update_task(&task) {
            warn!(
                "event={event} module=service status=error task_id={} error={err}",
                task.id
            );
            return Err(err.into());
        }
        info!(
            "event={event} module=service status=ok task_id={} completed={}",
            task.id, task.is_completed
        );
        Ok(task)
    }
}
