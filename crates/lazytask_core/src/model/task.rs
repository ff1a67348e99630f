//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shown in the task list.
//! - Provide the explicit priority rank table used for display ordering.
//! - Provide completion helpers and write-path validation.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` is set once at creation and never changes afterwards.
//! - `Priority::rank` is the only source of priority ordering.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Absolute instant in Unix epoch milliseconds.
pub type Timestamp = i64;

/// Stable opaque identifier for a task.
///
/// Locally created tasks use a UUID v4 string; tasks imported from the API
/// keep whatever identifier the server assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh identifier for a locally created task.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an externally assigned identifier.
    ///
    /// # Errors
    /// - Returns `TaskValidationError::EmptyId` for blank input.
    pub fn parse(value: impl Into<String>) -> Result<Self, TaskValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if trimmed.len() == value.len() {
            return Ok(Self(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

/// Urgency level attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// All priorities, most urgent first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Display rank: lower ranks sort first.
    ///
    /// Kept as an explicit table so adding a level never depends on variant
    /// declaration order or on the string form.
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Stable storage/wire label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(TaskValidationError::InvalidTaskData {
                field: "priority",
                value: other.to_string(),
            }),
        }
    }
}

/// Validation errors for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Identifier is empty or whitespace only.
    EmptyId,
    /// Title is empty or whitespace only.
    EmptyTitle,
    /// A field holds a value outside its domain (unknown priority, malformed
    /// timestamp, ...).
    InvalidTaskData { field: &'static str, value: String },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id must not be empty"),
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::InvalidTaskData { field, value } => {
                write!(f, "invalid task data in `{field}`: `{value}`")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    /// When the task is planned to happen. Not used for ordering.
    pub scheduled_at: Timestamp,
    /// Instant by which the task should be done.
    pub deadline: Timestamp,
    pub priority: Priority,
    pub is_completed: bool,
    /// Immutable after creation.
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Task {
    /// Creates an open task with a generated id.
    ///
    /// # Invariants
    /// - `priority` starts as `Priority::Medium`.
    /// - `scheduled_at` and `updated_at` start equal to `created_at`.
    pub fn new(title: impl Into<String>, deadline: Timestamp, created_at: Timestamp) -> Self {
        Self::with_id(TaskId::generate(), title, deadline, created_at)
    }

    /// Creates an open task with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        deadline: Timestamp,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            scheduled_at: created_at,
            deadline,
            priority: Priority::default(),
            is_completed: false,
            created_at,
            updated_at: created_at,
        }
    }

    /// Validates write-path invariants.
    ///
    /// The display ordering never calls this; it accepts any `Task` value.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }

    pub fn complete(&mut self) {
        self.is_completed = true;
    }

    pub fn reopen(&mut self) {
        self.is_completed = false;
    }

    /// Flips completion state and returns the new value.
    pub fn toggle_completed(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.is_completed
    }
}

#[cfg(test)]
mod tests {
    use super::{Priority, Task, TaskId, TaskValidationError};

    #[test]
    fn rank_table_orders_high_before_low() {
        let ranks: Vec<u8> = Priority::ALL.iter().map(|p| p.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[test]
    fn priority_parse_is_strict() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(
            err,
            TaskValidationError::InvalidTaskData {
                field: "priority",
                value: "urgent".to_string(),
            }
        );
        assert!("High".parse::<Priority>().is_err());
    }

    #[test]
    fn task_id_trims_and_rejects_blank() {
        assert_eq!(TaskId::parse("  abc ").unwrap().as_str(), "abc");
        assert_eq!(TaskId::parse("   ").unwrap_err(), TaskValidationError::EmptyId);
    }

    #[test]
    fn completion_helpers() {
        let mut task = Task::new("water plants", 100, 10);
        assert!(task.toggle_completed());
        assert!(!task.toggle_completed());
        task.complete();
        assert!(task.is_completed);
        task.reopen();
        assert!(!task.is_completed);
    }
}
