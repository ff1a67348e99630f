//! Wire record delivered by the task API.
//!
//! # Responsibility
//! - Mirror the JSON shape served by the remote task endpoints.
//! - Convert wire records into canonical `Task` values and back.
//!
//! # Invariants
//! - Conversion fails fast with `InvalidTaskData` naming the offending wire
//!   field; malformed records are never coerced into a task.
//! - Timestamps are RFC 3339 on the wire and epoch milliseconds in core.

use crate::model::task::{Priority, Task, TaskId, TaskValidationError, Timestamp};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Task as served by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date_time: String,
    pub deadline: String,
    pub priority: String,
    #[serde(default)]
    pub is_completed: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let id = TaskId::parse(record.id)?;
        let priority = record.priority.parse::<Priority>()?;
        let scheduled_at = parse_timestamp("dateTime", &record.date_time)?;
        let deadline = parse_timestamp("deadline", &record.deadline)?;
        let created_at = parse_timestamp("createdAt", &record.created_at)?;
        let updated_at = match record.updated_at.as_deref() {
            Some(value) => parse_timestamp("updatedAt", value)?,
            None => created_at,
        };

        Ok(Task {
            id,
            title: record.title,
            description: record.description,
            scheduled_at,
            deadline,
            priority,
            is_completed: record.is_completed,
            created_at,
            updated_at,
        })
    }
}

impl TryFrom<&Task> for TaskRecord {
    type Error = TaskValidationError;

    fn try_from(task: &Task) -> Result<Self, Self::Error> {
        Ok(Self {
            id: task.id.to_string(),
            title: task.title.clone(),
            description: task.description.clone(),
            date_time: format_timestamp("dateTime", task.scheduled_at)?,
            deadline: format_timestamp("deadline", task.deadline)?,
            priority: task.priority.as_str().to_string(),
            is_completed: task.is_completed,
            created_at: format_timestamp("createdAt", task.created_at)?,
            updated_at: Some(format_timestamp("updatedAt", task.updated_at)?),
        })
    }
}

/// Converts a batch of wire records, stopping at the first invalid one.
pub fn tasks_from_records(
    records: impl IntoIterator<Item = TaskRecord>,
) -> Result<Vec<Task>, TaskValidationError> {
    records.into_iter().map(Task::try_from).collect()
}

/// Parses an RFC 3339 instant into epoch milliseconds.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<Timestamp, TaskValidationError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|instant| instant.timestamp_millis())
        .map_err(|_| TaskValidationError::InvalidTaskData {
            field,
            value: value.to_string(),
        })
}

/// Formats epoch milliseconds as a UTC RFC 3339 string with millisecond
/// precision (`2026-03-01T09:30:00.000Z`).
pub fn format_timestamp(
    field: &'static str,
    value: Timestamp,
) -> Result<String, TaskValidationError> {
    DateTime::<Utc>::from_timestamp_millis(value)
        .map(|instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| TaskValidationError::InvalidTaskData {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, parse_timestamp};

    #[test]
    fn offsets_are_normalized_to_the_same_instant() {
        let utc = parse_timestamp("deadline", "2026-03-01T09:30:00Z").unwrap();
        let shifted = parse_timestamp("deadline", "2026-03-01T11:30:00+02:00").unwrap();
        assert_eq!(utc, shifted);
    }

    #[test]
    fn format_uses_millisecond_utc() {
        let ms = parse_timestamp("createdAt", "2026-03-01T09:30:00.250Z").unwrap();
        assert_eq!(
            format_timestamp("createdAt", ms).unwrap(),
            "2026-03-01T09:30:00.250Z"
        );
    }

    #[test]
    fn date_only_is_rejected() {
        assert!(parse_timestamp("deadline", "2026-03-01").is_err());
    }
}
