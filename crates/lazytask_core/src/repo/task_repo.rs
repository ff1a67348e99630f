//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `tasks` table.
//! - Return the full task snapshot for list views (no pagination).
//!
//! # Invariants
//! - `update_task` never rewrites `created_at`.
//! - `list_tasks` returns storage order only; display order is applied by
//!   `crate::order`, not by SQL.
//! - Corrupt stored rows surface as `RepoError::InvalidData`, never as input
//!   validation errors.

use crate::db::DbError;
use crate::model::task::{Priority, Task, TaskId, TaskValidationError};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    scheduled_at,
    deadline,
    priority,
    is_completed,
    created_at,
    updated_at
FROM tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Db(DbError),
    NotFound(TaskId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId>;
    fn update_task(&self, task: &Task) -> RepoResult<()>;
    fn get_task(&self, id: &TaskId) -> RepoResult<Option<Task>>;
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
    fn delete_task(&self, id: &TaskId) -> RepoResult<()>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId> {
        task.validate()?;

        self.conn.execute(
            "INSERT INTO tasks (
                id,
                title,
                description,
                scheduled_at,
                deadline,
                priority,
                is_completed,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                task.id.as_str(),
                task.title.as_str(),
                task.description.as_deref(),
                task.scheduled_at,
                task.deadline,
                task.priority.as_str(),
                bool_to_int(task.is_completed),
                task.created_at,
                task.updated_at,
            ],
        )?;

        Ok(task.id.clone())
    }

    fn update_task(&self, task: &Task) -> RepoResult<()> {
        task.validate()?;

        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                title = ?1,
                description = ?2,
                scheduled_at = ?3,
                deadline = ?4,
                priority = ?5,
                is_completed = ?6,
                updated_at = ?7
             WHERE id = ?8;",
            params![
                task.title.as_str(),
                task.description.as_deref(),
                task.scheduled_at,
                task.deadline,
                task.priority.as_str(),
                bool_to_int(task.is_completed),
                task.updated_at,
                task.id.as_str(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(task.id.clone()));
        }

        Ok(())
    }

    fn get_task(&self, id: &TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let row = stmt
            .query_row([id.as_str()], |row| Ok(parse_task_row(row)))
            .optional()?;
        row.transpose()
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY created_at ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn delete_task(&self, id: &TaskId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1;", [id.as_str()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.clone()));
        }

        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let id_text: String = row.get("id")?;
    let id = match TaskId::parse(id_text.as_str()) {
        Ok(id) if id.as_str() == id_text => id,
        _ => {
            return Err(RepoError::InvalidData(format!(
                "invalid id `{id_text}` in tasks.id"
            )));
        }
    };

    let priority_text: String = row.get("priority")?;
    let priority = priority_text.parse::<Priority>().map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid priority `{priority_text}` in tasks.priority"
        ))
    })?;

    let is_completed = match row.get::<_, i64>("is_completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_completed value `{other}` in tasks.is_completed"
            )));
        }
    };

    let task = Task {
        id,
        title: row.get("title")?,
        description: row.get("description")?,
        scheduled_at: row.get("scheduled_at")?,
        deadline: row.get("deadline")?,
        priority,
        is_completed,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    if task.validate().is_err() {
        let id = task.id;
        return Err(RepoError::InvalidData(format!(
            "blank title for task `{id}` in tasks.title"
        )));
    }
    Ok(task)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
