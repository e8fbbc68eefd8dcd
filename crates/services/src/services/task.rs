//! Domain operations for tasks.

use db::models::task::{CreateTask, Task, UpdateTask};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};

use super::validation::{validate_priority, validate_title};

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("Task with ID {0} not found.")]
    NotFound(i64),
}

/// Stateless task operations over an injected pool.
#[derive(Clone)]
pub struct TaskService {
    pool: SqlitePool,
}

impl TaskService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn add(&self, data: CreateTask) -> Result<Task, TaskError> {
        validate_title(&data.title).map_err(TaskError::Validation)?;
        validate_priority(data.priority).map_err(TaskError::Validation)?;

        let task = Task::create(&self.pool, &data).await?;
        info!(task_id = task.id, project_id = ?task.project_id, "Created task");
        Ok(task)
    }

    pub async fn list(&self) -> Result<Vec<Task>, TaskError> {
        let tasks = Task::find_all(&self.pool).await?;
        debug!(count = tasks.len(), "Listed tasks");
        Ok(tasks)
    }

    pub async fn update(&self, id: i64, data: UpdateTask) -> Result<Task, TaskError> {
        if let Some(title) = &data.title {
            validate_title(title).map_err(TaskError::Validation)?;
        }
        if let Some(priority) = data.priority {
            validate_priority(priority).map_err(TaskError::Validation)?;
        }

        let task = Task::update(&self.pool, id, &data)
            .await?
            .ok_or(TaskError::NotFound(id))?;
        info!(task_id = id, "Updated task");
        Ok(task)
    }

    pub async fn toggle_status(&self, id: i64) -> Result<Task, TaskError> {
        let task = Task::toggle_done(&self.pool, id)
            .await?
            .ok_or(TaskError::NotFound(id))?;
        info!(task_id = id, is_done = task.is_done, "Toggled task status");
        Ok(task)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, TaskError> {
        match Task::delete(&self.pool, id).await? {
            0 => Err(TaskError::NotFound(id)),
            _ => {
                info!(task_id = id, "Deleted task");
                Ok(true)
            }
        }
    }
}
