//! Demo data for local development.

use chrono::Utc;
use rand::Rng;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::task::{CreateTask, Task};

pub const SEED_TASK_COUNT: usize = 20;

/// Replace every task with `SEED_TASK_COUNT` demo tasks due now, with random priority 1..=3.
pub async fn seed_tasks(pool: &SqlitePool) -> Result<Vec<Task>, sqlx::Error> {
    let removed = Task::delete_all(pool).await?;
    info!(removed, "Cleared existing tasks");

    let mut tasks = Vec::with_capacity(SEED_TASK_COUNT);
    for i in 1..=SEED_TASK_COUNT {
        let priority = rand::thread_rng().gen_range(1..=3);
        let data = CreateTask {
            title: format!("Task {i}"),
            due_date: Utc::now(),
            priority,
            description: Some(format!("Description for Task {i}")),
            tags: Some(format!("Tag{i}")),
            project_id: None,
        };
        tasks.push(Task::create(pool, &data).await?);
    }

    info!(count = tasks.len(), "Seeded tasks");
    Ok(tasks)
}
