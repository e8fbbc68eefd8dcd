use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Executor, FromRow, Sqlite, SqlitePool};
use ts_rs::TS;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub due_date: DateTime<Utc>,
    pub description: Option<String>,
    pub tags: Option<String>, // Comma-separated by convention
    pub priority: i32,        // 1 = low, 2 = medium, 3 = high
    pub project_id: Option<i64>, // Foreign key to Project, cascades on delete
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateTask {
    pub title: String,
    #[serde(deserialize_with = "utils::datetime::deserialize")]
    #[ts(type = "string")]
    pub due_date: DateTime<Utc>,
    pub priority: i32,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub project_id: Option<i64>,
}

impl CreateTask {
    pub fn new(title: impl Into<String>, due_date: DateTime<Utc>, priority: i32) -> Self {
        Self {
            title: title.into(),
            due_date,
            priority,
            description: None,
            tags: None,
            project_id: None,
        }
    }

    pub fn in_project(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }
}

/// Patch payload. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateTask {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "utils::datetime::deserialize_option")]
    #[ts(type = "string | null")]
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<i32>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub project_id: Option<i64>,
    pub is_done: Option<bool>,
}

impl Task {
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"SELECT id, title, due_date, description, tags, priority, project_id, is_done, created_at, updated_at
               FROM tasks"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"SELECT id, title, due_date, description, tags, priority, project_id, is_done, created_at, updated_at
               FROM tasks
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreateTask) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"INSERT INTO tasks (title, due_date, description, tags, priority, project_id, is_done)
               VALUES ($1, $2, $3, $4, $5, $6, FALSE)
               RETURNING id, title, due_date, description, tags, priority, project_id, is_done, created_at, updated_at"#,
        )
        .bind(&data.title)
        .bind(data.due_date)
        .bind(&data.description)
        .bind(&data.tags)
        .bind(data.priority)
        .bind(data.project_id)
        .fetch_one(pool)
        .await
    }

    /// Apply `data` to the row and return it as persisted, or `None` when no row has `id`.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"UPDATE tasks
               SET title       = COALESCE($2, title),
                   due_date    = COALESCE($3, due_date),
                   priority    = COALESCE($4, priority),
                   description = COALESCE($5, description),
                   tags        = COALESCE($6, tags),
                   project_id  = COALESCE($7, project_id),
                   is_done     = COALESCE($8, is_done),
                   updated_at  = datetime('now', 'subsec')
               WHERE id = $1
               RETURNING id, title, due_date, description, tags, priority, project_id, is_done, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(data.due_date)
        .bind(data.priority)
        .bind(&data.description)
        .bind(&data.tags)
        .bind(data.project_id)
        .bind(data.is_done)
        .fetch_optional(pool)
        .await
    }

    /// Flip `is_done` in a single statement so concurrent toggles cannot lose an update.
    pub async fn toggle_done(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"UPDATE tasks
               SET is_done = NOT is_done, updated_at = datetime('now', 'subsec')
               WHERE id = $1
               RETURNING id, title, due_date, description, tags, priority, project_id, is_done, created_at, updated_at"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete<'e, E>(executor: E, id: i64) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Remove every task. Used by the seeder before inserting demo rows.
    pub async fn delete_all<'e, E>(executor: E) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tasks").execute(executor).await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{
        DBService,
        models::project::{CreateProject, Project},
    };

    fn due() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_sets_defaults() {
        let db = DBService::new_in_memory().await.unwrap();
        let task = Task::create(&db.pool, &CreateTask::new("T1", due(), 2))
            .await
            .unwrap();

        assert!(task.id > 0);
        assert!(!task.is_done);
        assert_eq!(task.due_date, due());
        assert_eq!(task.project_id, None);

        let all = Task::find_all(&db.pool).await.unwrap();
        assert_eq!(all, vec![task]);
    }

    #[tokio::test]
    async fn test_create_with_unknown_project_violates_foreign_key() {
        let db = DBService::new_in_memory().await.unwrap();
        let result = Task::create(&db.pool, &CreateTask::new("T1", due(), 1).in_project(42)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_update_keeps_absent_fields() {
        let db = DBService::new_in_memory().await.unwrap();
        let mut data = CreateTask::new("T1", due(), 1);
        data.tags = Some("home,errands".to_string());
        let task = Task::create(&db.pool, &data).await.unwrap();

        let patch = UpdateTask {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let updated = Task::update(&db.pool, task.id, &patch)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.tags.as_deref(), Some("home,errands"));
        assert_eq!(updated.priority, 1);
        assert_eq!(updated.due_date, due());
    }

    #[tokio::test]
    async fn test_update_missing_row_returns_none() {
        let db = DBService::new_in_memory().await.unwrap();
        let patch = UpdateTask {
            title: Some("x".to_string()),
            ..Default::default()
        };
        assert!(Task::update(&db.pool, 999_999, &patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_toggle_done_is_its_own_inverse() {
        let db = DBService::new_in_memory().await.unwrap();
        let task = Task::create(&db.pool, &CreateTask::new("T1", due(), 2))
            .await
            .unwrap();

        let once = Task::toggle_done(&db.pool, task.id).await.unwrap().unwrap();
        assert!(once.is_done);
        let twice = Task::toggle_done(&db.pool, task.id).await.unwrap().unwrap();
        assert!(!twice.is_done);

        assert!(Task::toggle_done(&db.pool, 12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_and_toggle_agree_on_flag() {
        let db = DBService::new_in_memory().await.unwrap();
        let task = Task::create(&db.pool, &CreateTask::new("T1", due(), 2))
            .await
            .unwrap();

        let patch = UpdateTask {
            is_done: Some(true),
            ..Default::default()
        };
        Task::update(&db.pool, task.id, &patch).await.unwrap();
        let toggled = Task::toggle_done(&db.pool, task.id).await.unwrap().unwrap();
        assert!(!toggled.is_done);

        let stored = Task::find_by_id(&db.pool, task.id).await.unwrap().unwrap();
        assert_eq!(stored.is_done, toggled.is_done);
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = DBService::new_in_memory().await.unwrap();
        let task = Task::create(&db.pool, &CreateTask::new("T1", due(), 2))
            .await
            .unwrap();

        assert_eq!(Task::delete(&db.pool, task.id).await.unwrap(), 1);
        assert_eq!(Task::delete(&db.pool, task.id).await.unwrap(), 0);
        assert!(Task::find_all(&db.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_project_delete_cascades_to_tasks() {
        let db = DBService::new_in_memory().await.unwrap();
        let project = Project::create(&db.pool, &CreateProject::new("Alpha"))
            .await
            .unwrap();
        let owned = Task::create(&db.pool, &CreateTask::new("Owned", due(), 1).in_project(project.id))
            .await
            .unwrap();
        let loose = Task::create(&db.pool, &CreateTask::new("Loose", due(), 1))
            .await
            .unwrap();

        let stored = Task::find_by_id(&db.pool, owned.id).await.unwrap().unwrap();
        assert_eq!(stored.project_id, Some(project.id));

        assert_eq!(Project::delete(&db.pool, project.id).await.unwrap(), 1);

        assert!(Task::find_by_id(&db.pool, owned.id).await.unwrap().is_none());
        assert_eq!(Task::find_all(&db.pool).await.unwrap(), vec![loose]);
    }
}
