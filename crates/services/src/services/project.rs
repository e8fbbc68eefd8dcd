//! Domain operations for projects.

use db::models::project::{CreateProject, Project, UpdateProject};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use super::validation::validate_title;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("Project not found")]
    NotFound(i64),
}

#[derive(Clone)]
pub struct ProjectService {
    pool: SqlitePool,
}

impl ProjectService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn add(&self, data: CreateProject) -> Result<Project, ProjectError> {
        validate_title(&data.title).map_err(ProjectError::Validation)?;

        let project = Project::create(&self.pool, &data).await?;
        info!(project_id = project.id, "Created project");
        Ok(project)
    }

    pub async fn list(&self) -> Result<Vec<Project>, ProjectError> {
        Ok(Project::find_all(&self.pool).await?)
    }

    pub async fn update(&self, id: i64, data: UpdateProject) -> Result<Project, ProjectError> {
        if let Some(title) = &data.title {
            validate_title(title).map_err(ProjectError::Validation)?;
        }

        let project = Project::update(&self.pool, id, &data)
            .await?
            .ok_or(ProjectError::NotFound(id))?;
        info!(project_id = id, "Updated project");
        Ok(project)
    }
}
