//! Routes for projects. Projects cannot be deleted over HTTP.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::Json as ResponseJson,
    routing::{get, put},
};
use db::models::project::{CreateProject, Project, UpdateProject};
use deployment::Deployment;

use crate::{DeploymentImpl, error::ApiError};

/// GET /projects
pub async fn get_projects(
    State(deployment): State<DeploymentImpl>,
) -> Result<ResponseJson<Vec<Project>>, ApiError> {
    let projects = deployment.project_service().list().await?;
    Ok(ResponseJson(projects))
}

/// POST /projects
pub async fn create_project(
    State(deployment): State<DeploymentImpl>,
    payload: Result<Json<CreateProject>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<Project>), ApiError> {
    let Json(payload) = payload?;
    let project = deployment.project_service().add(payload).await?;
    Ok((StatusCode::CREATED, ResponseJson(project)))
}

/// PUT /projects/{id}
pub async fn update_project(
    State(deployment): State<DeploymentImpl>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateProject>, JsonRejection>,
) -> Result<ResponseJson<Project>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let project = deployment.project_service().update(id, payload).await?;
    Ok(ResponseJson(project))
}

pub fn router() -> Router<DeploymentImpl> {
    Router::new()
        .route("/projects", get(get_projects).post(create_project))
        .route("/projects/{id}", put(update_project))
}
