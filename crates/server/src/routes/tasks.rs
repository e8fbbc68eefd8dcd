//! Routes for tasks.

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
use db::models::task::{CreateTask, Task, UpdateTask};
use deployment::Deployment;
use utils::response::MessageResponse;

use crate::{DeploymentImpl, error::ApiError};

/// GET /tasks
pub async fn get_tasks(
    State(deployment): State<DeploymentImpl>,
) -> Result<ResponseJson<Vec<Task>>, ApiError> {
    let tasks = deployment.task_service().list().await?;
    Ok(ResponseJson(tasks))
}

/// POST /tasks
pub async fn create_task(
    State(deployment): State<DeploymentImpl>,
    payload: Result<Json<CreateTask>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<Task>), ApiError> {
    let Json(payload) = payload?;
    let task = deployment.task_service().add(payload).await?;
    Ok((StatusCode::CREATED, ResponseJson(task)))
}

/// PUT /tasks/{id}
pub async fn update_task(
    State(deployment): State<DeploymentImpl>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTask>, JsonRejection>,
) -> Result<ResponseJson<Task>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let task = deployment.task_service().update(id, payload).await?;
    Ok(ResponseJson(task))
}

/// PUT /tasks/status/{id}
pub async fn toggle_task_status(
    State(deployment): State<DeploymentImpl>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<ResponseJson<Task>, ApiError> {
    let Path(id) = id?;
    let task = deployment.task_service().toggle_status(id).await?;
    Ok(ResponseJson(task))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(deployment): State<DeploymentImpl>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    let Path(id) = id?;
    deployment.task_service().delete(id).await?;
    Ok(ResponseJson(MessageResponse::new("Task deleted successfully.")))
}

pub fn router() -> Router<DeploymentImpl> {
    Router::new()
        .route("/tasks", get(get_tasks).post(create_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
        .route("/tasks/status/{id}", put(toggle_task_status))
}
