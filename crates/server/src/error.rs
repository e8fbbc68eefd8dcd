use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use services::services::{project::ProjectError, task::TaskError};
use thiserror::Error;
use tracing::error;
use utils::response::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error("malformed request body: {0}")]
    Body(#[from] JsonRejection),
    #[error("malformed path: {0}")]
    Path(#[from] PathRejection),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Task(TaskError::NotFound(_)) | ApiError::Project(ProjectError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = if status == StatusCode::NOT_FOUND {
            ErrorResponse::new(self.to_string())
        } else {
            // Validation and storage failures share the generic body; detail stays in the log.
            error!(error = %self, "Request failed");
            ErrorResponse::internal()
        };
        (status, ResponseJson(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            ApiError::from(TaskError::NotFound(1)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ProjectError::NotFound(1)).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_other_failures_map_to_500() {
        assert_eq!(
            ApiError::from(TaskError::Validation("title must not be empty".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(ProjectError::Database(sqlx::Error::PoolTimedOut)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
