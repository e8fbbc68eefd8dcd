use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::DeploymentImpl;

pub mod health;
pub mod projects;
pub mod tasks;

pub fn router(deployment: DeploymentImpl) -> Router {
    Router::new()
        .merge(health::router())
        .merge(tasks::router())
        .merge(projects::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(deployment)
}
