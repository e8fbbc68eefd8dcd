use axum::{Router, response::Json as ResponseJson, routing::get};

use crate::DeploymentImpl;

pub async fn health_check() -> ResponseJson<&'static str> {
    ResponseJson("Server online")
}

pub fn router() -> Router<DeploymentImpl> {
    Router::new().route("/", get(health_check))
}
