use anyhow::Context;
use deployment::Deployment;
use server::{DeploymentImpl, routes};
use services::services::database_validator::DatabaseValidator;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use utils::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info,sqlx=warn");

    let deployment = DeploymentImpl::new()
        .await
        .context("failed to initialise deployment")?;

    let validation = DatabaseValidator::new(deployment.db().pool.clone())
        .validate()
        .await?;
    if validation.is_ok() {
        info!("{}", validation.summary());
    } else {
        warn!("{}", validation.summary());
    }

    let port = deployment.config().server_port;
    let app = routes::router(deployment);

    let listener = match TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Server start error: {}", e);
            std::process::exit(1);
        }
    };

    info!("Server is running on http://localhost:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
