//! Replace all tasks with demo data.

use db::{DBService, seed::seed_tasks};
use deployment::DeploymentConfig;
use utils::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let config = DeploymentConfig::from_env()?;
    let db = DBService::new(&config.database.url()).await?;
    seed_tasks(&db.pool).await?;
    db.pool.close().await;

    Ok(())
}
