//! Drop the configured database if it exists.

use deployment::DeploymentConfig;
use sqlx::{Sqlite, migrate::MigrateDatabase};
use tracing::info;
use utils::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let config = DeploymentConfig::from_env()?;
    let url = config.database.url();
    let name = &config.database.database;

    if Sqlite::database_exists(&url).await? {
        Sqlite::drop_database(&url).await?;
        info!("Database '{}' dropped.", name);
    } else {
        info!("Database '{}' already dropped.", name);
    }

    Ok(())
}
