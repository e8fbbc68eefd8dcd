//! Create the configured database if it does not exist, then apply migrations.

use db::DBService;
use deployment::DeploymentConfig;
use services::services::database_validator::DatabaseValidator;
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
        info!("Database '{}' already exists.", name);
    } else {
        Sqlite::create_database(&url).await?;
        info!("Database '{}' created.", name);
    }

    let db = DBService::new(&url).await?;
    let validation = DatabaseValidator::new(db.pool.clone()).validate().await?;
    info!("{}", validation.summary());
    db.pool.close().await;

    Ok(())
}
