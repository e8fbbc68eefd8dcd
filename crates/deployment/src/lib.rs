use std::sync::Arc;

use async_trait::async_trait;
use db::{DBService, DbError};
use services::services::{project::ProjectService, task::TaskService};
use thiserror::Error;

pub mod config;

pub use config::{ConfigError, DatabaseConfig, DeploymentConfig};

#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Db(#[from] DbError),
}

/// Everything a request handler needs. Handlers receive it as axum state.
#[async_trait]
pub trait Deployment: Clone + Send + Sync + 'static {
    async fn new() -> Result<Self, DeploymentError>;

    fn config(&self) -> &DeploymentConfig;

    fn db(&self) -> &DBService;

    fn task_service(&self) -> TaskService {
        TaskService::new(self.db().pool.clone())
    }

    fn project_service(&self) -> ProjectService {
        ProjectService::new(self.db().pool.clone())
    }
}

#[derive(Clone)]
pub struct LocalDeployment {
    config: Arc<DeploymentConfig>,
    db: DBService,
}

impl LocalDeployment {
    pub fn from_parts(config: DeploymentConfig, db: DBService) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }
}

#[async_trait]
impl Deployment for LocalDeployment {
    async fn new() -> Result<Self, DeploymentError> {
        let config = DeploymentConfig::from_env()?;
        let db = DBService::new(&config.database.url()).await?;
        Ok(Self::from_parts(config, db))
    }

    fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    fn db(&self) -> &DBService {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use db::models::project::CreateProject;

    use super::*;

    #[tokio::test]
    async fn test_services_share_the_deployment_pool() {
        let config = DeploymentConfig::from_lookup(|_| None).unwrap();
        let db = DBService::new_in_memory().await.unwrap();
        let deployment = LocalDeployment::from_parts(config, db);

        let created = deployment
            .project_service()
            .add(CreateProject::new("Alpha"))
            .await
            .unwrap();
        let listed = deployment.clone().project_service().list().await.unwrap();

        assert_eq!(listed, vec![created]);
        assert_eq!(deployment.config().server_port, 3001);
        assert!(deployment.task_service().list().await.unwrap().is_empty());
    }
}
