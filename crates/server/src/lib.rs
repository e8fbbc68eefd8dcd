pub mod error;
pub mod routes;

pub type DeploymentImpl = deployment::LocalDeployment;
