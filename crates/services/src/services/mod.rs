pub mod database_validator;
pub mod project;
pub mod task;
pub mod validation;
