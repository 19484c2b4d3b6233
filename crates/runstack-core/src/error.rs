//! Provisioning error types

use thiserror::Error;

/// Request validation errors, raised before any service call
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("You must set the template-path attribute")]
    MissingTemplatePath,

    #[error("You must set the name attribute")]
    MissingStackName,
}

/// Errors reported by a [`StackService`](crate::service::StackService)
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Stack not found: {0}")]
    StackNotFound(String),

    #[error("Stack service API error: {0}")]
    Api(String),
}

/// Errors from a single provisioning run
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Stack {name} already exists")]
    StackExistsConflict { name: String },

    #[error("Failed to run stack {name} ({status})")]
    ProvisioningFailed { name: String, status: String },

    #[error("Gave up waiting for stack {name} after {attempts} status checks")]
    TimedOut { name: String, attempts: u32 },

    #[error("Failed to read template: {0}")]
    Template(#[from] std::io::Error),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
