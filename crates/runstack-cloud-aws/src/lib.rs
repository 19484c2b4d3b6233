//! AWS CloudFormation backend for runstack
//!
//! Implements [`runstack_core::StackService`] on top of the official AWS
//! SDK. Credentials and region come from the standard chain (environment,
//! shared config, instance metadata).

pub mod error;
pub mod service;

// Re-exports
pub use error::AwsError;
pub use service::CloudFormationService;
