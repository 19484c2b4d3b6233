//! runstack core
//!
//! Stack request model, stack service abstraction, and the provisioning
//! engine that drives a CloudFormation-style orchestration service:
//! probe for the stack, dispatch create or update, then poll the remote
//! status until it settles.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                runstack CLI                  │
//! └─────────────────┬───────────────────────────┘
//!                   │ StackRequest
//! ┌─────────────────▼───────────────────────────┐
//! │              runstack-core                   │
//! │  ┌───────────────────────────────────────┐  │
//! │  │  Provisioner                          │  │
//! │  │  validate → probe → create/update     │  │
//! │  │           → poll until terminal       │  │
//! │  └───────────────────────────────────────┘  │
//! │  trait StackService { describe/create/... } │
//! └─────────────────┬───────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────┐
//! │          runstack-cloud-aws                  │
//! │       (aws-sdk-cloudformation)               │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! All stack diffing, dependency resolution, and rollback live inside the
//! remote orchestration service; this crate only observes its status.

pub mod error;
pub mod provision;
pub mod request;
pub mod service;
pub mod status;

// Re-exports
pub use error::{ConfigError, ProvisionError, Result, ServiceError};
pub use provision::{PollConfig, Provisioner};
pub use request::{StackParam, StackRequest, TemplateSource};
pub use service::{StackInfo, StackPayload, StackService};
pub use status::{StackProgress, classify};
