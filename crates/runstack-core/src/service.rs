//! Stack service abstraction
//!
//! The orchestration service (CloudFormation or a test double) is injected
//! into the provisioner through this trait, never looked up from ambient
//! state.

use crate::error::ServiceError;
use crate::request::StackParam;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Provider-facing payload for a create or update call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackPayload {
    #[serde(rename = "StackName")]
    pub stack_name: String,

    #[serde(rename = "TemplateBody")]
    pub template_body: String,

    #[serde(rename = "Parameters")]
    pub parameters: Vec<StackParam>,

    /// Present only when the caller supplied capability tokens
    #[serde(rename = "Capabilities", skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
}

/// Read-only view of a remote stack
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StackInfo {
    /// Provider-assigned stack identifier, when reported
    pub stack_id: Option<String>,

    /// Current stack status string, when reported
    pub status: Option<String>,
}

/// Stack orchestration service abstraction
///
/// The three operations the provisioner needs from the control plane. A
/// missing stack must surface as [`ServiceError::StackNotFound`] so the
/// create-vs-update decision is a match on a tagged variant.
#[async_trait]
pub trait StackService: Send + Sync {
    /// Returns the service name for logs (e.g. "aws-cloudformation")
    fn name(&self) -> &str;

    /// Look up the stack and report its current status
    async fn describe_stack(&self, name: &str) -> Result<StackInfo, ServiceError>;

    /// Start provisioning a new stack
    async fn create_stack(&self, payload: &StackPayload) -> Result<(), ServiceError>;

    /// Start updating an existing stack
    async fn update_stack(&self, payload: &StackPayload) -> Result<(), ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_omits_absent_capabilities() {
        let payload = StackPayload {
            stack_name: "my-stack".to_string(),
            template_body: "{}".to_string(),
            parameters: vec![StackParam::new("Env", "prod")],
            capabilities: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("Capabilities").is_none());
        assert_eq!(value["Parameters"][0]["ParameterKey"], "Env");
    }

    #[test]
    fn test_payload_keeps_supplied_capabilities() {
        let payload = StackPayload {
            stack_name: "my-stack".to_string(),
            template_body: "{}".to_string(),
            parameters: Vec::new(),
            capabilities: Some(vec!["CAPABILITY_IAM".to_string()]),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["Capabilities"][0], "CAPABILITY_IAM");
    }
}
