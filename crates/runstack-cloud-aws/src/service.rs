//! CloudFormation-backed stack service

use crate::error::AwsError;
use async_trait::async_trait;
use aws_sdk_cloudformation::Client;
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_cloudformation::types::{Capability, Parameter};
use runstack_core::{ServiceError, StackInfo, StackPayload, StackService};

/// CloudFormation client wrapper implementing [`StackService`]
pub struct CloudFormationService {
    client: Client,
}

impl CloudFormationService {
    /// Load the ambient AWS configuration and build a client
    pub async fn new() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: Client::new(&config),
        }
    }

    /// Wrap an existing CloudFormation client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    fn parameters(payload: &StackPayload) -> Vec<Parameter> {
        payload
            .parameters
            .iter()
            .map(|p| {
                Parameter::builder()
                    .parameter_key(&p.key)
                    .parameter_value(&p.value)
                    .build()
            })
            .collect()
    }

    fn capabilities(payload: &StackPayload) -> Option<Vec<Capability>> {
        payload
            .capabilities
            .as_ref()
            .map(|caps| caps.iter().map(|c| Capability::from(c.as_str())).collect())
    }
}

fn map_sdk_err<E>(stack: &str, err: SdkError<E>) -> ServiceError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let full = DisplayErrorContext(&err).to_string();
    AwsError::classify(stack, err.code(), err.message(), full).into()
}

#[async_trait]
impl StackService for CloudFormationService {
    fn name(&self) -> &str {
        "aws-cloudformation"
    }

    async fn describe_stack(&self, name: &str) -> Result<StackInfo, ServiceError> {
        let output = self
            .client
            .describe_stacks()
            .stack_name(name)
            .send()
            .await
            .map_err(|err| map_sdk_err(name, err))?;

        let stack = output.stacks().first();
        Ok(StackInfo {
            stack_id: stack.and_then(|s| s.stack_id().map(str::to_string)),
            status: stack.and_then(|s| s.stack_status().map(|st| st.as_str().to_string())),
        })
    }

    async fn create_stack(&self, payload: &StackPayload) -> Result<(), ServiceError> {
        tracing::info!(stack = %payload.stack_name, "creating CloudFormation stack");

        self.client
            .create_stack()
            .stack_name(&payload.stack_name)
            .template_body(&payload.template_body)
            .set_parameters(Some(Self::parameters(payload)))
            .set_capabilities(Self::capabilities(payload))
            .send()
            .await
            .map_err(|err| map_sdk_err(&payload.stack_name, err))?;

        Ok(())
    }

    async fn update_stack(&self, payload: &StackPayload) -> Result<(), ServiceError> {
        tracing::info!(stack = %payload.stack_name, "updating CloudFormation stack");

        self.client
            .update_stack()
            .stack_name(&payload.stack_name)
            .template_body(&payload.template_body)
            .set_parameters(Some(Self::parameters(payload)))
            .set_capabilities(Self::capabilities(payload))
            .send()
            .await
            .map_err(|err| map_sdk_err(&payload.stack_name, err))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runstack_core::StackParam;

    fn payload(capabilities: Option<Vec<String>>) -> StackPayload {
        StackPayload {
            stack_name: "my-stack".to_string(),
            template_body: "{}".to_string(),
            parameters: vec![StackParam::new("Env", "prod"), StackParam::new("Env", "dev")],
            capabilities,
        }
    }

    #[test]
    fn test_parameters_keep_order_and_duplicates() {
        let params = CloudFormationService::parameters(&payload(None));
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].parameter_key(), Some("Env"));
        assert_eq!(params[0].parameter_value(), Some("prod"));
        assert_eq!(params[1].parameter_value(), Some("dev"));
    }

    #[test]
    fn test_capabilities_pass_through_verbatim() {
        let caps = CloudFormationService::capabilities(&payload(Some(vec![
            "CAPABILITY_IAM".to_string(),
            "CAPABILITY_NAMED_IAM".to_string(),
        ])))
        .unwrap();

        assert_eq!(caps[0].as_str(), "CAPABILITY_IAM");
        assert_eq!(caps[1].as_str(), "CAPABILITY_NAMED_IAM");
    }

    #[test]
    fn test_absent_capabilities_stay_absent() {
        assert!(CloudFormationService::capabilities(&payload(None)).is_none());
    }
}
