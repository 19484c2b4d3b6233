//! AWS backend error types

use runstack_core::ServiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsError {
    #[error("Stack not found: {0}")]
    StackNotFound(String),

    #[error("CloudFormation API error: {0}")]
    Api(String),
}

impl AwsError {
    /// Classify a CloudFormation error from its code and message
    ///
    /// DescribeStacks reports a missing stack as a generic ValidationError
    /// rather than a typed variant, so detection is on the message shape.
    pub fn classify(stack: &str, code: Option<&str>, message: Option<&str>, full: String) -> Self {
        let missing = code == Some("ValidationError")
            && message.is_some_and(|m| m.contains("does not exist"));

        if missing {
            AwsError::StackNotFound(stack.to_string())
        } else {
            AwsError::Api(full)
        }
    }
}

impl From<AwsError> for ServiceError {
    fn from(err: AwsError) -> Self {
        match err {
            AwsError::StackNotFound(name) => ServiceError::StackNotFound(name),
            AwsError::Api(message) => ServiceError::Api(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_stack_validation_error_is_not_found() {
        let err = AwsError::classify(
            "my-stack",
            Some("ValidationError"),
            Some("Stack with id my-stack does not exist"),
            "service error".to_string(),
        );
        assert!(matches!(err, AwsError::StackNotFound(name) if name == "my-stack"));
    }

    #[test]
    fn test_other_validation_errors_stay_api_errors() {
        let err = AwsError::classify(
            "my-stack",
            Some("ValidationError"),
            Some("Template format error"),
            "service error".to_string(),
        );
        assert!(matches!(err, AwsError::Api(_)));
    }

    #[test]
    fn test_unrelated_errors_stay_api_errors() {
        let err = AwsError::classify(
            "my-stack",
            Some("Throttling"),
            Some("Rate exceeded"),
            "service error".to_string(),
        );
        assert!(matches!(err, AwsError::Api(_)));
    }
}
