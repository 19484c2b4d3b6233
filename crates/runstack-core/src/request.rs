//! Stack request model and validation

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single template parameter contributed by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackParam {
    #[serde(rename = "ParameterKey")]
    pub key: String,

    #[serde(rename = "ParameterValue")]
    pub value: String,
}

impl StackParam {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Where the stack template comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Read the template body from a file
    Path(PathBuf),
    /// Use the given document verbatim
    Body(String),
}

impl TemplateSource {
    pub fn is_empty(&self) -> bool {
        match self {
            TemplateSource::Path(path) => path.as_os_str().is_empty(),
            TemplateSource::Body(body) => body.is_empty(),
        }
    }
}

/// Declarative description of one provisioning run
///
/// Built once from the caller's attributes, validated, then handed to the
/// [`Provisioner`](crate::provision::Provisioner). Parameters keep their
/// order and are never deduplicated; the orchestration service decides what
/// duplicate keys mean.
#[derive(Debug, Clone)]
pub struct StackRequest {
    /// Stack name, unique within the target account/region
    pub name: String,

    /// Template file or inline document
    pub template: TemplateSource,

    /// Ordered template parameters
    pub params: Vec<StackParam>,

    /// Raw comma-separated capability tokens, if any
    pub capabilities: Option<String>,

    /// Create the stack when the existence probe reports it missing
    pub update_on_conflict: bool,
}

impl StackRequest {
    pub fn new(name: impl Into<String>, template: TemplateSource) -> Self {
        Self {
            name: name.into(),
            template,
            params: Vec::new(),
            capabilities: None,
            update_on_conflict: false,
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(StackParam::new(key, value));
        self
    }

    pub fn with_params(mut self, params: Vec<StackParam>) -> Self {
        self.params = params;
        self
    }

    pub fn with_capabilities(mut self, raw: impl Into<String>) -> Self {
        self.capabilities = Some(raw.into());
        self
    }

    pub fn update_on_conflict(mut self, update: bool) -> Self {
        self.update_on_conflict = update;
        self
    }

    /// Check the required attributes before any service call is made
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.template.is_empty() {
            return Err(ConfigError::MissingTemplatePath);
        }

        if self.name.is_empty() {
            return Err(ConfigError::MissingStackName);
        }

        Ok(())
    }

    /// Capability tokens split out of the raw string
    ///
    /// The string is split on commas verbatim: no trimming, no
    /// deduplication, empty tokens pass through. An absent or empty string
    /// yields `None` so the payload omits the capabilities field entirely.
    pub fn capability_list(&self) -> Option<Vec<String>> {
        match self.capabilities.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.split(',').map(str::to_string).collect()),
        }
    }
}
