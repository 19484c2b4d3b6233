//! Stack provisioning engine
//!
//! One run: validate the request, probe for the stack, dispatch create or
//! update, then poll the remote status until it reaches a terminal state.

use crate::error::{ProvisionError, Result, ServiceError};
use crate::request::{StackRequest, TemplateSource};
use crate::service::{StackPayload, StackService};
use crate::status::{StackProgress, classify};
use std::time::Duration;
use tokio::time::{Instant, sleep};

/// Polling behavior for the readiness loop
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between successive status checks
    pub interval: Duration,

    /// Give up after this many status checks (`None` = unbounded)
    pub max_attempts: Option<u32>,

    /// Give up once this much wall time has elapsed (`None` = unbounded)
    pub timeout: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            max_attempts: None,
            timeout: None,
        }
    }
}

/// Drives one create-or-update run against a [`StackService`]
///
/// The service is injected at construction; the provisioner holds no other
/// state. Every poll sleep is a tokio await point, so dropping the run
/// future (e.g. from a `select!` against a shutdown signal) cancels the
/// loop promptly.
pub struct Provisioner<S: StackService> {
    service: S,
    poll: PollConfig,
}

impl<S: StackService> Provisioner<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            poll: PollConfig::default(),
        }
    }

    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Run the full provisioning sequence for one request
    pub async fn run(&self, request: &StackRequest) -> Result<()> {
        request.validate()?;

        tracing::debug!(
            service = self.service.name(),
            stack = %request.name,
            "starting provisioning run"
        );

        let payload = self.build_payload(request).await?;

        // A successful probe always updates; the probe's not-found branch
        // carries the create-vs-reject decision.
        match self.service.describe_stack(&request.name).await {
            Ok(_) => {
                tracing::info!(stack = %request.name, "stack exists, updating");
                self.service.update_stack(&payload).await?;
            }
            Err(ServiceError::StackNotFound(_)) => {
                if request.update_on_conflict {
                    tracing::info!(stack = %request.name, "stack not found, creating");
                    self.service.create_stack(&payload).await?;
                } else {
                    return Err(ProvisionError::StackExistsConflict {
                        name: request.name.clone(),
                    });
                }
            }
            Err(err) => return Err(err.into()),
        }

        self.wait_until_ready(&request.name).await
    }

    async fn build_payload(&self, request: &StackRequest) -> Result<StackPayload> {
        let template_body = match &request.template {
            TemplateSource::Path(path) => tokio::fs::read_to_string(path).await?,
            TemplateSource::Body(body) => body.clone(),
        };

        Ok(StackPayload {
            stack_name: request.name.clone(),
            template_body,
            parameters: request.params.clone(),
            capabilities: request.capability_list(),
        })
    }

    /// Poll the stack status until it settles
    async fn wait_until_ready(&self, name: &str) -> Result<()> {
        let started = Instant::now();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            if let StackProgress::Complete = self.check_stack(name).await? {
                tracing::info!(stack = %name, attempts, "stack is ready");
                return Ok(());
            }

            let attempts_exhausted = self.poll.max_attempts.is_some_and(|max| attempts >= max);
            let deadline_passed = self.poll.timeout.is_some_and(|t| started.elapsed() >= t);
            if attempts_exhausted || deadline_passed {
                return Err(ProvisionError::TimedOut {
                    name: name.to_string(),
                    attempts,
                });
            }

            tracing::info!(stack = %name, "Waiting for stack provisioning...");
            sleep(self.poll.interval).await;
        }
    }

    async fn check_stack(&self, name: &str) -> Result<StackProgress> {
        match self.service.describe_stack(name).await {
            Ok(info) => match classify(info.status.as_deref()) {
                StackProgress::Failed => Err(ProvisionError::ProvisioningFailed {
                    name: name.to_string(),
                    status: info.status.unwrap_or_default(),
                }),
                progress => Ok(progress),
            },
            Err(err) => {
                // The service can briefly lose sight of a stack it is still
                // working on; treat describe failures mid-poll as progress
                // not yet visible.
                tracing::debug!(stack = %name, error = %err, "describe failed mid-poll, retrying");
                Ok(StackProgress::InProgress)
            }
        }
    }
}
