use clap::Parser;
use colored::Colorize;
use runstack_cloud_aws::CloudFormationService;
use runstack_core::{PollConfig, Provisioner, StackParam, StackRequest, TemplateSource};
use std::path::PathBuf;
use std::time::Duration;

/// Provision or update a CloudFormation stack and wait for it to settle
#[derive(Parser)]
#[command(name = "runstack", version)]
#[command(
    about = "Provision or update a CloudFormation stack and wait for it to settle",
    long_about = None
)]
struct Cli {
    /// Stack name
    #[arg(long, env = "RUNSTACK_NAME")]
    name: Option<String>,

    /// Template file to upload
    #[arg(long, env = "RUNSTACK_TEMPLATE", conflicts_with = "template_body")]
    template: Option<PathBuf>,

    /// Inline template document (instead of --template)
    #[arg(long)]
    template_body: Option<String>,

    /// Template parameter (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    params: Vec<StackParam>,

    /// Comma-separated capability acknowledgments (e.g. CAPABILITY_IAM)
    #[arg(long)]
    capabilities: Option<String>,

    /// Create the stack when it does not exist yet
    #[arg(long)]
    update_on_conflict: bool,

    /// Seconds between stack status checks
    #[arg(long, default_value = "3")]
    poll_interval: u64,

    /// Give up after this many status checks
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Give up after this many seconds of polling
    #[arg(long)]
    timeout: Option<u64>,
}

impl Cli {
    fn request(&self) -> StackRequest {
        let template = match (&self.template_body, &self.template) {
            (Some(body), _) => TemplateSource::Body(body.clone()),
            (None, Some(path)) => TemplateSource::Path(path.clone()),
            (None, None) => TemplateSource::Path(PathBuf::new()),
        };

        let mut request = StackRequest::new(self.name.clone().unwrap_or_default(), template)
            .with_params(self.params.clone())
            .update_on_conflict(self.update_on_conflict);

        if let Some(capabilities) = &self.capabilities {
            request = request.with_capabilities(capabilities.clone());
        }

        request
    }

    fn poll_config(&self) -> PollConfig {
        PollConfig {
            interval: Duration::from_secs(self.poll_interval),
            max_attempts: self.max_attempts,
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}

fn parse_param(raw: &str) -> Result<StackParam, String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok(StackParam::new(key, value)),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let request = cli.request();

    // Fail on bad attributes before touching AWS configuration
    request.validate()?;

    let service = CloudFormationService::new().await;
    let provisioner = Provisioner::new(service).with_poll_config(cli.poll_config());

    tokio::select! {
        result = provisioner.run(&request) => match result {
            Ok(()) => {
                println!("{}", format!("Stack {} is ready", request.name).green());
                Ok(())
            }
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                std::process::exit(1);
            }
        },
        _ = tokio::signal::ctrl_c() => {
            // The remote operation keeps running; we only stop watching it.
            eprintln!("{}", "Interrupted, stack operation continues remotely".yellow());
            std::process::exit(130);
        }
    }
}
