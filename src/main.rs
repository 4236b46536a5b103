use anyhow::Result;
use clap::Parser;
use job_portal::cli::{handle_command, Cli, Command};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("job_portal=info,jobby=info"));

    // stderr keeps stdout clean for the JSON printed by the CLI commands
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    init_logging(config.logging.json);
    match &config.source {
        Some(path) => info!(
            "Configuration loaded from {} for environment: {}",
            path.display(),
            config.environment
        ),
        None => info!(
            "{} not found, using defaults for environment: {}",
            cli.config.display(),
            config.environment
        ),
    }

    let command = cli.command.unwrap_or(Command::Serve { port: None });
    handle_command(command, config).await
}
