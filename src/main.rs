use anyhow::{Context, Result};
use clap::Parser;
use resume_ats::app_log;
use resume_ats::cli::{handle_command, AtsCli};
use resume_ats::core::ConfigManager;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let json_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_ats=info,rocket=warn")),
        )
        .with(fmt::layer())
        .with(json_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = AtsCli::parse();

    let config = ConfigManager::load(&cli.config)?;
    if let Some(log_file) = &config.environment.log_file {
        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
    }
    init_logging(config.environment.log_file.as_deref())?;

    app_log!(
        info,
        "Environment: {} (config: {})",
        config.environment_name,
        cli.config.display()
    );
    config.ensure_directories().await?;

    handle_command(cli, config).await
}
