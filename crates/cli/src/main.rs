use artifact_sweeper_domain::{CliOverrides, LogFormat};
use artifact_sweeper_jobs::ArtifactRetentionJob;
use clap::{Parser, ValueEnum};
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "artifact-sweeper")]
#[command(version)]
#[command(about = "Artifact Sweeper - deletes CI job artifacts older than a retention threshold")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// GitLab instance URL (the /api/v4 suffix is added)
    #[arg(long, env = "GITLAB_URL")]
    base_url: Option<String>,

    /// Access token (defaults to the variable named by gitlab.token_env)
    #[arg(long)]
    token: Option<String>,

    /// Project id to sweep; repeat or comma-separate for several
    #[arg(short = 'p', long = "project", value_delimiter = ',')]
    projects: Vec<String>,

    /// Minimum job age in days before its artifacts are deleted
    #[arg(short = 'r', long)]
    retention_days: Option<u32>,

    /// Jobs requested per page (1-100)
    #[arg(long)]
    per_page: Option<u32>,

    /// Report eligible jobs without deleting anything
    #[arg(long)]
    dry_run: bool,

    /// Repeat the sweep every N seconds instead of exiting after one pass
    #[arg(long, value_name = "SECS")]
    interval: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormatArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let cli_overrides = CliOverrides {
        base_url: cli.base_url,
        token: cli.token,
        projects: cli.projects,
        retention_days: cli.retention_days,
        per_page: cli.per_page,
        dry_run: cli.dry_run,
        interval_secs: cli.interval,
        log_level: cli.log_level,
        log_format: cli.log_format.map(LogFormat::from),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // Initialize logging
    bootstrap::init_logging(&config.logging);

    info!("Starting Artifact Sweeper v{}", env!("CARGO_PKG_VERSION"));

    // Dependency Injection - Build all dependencies
    let services = di::Services::new(&config)?;
    let job = ArtifactRetentionJob::new(
        services.cleanup,
        services.token_provider,
        config.cleanup.projects.clone(),
    );

    if config.cleanup.interval_secs == 0 {
        let summaries = job.run_once().await.map_err(|e| {
            error!(error = %e, "Artifact sweep could not start");
            e
        })?;
        return Ok(if bootstrap::report_summaries(&summaries) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        info!("Shutdown signal received");
        signal_token.cancel();
    });

    let job = Arc::new(
        job.with_interval(config.cleanup.interval_secs)
            .with_cancellation(shutdown),
    );
    job.start().await.await?;

    info!("Artifact Sweeper stopped");
    Ok(ExitCode::SUCCESS)
}
