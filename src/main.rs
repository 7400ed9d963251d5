//! # Secret Sync
//!
//! Syncs the secrets declared in a YAML document to AWS Secrets Manager.
//!
//! One status line per successful secret is printed to stdout; failed
//! secrets, logs and errors go to stderr. The process exits non-zero when
//! the document is invalid, the AWS session cannot be established, or any
//! secret fails.

use anyhow::{Context, Result};
use clap::Parser;
use secret_sync::cli::Cli;
use secret_sync::observability::init_logging;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Configure rustls crypto provider FIRST, before any other operations
    // Required for rustls 0.23+ when no default provider is set via features
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        anyhow::bail!("Failed to install rustls crypto provider");
    }

    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format)?;

    let options = cli.into_options();
    info!(
        config = %options.config_path.display(),
        profile = options.profile,
        region = options.region,
        dry_run = options.dry_run,
        "Starting secret sync"
    );

    let report = secret_sync::sync::run(&options)
        .await
        .context("Secret sync aborted")?;

    for secret in report.secrets() {
        if let Some(line) = secret.status_line() {
            println!("{line}");
        }
        if let Some(line) = secret.failure_line() {
            eprintln!("{line}");
        }
    }

    if report.has_failures() {
        error!(
            failed = report.failure_count(),
            total = report.len(),
            "{}",
            report.summary()
        );
        return Ok(ExitCode::FAILURE);
    }

    info!("{}", report.summary());
    Ok(ExitCode::SUCCESS)
}
