//! # Command Line
//!
//! Flags for the `secret-sync` binary.
//!
//! ## Usage
//!
//! ```bash
//! # Sync secrets.yaml into us-east-1 using the default profile
//! secret-sync --config secrets.yaml
//!
//! # Encrypt with a customer-managed key in another region
//! secret-sync --config secrets.yaml --region eu-west-1 --kms alias/app-secrets
//!
//! # Show what would change without writing anything
//! secret-sync --config secrets.yaml --dry-run
//! ```

use crate::config::SyncOptions;
use crate::constants::{
    DEFAULT_AWS_PROFILE, DEFAULT_AWS_REGION, DEFAULT_CONCURRENCY, DEFAULT_LOG_LEVEL,
    DEFAULT_OPERATION_TIMEOUT_SECS,
};
use crate::observability::LogFormat;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SECRET_SYNC_GIT_HASH"),
    ", built ",
    env!("SECRET_SYNC_BUILD_DATETIME"),
    ")"
);

/// Declaratively sync secrets to AWS Secrets Manager
#[derive(Debug, Parser)]
#[command(
    name = "secret-sync",
    version,
    long_version = LONG_VERSION,
    about = "Create or update AWS Secrets Manager secrets from a YAML document",
    long_about = None
)]
pub struct Cli {
    /// AWS profile to use
    #[arg(long, env = "AWS_PROFILE", default_value = DEFAULT_AWS_PROFILE)]
    pub profile: String,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    pub config: PathBuf,

    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_AWS_REGION)]
    pub region: String,

    /// KMS key ID or alias to use for encrypting the secrets
    #[arg(long, value_name = "KEY")]
    pub kms: Option<String>,

    /// Number of secrets reconciled at the same time
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, value_parser = parse_concurrency)]
    pub concurrency: usize,

    /// Timeout for each Secrets Manager call, in seconds
    #[arg(long, default_value_t = DEFAULT_OPERATION_TIMEOUT_SECS, value_parser = parse_timeout_secs)]
    pub timeout_secs: u64,

    /// Report what would change without creating or updating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Reject secrets that declare more than one source
    #[arg(long)]
    pub strict: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, env = "LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Log format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Resolve the flags into options for a sync run
    pub fn into_options(self) -> SyncOptions {
        SyncOptions {
            profile: self.profile,
            region: self.region,
            config_path: self.config,
            kms_key_id: None,
            concurrency: self.concurrency,
            operation_timeout: Duration::from_secs(self.timeout_secs),
            dry_run: self.dry_run,
            strict_sources: self.strict,
        }
        .with_kms_key(self.kms)
    }
}

fn parse_concurrency(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("concurrency must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid concurrency '{value}': {e}")),
    }
}

fn parse_timeout_secs(value: &str) -> Result<u64, String> {
    match value.parse::<u64>() {
        Ok(0) => Err("timeout must be at least 1 second".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid timeout '{value}': {e}")),
    }
}
