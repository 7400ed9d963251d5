//! # Sync Options
//!
//! Process-level settings for one sync run, resolved from the command line
//! and environment before any secret is touched.

use crate::constants::{
    DEFAULT_AWS_PROFILE, DEFAULT_AWS_REGION, DEFAULT_CONCURRENCY, DEFAULT_OPERATION_TIMEOUT_SECS,
};
use std::path::PathBuf;
use std::time::Duration;

/// Resolved options for a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// AWS shared-config profile
    pub profile: String,
    /// AWS region
    pub region: String,
    /// Path to the secrets document
    pub config_path: PathBuf,
    /// KMS key id or alias forwarded on create/update
    /// Never `Some("")`; an empty reference means the backend default key
    pub kms_key_id: Option<String>,
    /// Maximum secrets reconciled at the same time
    pub concurrency: usize,
    /// Timeout applied to each Secrets Manager operation
    pub operation_timeout: Duration,
    /// Compute and report changes without writing them
    pub dry_run: bool,
    /// Reject secrets that declare more than one source
    pub strict_sources: bool,
}

impl SyncOptions {
    /// Options with defaults for everything but the document path
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            profile: DEFAULT_AWS_PROFILE.to_string(),
            region: DEFAULT_AWS_REGION.to_string(),
            config_path: config_path.into(),
            kms_key_id: None,
            concurrency: DEFAULT_CONCURRENCY,
            operation_timeout: Duration::from_secs(DEFAULT_OPERATION_TIMEOUT_SECS),
            dry_run: false,
            strict_sources: false,
        }
    }

    /// Set the KMS key reference, treating an empty or blank value as unset
    #[must_use]
    pub fn with_kms_key(mut self, kms_key_id: Option<String>) -> Self {
        self.kms_key_id = kms_key_id
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        self
    }
}
