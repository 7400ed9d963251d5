//! # AWS Secrets Manager Client
//!
//! Client for interacting with AWS Secrets Manager API.
//!
//! This module provides functionality to:
//! - Establish a session from a shared-config profile and region
//! - Fetch current secret values, distinguishing "not found" from failures
//! - Create secrets (with tags and an optional KMS key) and update their values

mod auth;
mod operations;

use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use std::time::Duration;
use tracing::info;

use crate::error::SyncError;

use self::auth::create_sdk_config;

/// AWS Secrets Manager provider implementation
pub struct AwsSecretsManager {
    pub(crate) client: SecretsManagerClient,
    pub(crate) region: String,
}

impl std::fmt::Debug for AwsSecretsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsManager")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl AwsSecretsManager {
    /// Establish an authenticated Secrets Manager client
    ///
    /// Credentials are resolved once up front so a broken profile fails the
    /// run before any secret is processed.
    pub async fn connect(
        profile: &str,
        region: &str,
        operation_timeout: Duration,
    ) -> Result<Self, SyncError> {
        let sdk_config = create_sdk_config(profile, region, operation_timeout).await?;
        let client = SecretsManagerClient::new(&sdk_config);

        info!(
            provider = "aws",
            profile = profile,
            region = region,
            "Connected to AWS Secrets Manager"
        );

        Ok(Self {
            client,
            region: region.to_string(),
        })
    }
}
