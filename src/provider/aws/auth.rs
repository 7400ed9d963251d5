//! # AWS Session
//!
//! Builds the SDK configuration for a profile/region pair and proves the
//! credentials resolve.

use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use std::time::Duration;
use tracing::debug;

use crate::error::SyncError;

/// Create AWS SDK config using the shared-config profile
///
/// SDK retries are disabled: every operation is a single attempt bounded by
/// `operation_timeout`.
pub(super) async fn create_sdk_config(
    profile: &str,
    region: &str,
    operation_timeout: Duration,
) -> Result<SdkConfig, SyncError> {
    let session_error = |reason: String| SyncError::Session {
        profile: profile.to_string(),
        region: region.to_string(),
        reason,
    };

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .profile_name(profile)
        .region(Region::new(region.to_string()))
        .retry_config(RetryConfig::disabled())
        .timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(operation_timeout)
                .build(),
        )
        .load()
        .await;

    let credentials_provider = sdk_config
        .credentials_provider()
        .ok_or_else(|| session_error("no credentials provider configured".to_string()))?;

    credentials_provider
        .provide_credentials()
        .await
        .map_err(|e| {
            session_error(format!(
                "failed to resolve credentials: {}",
                DisplayErrorContext(&e)
            ))
        })?;

    debug!(profile, region, "Resolved AWS credentials");
    Ok(sdk_config)
}
