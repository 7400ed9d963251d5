//! # AWS Secrets Manager Operations
//!
//! Implements [`SecretStore`] for AWS Secrets Manager.

use crate::provider::{ProviderError, RemoteSecret, SecretStore, SecretTag};
use async_trait::async_trait;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::types::Tag;
use std::time::Instant;
use tracing::{debug, field, info, info_span, warn, Instrument};

use super::AwsSecretsManager;

#[async_trait]
impl SecretStore for AwsSecretsManager {
    async fn fetch_current(&self, secret_name: &str) -> Result<RemoteSecret, ProviderError> {
        let span = tracing::debug_span!(
            "aws.secret.get",
            secret.name = secret_name,
            region = self.region,
            operation.found = field::Empty,
            operation.duration_ms = field::Empty,
        );
        let span_clone = span.clone();
        let start = Instant::now();

        async move {
            let result = self
                .client
                .get_secret_value()
                .secret_id(secret_name)
                .send()
                .await;
            span_clone.record("operation.duration_ms", start.elapsed().as_millis() as u64);

            match result {
                Ok(output) => {
                    span_clone.record("operation.found", true);
                    if output.secret_string().is_none() {
                        debug!(
                            provider = "aws",
                            secret_name = secret_name,
                            "AWS secret {} has no string value",
                            secret_name
                        );
                    }
                    Ok(RemoteSecret::Present {
                        value: output.secret_string().map(ToString::to_string),
                    })
                }
                Err(e)
                    if e
                        .as_service_error()
                        .is_some_and(GetSecretValueError::is_resource_not_found_exception) =>
                {
                    span_clone.record("operation.found", false);
                    Ok(RemoteSecret::Absent)
                }
                Err(e) => Err(ProviderError::Describe {
                    name: secret_name.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                }),
            }
        }
        .instrument(span)
        .await
    }

    async fn create_secret(
        &self,
        secret_name: &str,
        secret_value: &str,
        tags: &[SecretTag],
        kms_key_id: Option<&str>,
    ) -> Result<(), ProviderError> {
        let span = info_span!(
            "aws.secret.create",
            secret.name = secret_name,
            region = self.region,
            operation.success = field::Empty,
            operation.duration_ms = field::Empty,
        );
        let span_clone = span.clone();
        let start = Instant::now();

        async move {
            info!(
                provider = "aws",
                region = self.region,
                secret_name = secret_name,
                operation = "create",
                tags = tags.len(),
                kms = kms_key_id.is_some(),
                "Creating AWS secret: region={}, secret={}",
                self.region,
                secret_name
            );

            let aws_tags: Vec<Tag> = tags
                .iter()
                .map(|tag| Tag::builder().key(&tag.key).value(&tag.value).build())
                .collect();

            let mut request = self
                .client
                .create_secret()
                .name(secret_name)
                .secret_string(secret_value)
                .set_kms_key_id(kms_key_id.map(ToString::to_string));
            if !aws_tags.is_empty() {
                request = request.set_tags(Some(aws_tags));
            }

            let result = request.send().await;
            span_clone.record("operation.duration_ms", start.elapsed().as_millis() as u64);
            span_clone.record("operation.success", result.is_ok());

            result.map(|_| ()).map_err(|e| {
                warn!(
                    provider = "aws",
                    region = self.region,
                    secret_name = secret_name,
                    operation = "create",
                    error = %DisplayErrorContext(&e),
                    "Failed to create AWS secret"
                );
                ProviderError::Create {
                    name: secret_name.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                }
            })
        }
        .instrument(span)
        .await
    }

    async fn update_secret(
        &self,
        secret_name: &str,
        secret_value: &str,
        kms_key_id: Option<&str>,
    ) -> Result<(), ProviderError> {
        let span = info_span!(
            "aws.secret.update",
            secret.name = secret_name,
            region = self.region,
            operation.success = field::Empty,
            operation.duration_ms = field::Empty,
        );
        let span_clone = span.clone();
        let start = Instant::now();

        async move {
            info!(
                provider = "aws",
                region = self.region,
                secret_name = secret_name,
                operation = "update",
                kms = kms_key_id.is_some(),
                "Updating AWS secret: region={}, secret={}",
                self.region,
                secret_name
            );

            // UpdateSecret creates a new version; tags are never sent here
            let result = self
                .client
                .update_secret()
                .secret_id(secret_name)
                .secret_string(secret_value)
                .set_kms_key_id(kms_key_id.map(ToString::to_string))
                .send()
                .await;
            span_clone.record("operation.duration_ms", start.elapsed().as_millis() as u64);
            span_clone.record("operation.success", result.is_ok());

            result.map(|_| ()).map_err(|e| {
                warn!(
                    provider = "aws",
                    region = self.region,
                    secret_name = secret_name,
                    operation = "update",
                    error = %DisplayErrorContext(&e),
                    "Failed to update AWS secret"
                );
                ProviderError::Update {
                    name: secret_name.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                }
            })
        }
        .instrument(span)
        .await
    }
}
