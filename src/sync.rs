//! # Sync Run
//!
//! Wires the pieces together for one run:
//! load document → validate → connect → reconcile.
//!
//! Validation happens before the session is established, so an invalid
//! document never causes a network call.

use crate::config::{load_document, SecretsDocument, SyncOptions};
use crate::error::SyncError;
use crate::provider::{AwsSecretsManager, SecretStore};
use crate::reconciler::{ReconcileSettings, Reconciler, SyncReport};
use crate::validation::validate_document;
use std::sync::Arc;
use tracing::info;

/// Load and validate the secrets document named by `options`
pub async fn load_validated_document(options: &SyncOptions) -> Result<SecretsDocument, SyncError> {
    let document = load_document(&options.config_path).await?;
    validate_document(&document, options.strict_sources)?;
    Ok(document)
}

/// Reconcile an already validated document against `store`
pub async fn sync_document(
    options: &SyncOptions,
    document: &SecretsDocument,
    store: Arc<dyn SecretStore>,
) -> SyncReport {
    Reconciler::new(store, ReconcileSettings::from(options))
        .reconcile_all(document)
        .await
}

/// Run a full sync against AWS Secrets Manager
pub async fn run(options: &SyncOptions) -> Result<SyncReport, SyncError> {
    let document = load_validated_document(options).await?;
    info!(
        config = %options.config_path.display(),
        secrets = document.secrets.len(),
        "Secrets document loaded and validated"
    );

    let store = AwsSecretsManager::connect(
        &options.profile,
        &options.region,
        options.operation_timeout,
    )
    .await?;

    Ok(sync_document(options, &document, Arc::new(store)).await)
}
