//! # Reconciler
//!
//! Drives one pass over the declared secrets. Each secret is handled
//! independently:
//!
//! 1. Resolve its value
//! 2. Fetch the current remote state
//! 3. Create, update, or skip
//!
//! A failure on one secret is logged and reported, never propagated to its
//! siblings. Only configuration and session errors (handled before the
//! reconciler runs) abort a run.

mod decision;
mod report;

pub use decision::{decide, Action};
pub use report::{SecretOutcome, SecretReport, SyncReport};

use crate::config::{DeclaredSecret, SecretsDocument, SyncOptions};
use crate::provider::{tag_pairs, RemoteSecret, SecretStore};
use crate::resolver::resolve_value;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, error, info, info_span, Instrument};

/// Settings read by every secret reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileSettings {
    /// KMS key forwarded on create/update; `None` uses the backend default
    pub kms_key_id: Option<String>,
    /// Report what would change without writing
    pub dry_run: bool,
    /// Maximum secrets in flight at once
    pub concurrency: usize,
}

impl Default for ReconcileSettings {
    fn default() -> Self {
        Self {
            kms_key_id: None,
            dry_run: false,
            concurrency: crate::constants::DEFAULT_CONCURRENCY,
        }
    }
}

impl From<&SyncOptions> for ReconcileSettings {
    fn from(options: &SyncOptions) -> Self {
        Self {
            kms_key_id: options.kms_key_id.clone(),
            dry_run: options.dry_run,
            concurrency: options.concurrency,
        }
    }
}

#[derive(Clone)]
pub struct Reconciler {
    store: Arc<dyn SecretStore>,
    settings: ReconcileSettings,
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Reconciler {
    pub fn new(store: Arc<dyn SecretStore>, settings: ReconcileSettings) -> Self {
        Self { store, settings }
    }

    /// Reconcile every declared secret
    ///
    /// With `concurrency` of 1 the secrets are processed one at a time.
    /// Callers must not rely on the order secrets are processed in.
    pub async fn reconcile_all(&self, document: &SecretsDocument) -> SyncReport {
        let concurrency = self.settings.concurrency.max(1);
        info!(
            secrets = document.secrets.len(),
            concurrency,
            dry_run = self.settings.dry_run,
            "Starting secret reconciliation"
        );

        let reports: Vec<SecretReport> = stream::iter(&document.secrets)
            .map(|(name, secret)| self.reconcile_secret(name, secret))
            .buffer_unordered(concurrency)
            .collect()
            .await;

        let report = SyncReport::from_reports(reports, self.settings.dry_run);
        info!(
            secrets = report.len(),
            failed = report.failure_count(),
            "Finished secret reconciliation"
        );
        report
    }

    /// Reconcile a single secret
    pub async fn reconcile_secret(&self, name: &str, secret: &DeclaredSecret) -> SecretReport {
        let span = info_span!("secret.reconcile", secret.name = name);
        let outcome = self.reconcile_inner(name, secret).instrument(span).await;
        SecretReport::new(name, outcome)
    }

    async fn reconcile_inner(&self, name: &str, secret: &DeclaredSecret) -> SecretOutcome {
        let value = match resolve_value(name, secret).await {
            Ok(value) => value,
            Err(e) => {
                error!(secret_name = name, error = %e, "Failed to resolve secret value");
                return SecretOutcome::ResolutionFailed(e);
            }
        };

        let tags = tag_pairs(&secret.tags);

        let remote = match self.store.fetch_current(name).await {
            Ok(remote) => remote,
            Err(e) => {
                error!(secret_name = name, error = %e, "Failed to describe secret");
                return SecretOutcome::DescribeFailed(e);
            }
        };

        let action = decide(&remote, &value);
        debug!(
            secret_name = name,
            operation = action.as_str(),
            exists = !matches!(remote, RemoteSecret::Absent),
            "Decided secret action"
        );

        let kms_key_id = self.settings.kms_key_id.as_deref();
        match (action, self.settings.dry_run) {
            (Action::Skip, _) => {
                debug!(secret_name = name, "Secret {} unchanged, skipping update", name);
                SecretOutcome::Unchanged
            }
            (Action::Create, true) => SecretOutcome::WouldCreate,
            (Action::Update, true) => SecretOutcome::WouldUpdate,
            (Action::Create, false) => {
                match self
                    .store
                    .create_secret(name, &value, &tags, kms_key_id)
                    .await
                {
                    Ok(()) => SecretOutcome::Created,
                    Err(e) => {
                        error!(secret_name = name, error = %e, "Failed to create secret");
                        SecretOutcome::CreateFailed(e)
                    }
                }
            }
            (Action::Update, false) => {
                match self.store.update_secret(name, &value, kms_key_id).await {
                    Ok(()) => SecretOutcome::Updated,
                    Err(e) => {
                        error!(secret_name = name, error = %e, "Failed to update secret");
                        SecretOutcome::UpdateFailed(e)
                    }
                }
            }
        }
    }
}
