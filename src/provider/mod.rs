//! # Provider Modules
//!
//! The secret store gateway: a thin, stateless operation set over the remote
//! secret storage backend. The reconciler only talks to [`SecretStore`], so
//! the AWS implementation can be swapped for an in-memory store in tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

pub mod aws;

pub use aws::AwsSecretsManager;

/// Current remote state of a secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteSecret {
    /// The backend reported that no secret with this name exists
    Absent,
    /// The secret exists; `value` is `None` when it only holds binary data
    Present { value: Option<String> },
}

/// A tag attached to a secret at creation time
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SecretTag {
    pub key: String,
    pub value: String,
}

/// Declared tags as key/value pairs, in key order
pub fn tag_pairs(tags: &BTreeMap<String, String>) -> Vec<SecretTag> {
    tags.iter()
        .map(|(key, value)| SecretTag {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

/// Failures reported by a secret store operation
///
/// "Not found" is not an error: [`SecretStore::fetch_current`] reports it as
/// [`RemoteSecret::Absent`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("failed to describe secret {name}: {message}")]
    Describe { name: String, message: String },
    #[error("failed to create secret {name}: {message}")]
    Create { name: String, message: String },
    #[error("failed to update secret {name}: {message}")]
    Update { name: String, message: String },
}

/// Gateway over a remote secret store
///
/// Implementations keep no state between calls and make a single attempt per
/// operation.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the current value of a secret
    async fn fetch_current(&self, secret_name: &str) -> Result<RemoteSecret, ProviderError>;

    /// Create a secret with its tags
    /// `kms_key_id` is forwarded only when `Some`; otherwise the backend default key applies
    async fn create_secret(
        &self,
        secret_name: &str,
        secret_value: &str,
        tags: &[SecretTag],
        kms_key_id: Option<&str>,
    ) -> Result<(), ProviderError>;

    /// Replace the value of an existing secret; tags are left untouched
    async fn update_secret(
        &self,
        secret_name: &str,
        secret_value: &str,
        kms_key_id: Option<&str>,
    ) -> Result<(), ProviderError>;
}
