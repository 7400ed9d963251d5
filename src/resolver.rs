//! # Value Resolver
//!
//! Turns a declared secret's source into the single string payload stored in
//! the secret store.
//!
//! Precedence when more than one source is present: `key_value`, then `file`,
//! then `plaintext`. Key/value maps are serialized from a `BTreeMap`, so the
//! JSON keys are always sorted and the payload is canonical: the same logical
//! map always produces the same bytes, keeping change detection stable.

use crate::config::DeclaredSecret;
use crate::constants::MAX_SECRET_SIZE_BYTES;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Reasons a secret's value cannot be resolved
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to serialize key_value for secret {name}: {source}")]
    Serialization {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("value for secret {name} is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge {
        name: String,
        size: usize,
        limit: usize,
    },
}

/// Resolve the payload for one declared secret
pub async fn resolve_value(name: &str, secret: &DeclaredSecret) -> Result<String, ResolveError> {
    if secret.source_count() > 1 && secret.plaintext().is_some() {
        warn!(
            secret_name = name,
            "Secret declares plaintext alongside another source; plaintext is ignored"
        );
    }

    let value = if let Some(key_value) = &secret.key_value {
        serde_json::to_string(key_value).map_err(|source| ResolveError::Serialization {
            name: name.to_string(),
            source,
        })?
    } else if let Some(path) = secret.file() {
        debug!(secret_name = name, path = %path.display(), "Reading secret value from file");
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ResolveError::FileRead {
                path: path.to_path_buf(),
                source,
            })?
    } else {
        secret.plaintext.clone().unwrap_or_default()
    };

    if value.len() > MAX_SECRET_SIZE_BYTES {
        return Err(ResolveError::TooLarge {
            name: name.to_string(),
            size: value.len(),
            limit: MAX_SECRET_SIZE_BYTES,
        });
    }

    Ok(value)
}
