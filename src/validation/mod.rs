//! # Validation
//!
//! Checks the declared secrets before any remote call is made.
//!
//! Validation is fail-fast: the first invalid secret aborts the run and no
//! secret is touched.

mod names;
mod secrets;

pub use names::validate_secret_name;
pub use secrets::validate_secret;

use crate::config::SecretsDocument;
use thiserror::Error;
use tracing::debug;

/// Reasons a declared secret is rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// `key_value` and `file` are both set
    #[error("secret '{name}' has both key_value and file set, which is not allowed")]
    ConflictingSources { name: String },
    /// None of `key_value`, `file`, `plaintext` is set
    #[error("secret '{name}' must have either key_value, file, or plaintext set")]
    MissingSource { name: String },
    /// A tag key or value is empty
    #[error("secret '{name}' has invalid tag. Tags must not be empty")]
    InvalidTag { name: String },
    /// Strict mode: `plaintext` is combined with another source
    #[error("secret '{name}' sets plaintext together with {other}; only one source may be set")]
    AmbiguousSource { name: String, other: &'static str },
    /// Strict mode: the name is neither a valid secret name nor an ARN
    #[error("secret name '{name}' is invalid: {reason}")]
    InvalidName { name: String, reason: String },
}

impl ValidationError {
    /// Name of the offending secret
    pub fn secret_name(&self) -> &str {
        match self {
            Self::ConflictingSources { name }
            | Self::MissingSource { name }
            | Self::InvalidTag { name }
            | Self::AmbiguousSource { name, .. }
            | Self::InvalidName { name, .. } => name,
        }
    }
}

/// Validate every declared secret, returning the first failure
///
/// With `strict_sources`, `plaintext` combined with `key_value` or `file` is
/// rejected instead of being silently shadowed at resolution time, and names
/// are checked against the Secrets Manager naming rules.
pub fn validate_document(
    document: &SecretsDocument,
    strict_sources: bool,
) -> Result<(), ValidationError> {
    for (name, secret) in &document.secrets {
        validate_secret(name, secret, strict_sources)?;
    }
    debug!(
        secrets = document.secrets.len(),
        strict_sources, "Secrets document is valid"
    );
    Ok(())
}
