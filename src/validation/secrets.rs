//! # Declared Secret Validation
//!
//! Source and tag rules for a single declared secret.

use super::{validate_secret_name, ValidationError};
use crate::config::DeclaredSecret;

/// Validate one declared secret
///
/// Rules, in order:
/// 1. `key_value` and `file` are mutually exclusive
/// 2. at least one of `key_value`, `file`, `plaintext` is set
/// 3. every tag key and value is non-empty
/// 4. (strict only) `plaintext` is not combined with another source
/// 5. (strict only) the name follows the secret store naming rules
///
/// Outside strict mode any name is accepted and left for the backend to judge.
pub fn validate_secret(
    name: &str,
    secret: &DeclaredSecret,
    strict_sources: bool,
) -> Result<(), ValidationError> {
    if secret.has_key_value() && secret.file().is_some() {
        return Err(ValidationError::ConflictingSources {
            name: name.to_string(),
        });
    }

    if secret.source_count() == 0 {
        return Err(ValidationError::MissingSource {
            name: name.to_string(),
        });
    }

    if secret
        .tags
        .iter()
        .any(|(key, value)| key.is_empty() || value.is_empty())
    {
        return Err(ValidationError::InvalidTag {
            name: name.to_string(),
        });
    }

    if strict_sources && secret.plaintext().is_some() {
        let other = if secret.has_key_value() {
            Some("key_value")
        } else if secret.file().is_some() {
            Some("file")
        } else {
            None
        };
        if let Some(other) = other {
            return Err(ValidationError::AmbiguousSource {
                name: name.to_string(),
                other,
            });
        }
    }

    if strict_sources {
        validate_secret_name(name)?;
    }

    Ok(())
}
