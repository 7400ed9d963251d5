//! # Secret Name Validation
//!
//! Validates secret names against the AWS Secrets Manager naming rules.
//! A full secret ARN is also accepted, since AWS resolves either as a `SecretId`.

use super::ValidationError;
use crate::constants::MAX_SECRET_NAME_LENGTH;
use regex::Regex;
use std::sync::LazyLock;

// ASCII letters, digits and / _ + = . @ -
static SECRET_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9/_+=.@-]+$")
        .expect("Failed to compile secret name regex - this should never happen")
});

// arn:<partition>:secretsmanager:<region>:<account>:secret:<name>
static SECRET_ARN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:aws[a-z-]*:secretsmanager:[a-z0-9-]+:\d{12}:secret:[A-Za-z0-9/_+=.@-]+$")
        .expect("Failed to compile secret ARN regex - this should never happen")
});

/// Validate a secret name
/// Format: ASCII letters, digits, and `/_+=.@-`, or a Secrets Manager ARN
/// Length: 1-512 characters
pub fn validate_secret_name(name: &str) -> Result<(), ValidationError> {
    if SECRET_ARN_REGEX.is_match(name) {
        return Ok(());
    }

    if name.is_empty() {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "name cannot be empty".to_string(),
        });
    }

    if name.len() > MAX_SECRET_NAME_LENGTH {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: format!(
                "exceeds maximum length of {MAX_SECRET_NAME_LENGTH} characters (got {})",
                name.len()
            ),
        });
    }

    if !SECRET_NAME_REGEX.is_match(name) {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "must be a secret ARN or contain only ASCII letters, digits, and /_+=.@-"
                .to_string(),
        });
    }

    Ok(())
}
