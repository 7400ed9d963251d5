//! # Constants
//!
//! Shared constants used throughout the sync tool.
//!
//! These values represent reasonable defaults and can be overridden via
//! command-line flags or environment variables where applicable.

/// Default AWS profile used to build the session
pub const DEFAULT_AWS_PROFILE: &str = "default";

/// Default AWS region for Secrets Manager calls
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Default number of secrets reconciled at the same time
/// 1 keeps processing strictly sequential
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Default timeout for a single Secrets Manager operation (seconds)
pub const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 30;

/// Maximum size of a secret payload in bytes
/// AWS Secrets Manager rejects `SecretString` values above 64KB
pub const MAX_SECRET_SIZE_BYTES: usize = 65_536;

/// Maximum length of a secret name
pub const MAX_SECRET_NAME_LENGTH: usize = 512;

/// Default log filter when neither `RUST_LOG` nor `--log-level` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";
