//! # Errors
//!
//! Errors that abort a whole sync run. Per-secret failures live in
//! [`ResolveError`](crate::resolver::ResolveError) and
//! [`ProviderError`](crate::provider::ProviderError) and never abort siblings.

use crate::validation::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for a sync run
#[derive(Debug, Error)]
pub enum SyncError {
    /// The secrets document could not be read or decoded
    #[error("failed to load config {}: {reason}", path.display())]
    ConfigLoad { path: PathBuf, reason: String },
    /// The secrets document failed validation
    #[error("invalid config: {0}")]
    ConfigInvalid(#[from] ValidationError),
    /// The AWS session could not be established
    #[error("failed to establish AWS session (profile={profile}, region={region}): {reason}")]
    Session {
        profile: String,
        region: String,
        reason: String,
    },
}
