//! # Secret Sync
//!
//! Declaratively syncs a set of named secrets, described in a YAML document,
//! to AWS Secrets Manager. Missing secrets are created with their tags,
//! changed secrets are updated, and unchanged secrets are left alone.
//!
//! Each secret takes its value from exactly one source:
//!
//! - `key_value`: a string map stored as a JSON object with sorted keys
//! - `plaintext`: a string stored verbatim
//! - `file`: the contents of a file
//!
//! The run is one-shot: the document is validated up front (any invalid
//! secret aborts before a network call), then every secret is reconciled
//! independently and reported.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod observability;
pub mod provider;
pub mod reconciler;
pub mod resolver;
pub mod sync;
pub mod validation;

pub use config::{DeclaredSecret, SecretsDocument, SyncOptions};
pub use error::SyncError;
pub use provider::{ProviderError, RemoteSecret, SecretStore, SecretTag};
pub use reconciler::{ReconcileSettings, Reconciler, SecretOutcome, SecretReport, SyncReport};
pub use resolver::{resolve_value, ResolveError};
pub use validation::{validate_document, ValidationError};
