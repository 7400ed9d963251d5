//! # Configuration
//!
//! The declared-secret document and the resolved options for a sync run.

mod document;
mod options;

pub use document::{load_document, parse_document, DeclaredSecret, SecretsDocument};
pub use options::SyncOptions;
