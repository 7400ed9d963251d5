//! # Secrets Document
//!
//! The YAML document describing the desired state of every managed secret.
//!
//! ```yaml
//! secrets:
//!   /app/db:
//!     key_value:
//!       USER: app
//!       PASSWORD: hunter2
//!     tags:
//!       env: local
//!   /app/banner:
//!     plaintext: "hello"
//!     tags: {}
//!   /app/tls-cert:
//!     file: certs/tls.pem
//!     tags:
//!       team: platform
//! ```

use crate::error::SyncError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SecretsDocument {
    /// Declared secrets keyed by their name (or path) in the secret store
    #[serde(default)]
    pub secrets: BTreeMap<String, DeclaredSecret>,
}

/// One entry in the desired-state set
///
/// Exactly one source is expected to be set; see
/// [`validate_document`](crate::validation::validate_document) for the rules
/// and [`resolve_value`](crate::resolver::resolve_value) for precedence when
/// more than one is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DeclaredSecret {
    /// Key/value pairs stored as a JSON object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_value: Option<BTreeMap<String, String>>,
    /// Raw string stored verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plaintext: Option<String>,
    /// Path to a file whose contents are stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Tags attached when the secret is created
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl DeclaredSecret {
    /// `key_value` counts as set whenever present, even as an empty map
    pub fn has_key_value(&self) -> bool {
        self.key_value.is_some()
    }

    /// Non-empty plaintext, if any
    pub fn plaintext(&self) -> Option<&str> {
        self.plaintext.as_deref().filter(|text| !text.is_empty())
    }

    /// Non-empty file path, if any
    pub fn file(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Number of sources that are set
    pub fn source_count(&self) -> usize {
        usize::from(self.has_key_value())
            + usize::from(self.file().is_some())
            + usize::from(self.plaintext().is_some())
    }
}

/// Decode a secrets document from YAML text
pub fn parse_document(contents: &str, origin: &Path) -> Result<SecretsDocument, SyncError> {
    serde_yaml::from_str(contents).map_err(|e| SyncError::ConfigLoad {
        path: origin.to_path_buf(),
        reason: format!("failed to parse YAML: {e}"),
    })
}

/// Read and decode the secrets document at `path`
///
/// Both an unreadable file and malformed YAML are fatal for the run.
pub async fn load_document(path: &Path) -> Result<SecretsDocument, SyncError> {
    debug!(path = %path.display(), "Loading secrets document");
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SyncError::ConfigLoad {
            path: path.to_path_buf(),
            reason: format!("failed to read file: {e}"),
        })?;

    let document = parse_document(&contents, path)?;
    debug!(
        path = %path.display(),
        secrets = document.secrets.len(),
        "Loaded secrets document"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> SecretsDocument {
        parse_document(yaml, Path::new("test.yaml")).expect("document should parse")
    }

    #[test]
    fn test_parse_all_source_kinds() {
        let document = parse(
            r#"
secrets:
  /app/db:
    key_value:
      U: a
      P: b
    tags:
      env: local
  /app/banner:
    plaintext: hello
  /app/cert:
    file: certs/tls.pem
    tags: {}
"#,
        );

        assert_eq!(document.secrets.len(), 3);

        let db = &document.secrets["/app/db"];
        let key_value = db.key_value.as_ref().expect("key_value should be set");
        assert_eq!(key_value.get("U").map(String::as_str), Some("a"));
        assert_eq!(key_value.get("P").map(String::as_str), Some("b"));
        assert_eq!(db.tags.get("env").map(String::as_str), Some("local"));

        let banner = &document.secrets["/app/banner"];
        assert_eq!(banner.plaintext(), Some("hello"));
        assert!(banner.tags.is_empty(), "missing tags should default to empty");

        let cert = &document.secrets["/app/cert"];
        assert_eq!(cert.file(), Some(Path::new("certs/tls.pem")));
    }

    #[test]
    fn test_empty_key_value_map_counts_as_set() {
        let document = parse("secrets:\n  empty:\n    key_value: {}\n");
        let secret = &document.secrets["empty"];
        assert!(secret.has_key_value());
        assert_eq!(secret.source_count(), 1);
    }

    #[test]
    fn test_empty_plaintext_and_file_do_not_count() {
        let document = parse("secrets:\n  blank:\n    plaintext: \"\"\n    file: \"\"\n");
        let secret = &document.secrets["blank"];
        assert_eq!(secret.plaintext(), None);
        assert_eq!(secret.file(), None);
        assert_eq!(secret.source_count(), 0);
    }

    #[test]
    fn test_unknown_secret_field_is_rejected() {
        let result = parse_document(
            "secrets:\n  typo:\n    keyvalue:\n      a: b\n",
            Path::new("typo.yaml"),
        );
        match result {
            Err(SyncError::ConfigLoad { path, reason }) => {
                assert_eq!(path, Path::new("typo.yaml"));
                assert!(reason.contains("keyvalue"), "unexpected reason: {reason}");
            }
            other => panic!("Expected ConfigLoad error, got {other:?}"),
        }
    }

    #[test]
    fn test_document_without_secrets_is_empty() {
        let document = parse("{}");
        assert!(document.secrets.is_empty());
    }

    #[tokio::test]
    async fn test_load_document_missing_file_is_fatal() {
        let result = load_document(Path::new("/nonexistent/secrets.yaml")).await;
        assert!(matches!(result, Err(SyncError::ConfigLoad { .. })));
    }
}
