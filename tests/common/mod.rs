//! Common test utilities for reconciler tests
//!
//! Provides an in-memory `SecretStore` that records every call and can be
//! told to fail specific operations.

#![allow(dead_code, reason = "Not every test binary uses every helper")]

use async_trait::async_trait;
use secret_sync::{DeclaredSecret, ProviderError, RemoteSecret, SecretStore, SecretTag};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

/// A call made against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch {
        name: String,
    },
    Create {
        name: String,
        value: String,
        tags: Vec<SecretTag>,
        kms_key_id: Option<String>,
    },
    Update {
        name: String,
        value: String,
        kms_key_id: Option<String>,
    },
}

impl Call {
    pub fn name(&self) -> &str {
        match self {
            Call::Fetch { name } | Call::Create { name, .. } | Call::Update { name, .. } => name,
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(self, Call::Fetch { .. })
    }
}

/// In-memory secret store recording every call
#[derive(Debug, Default)]
pub struct RecordingStore {
    secrets: Mutex<HashMap<String, Option<String>>>,
    calls: Mutex<Vec<Call>>,
    fail_fetch: HashSet<String>,
    fail_create: HashSet<String>,
    fail_update: HashSet<String>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing secret with a string value
    pub fn with_secret(self, name: &str, value: &str) -> Self {
        self.secrets
            .lock()
            .unwrap()
            .insert(name.to_string(), Some(value.to_string()));
        self
    }

    /// Seed an existing secret that only holds binary data
    pub fn with_binary_secret(self, name: &str) -> Self {
        self.secrets.lock().unwrap().insert(name.to_string(), None);
        self
    }

    pub fn failing_fetch(mut self, name: &str) -> Self {
        self.fail_fetch.insert(name.to_string());
        self
    }

    pub fn failing_create(mut self, name: &str) -> Self {
        self.fail_create.insert(name.to_string());
        self
    }

    pub fn failing_update(mut self, name: &str) -> Self {
        self.fail_update.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls made for one secret
    pub fn calls_for(&self, name: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.name() == name)
            .collect()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(Call::is_mutation)
            .collect()
    }

    /// Current stored string value
    pub fn value(&self, name: &str) -> Option<String> {
        self.secrets.lock().unwrap().get(name).cloned().flatten()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SecretStore for RecordingStore {
    async fn fetch_current(&self, secret_name: &str) -> Result<RemoteSecret, ProviderError> {
        self.record(Call::Fetch {
            name: secret_name.to_string(),
        });

        if self.fail_fetch.contains(secret_name) {
            return Err(ProviderError::Describe {
                name: secret_name.to_string(),
                message: "AccessDeniedException: not authorized".to_string(),
            });
        }

        Ok(match self.secrets.lock().unwrap().get(secret_name) {
            None => RemoteSecret::Absent,
            Some(value) => RemoteSecret::Present {
                value: value.clone(),
            },
        })
    }

    async fn create_secret(
        &self,
        secret_name: &str,
        secret_value: &str,
        tags: &[SecretTag],
        kms_key_id: Option<&str>,
    ) -> Result<(), ProviderError> {
        self.record(Call::Create {
            name: secret_name.to_string(),
            value: secret_value.to_string(),
            tags: tags.to_vec(),
            kms_key_id: kms_key_id.map(ToString::to_string),
        });

        if self.fail_create.contains(secret_name) {
            return Err(ProviderError::Create {
                name: secret_name.to_string(),
                message: "LimitExceededException".to_string(),
            });
        }

        self.secrets
            .lock()
            .unwrap()
            .insert(secret_name.to_string(), Some(secret_value.to_string()));
        Ok(())
    }

    async fn update_secret(
        &self,
        secret_name: &str,
        secret_value: &str,
        kms_key_id: Option<&str>,
    ) -> Result<(), ProviderError> {
        self.record(Call::Update {
            name: secret_name.to_string(),
            value: secret_value.to_string(),
            kms_key_id: kms_key_id.map(ToString::to_string),
        });

        if self.fail_update.contains(secret_name) {
            return Err(ProviderError::Update {
                name: secret_name.to_string(),
                message: "InvalidRequestException".to_string(),
            });
        }

        self.secrets
            .lock()
            .unwrap()
            .insert(secret_name.to_string(), Some(secret_value.to_string()));
        Ok(())
    }
}

pub fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

pub fn key_value_secret(pairs: &[(&str, &str)], tags: &[(&str, &str)]) -> DeclaredSecret {
    DeclaredSecret {
        key_value: Some(map(pairs)),
        tags: map(tags),
        ..Default::default()
    }
}

pub fn plaintext_secret(text: &str) -> DeclaredSecret {
    DeclaredSecret {
        plaintext: Some(text.to_string()),
        ..Default::default()
    }
}

pub fn tag(key: &str, value: &str) -> SecretTag {
    SecretTag {
        key: key.to_string(),
        value: value.to_string(),
    }
}
