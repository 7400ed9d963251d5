//! # Decision Policy
//!
//! Pure comparison of the remote state with the resolved payload.

use crate::provider::RemoteSecret;

/// What the reconciler does with one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Secret doesn't exist
    Create,
    /// Secret exists and value has changed
    Update,
    /// Secret exists but value is unchanged
    Skip,
}

impl Action {
    /// Operation label used in structured logs
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Skip => "no_change",
        }
    }
}

/// Decide the action for a secret
///
/// Values are compared byte for byte. A secret that only holds binary data
/// never matches a string payload, so it is updated.
pub fn decide(remote: &RemoteSecret, desired: &str) -> Action {
    match remote {
        RemoteSecret::Absent => Action::Create,
        RemoteSecret::Present { value: Some(current) } if current == desired => Action::Skip,
        RemoteSecret::Present { .. } => Action::Update,
    }
}
