//! # Sync Report
//!
//! Per-secret outcomes of a sync run and the lines printed for them.

use crate::provider::ProviderError;
use crate::resolver::ResolveError;

/// Terminal state of one secret
#[derive(Debug)]
pub enum SecretOutcome {
    Created,
    Updated,
    Unchanged,
    WouldCreate,
    WouldUpdate,
    ResolutionFailed(ResolveError),
    DescribeFailed(ProviderError),
    CreateFailed(ProviderError),
    UpdateFailed(ProviderError),
}

impl SecretOutcome {
    /// Whether this outcome makes the run exit non-zero
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::ResolutionFailed(_)
                | Self::DescribeFailed(_)
                | Self::CreateFailed(_)
                | Self::UpdateFailed(_)
        )
    }

    /// Short label for the outcome
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "no changes",
            Self::WouldCreate => "would create",
            Self::WouldUpdate => "would update",
            Self::ResolutionFailed(_) => "resolution failed",
            Self::DescribeFailed(_) => "describe failed",
            Self::CreateFailed(_) => "create failed",
            Self::UpdateFailed(_) => "update failed",
        }
    }
}

/// Outcome for a named secret
#[derive(Debug)]
pub struct SecretReport {
    pub name: String,
    pub outcome: SecretOutcome,
}

impl SecretReport {
    pub fn new(name: impl Into<String>, outcome: SecretOutcome) -> Self {
        Self {
            name: name.into(),
            outcome,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.outcome.is_failure()
    }

    /// Human-readable line for the status stream
    ///
    /// `None` for failures; those go to the error stream via [`Self::failure_line`].
    pub fn status_line(&self) -> Option<String> {
        let name = &self.name;
        match &self.outcome {
            SecretOutcome::Created => Some(format!("Secret {name} created successfully")),
            SecretOutcome::Updated => Some(format!("Secret {name} updated successfully")),
            SecretOutcome::Unchanged => {
                Some(format!("Secret {name} has no changes, skipping update"))
            }
            SecretOutcome::WouldCreate => Some(format!("Secret {name} would be created (dry run)")),
            SecretOutcome::WouldUpdate => Some(format!("Secret {name} would be updated (dry run)")),
            _ => None,
        }
    }

    /// Human-readable line for the error stream, `None` unless the secret failed
    pub fn failure_line(&self) -> Option<String> {
        let name = &self.name;
        match &self.outcome {
            SecretOutcome::ResolutionFailed(e) => Some(format!("Secret {name} skipped: {e}")),
            SecretOutcome::DescribeFailed(e)
            | SecretOutcome::CreateFailed(e)
            | SecretOutcome::UpdateFailed(e) => Some(format!("Secret {name} failed: {e}")),
            _ => None,
        }
    }
}

/// Outcomes of a whole run, ordered by secret name
#[derive(Debug, Default)]
pub struct SyncReport {
    secrets: Vec<SecretReport>,
    dry_run: bool,
}

impl SyncReport {
    pub fn from_reports(mut secrets: Vec<SecretReport>, dry_run: bool) -> Self {
        secrets.sort_by(|a, b| a.name.cmp(&b.name));
        Self { secrets, dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn secrets(&self) -> &[SecretReport] {
        &self.secrets
    }

    /// Report for a secret by name
    pub fn get(&self, name: &str) -> Option<&SecretReport> {
        self.secrets.iter().find(|report| report.name == name)
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.secrets.iter().filter(|report| report.is_failure()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Number of secrets whose outcome has the given label
    pub fn count(&self, label: &str) -> usize {
        self.secrets
            .iter()
            .filter(|report| report.outcome.label() == label)
            .count()
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        if self.dry_run {
            format!(
                "{} secrets (dry run): {} would be created, {} would be updated, {} unchanged, {} failed",
                self.len(),
                self.count("would create"),
                self.count("would update"),
                self.count("no changes"),
                self.failure_count()
            )
        } else {
            format!(
                "{} secrets: {} created, {} updated, {} unchanged, {} failed",
                self.len(),
                self.count("created"),
                self.count("updated"),
                self.count("no changes"),
                self.failure_count()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe_error(name: &str) -> ProviderError {
        ProviderError::Describe {
            name: name.to_string(),
            message: "AccessDeniedException".to_string(),
        }
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(
            SecretReport::new("/app/db", SecretOutcome::Created).status_line(),
            Some("Secret /app/db created successfully".to_string())
        );
        assert_eq!(
            SecretReport::new("/app/db", SecretOutcome::Updated).status_line(),
            Some("Secret /app/db updated successfully".to_string())
        );
        assert_eq!(
            SecretReport::new("/app/db", SecretOutcome::Unchanged).status_line(),
            Some("Secret /app/db has no changes, skipping update".to_string())
        );
    }

    #[test]
    fn test_failures_are_counted() {
        let report = SyncReport::from_reports(
            vec![
                SecretReport::new("b", SecretOutcome::Created),
                SecretReport::new("a", SecretOutcome::DescribeFailed(describe_error("a"))),
                SecretReport::new("c", SecretOutcome::Unchanged),
            ],
            false,
        );

        assert_eq!(report.len(), 3);
        assert_eq!(report.failure_count(), 1);
        assert!(report.has_failures());
        assert_eq!(report.secrets()[0].name, "a", "reports should be sorted by name");
        assert_eq!(
            report.summary(),
            "3 secrets: 1 created, 0 updated, 1 unchanged, 1 failed"
        );
    }

    #[test]
    fn test_dry_run_outcomes_are_not_failures() {
        let report = SyncReport::from_reports(
            vec![
                SecretReport::new("a", SecretOutcome::WouldCreate),
                SecretReport::new("b", SecretOutcome::WouldUpdate),
                SecretReport::new("c", SecretOutcome::Unchanged),
            ],
            true,
        );
        assert!(!report.has_failures());
        assert!(report.is_dry_run());
        assert_eq!(
            report.summary(),
            "3 secrets (dry run): 1 would be created, 1 would be updated, 1 unchanged, 0 failed"
        );
    }

    #[test]
    fn test_failures_go_to_failure_line_only() {
        let failed = SecretReport::new(
            "/app/x",
            SecretOutcome::CreateFailed(ProviderError::Create {
                name: "/app/x".to_string(),
                message: "boom".to_string(),
            }),
        );
        assert_eq!(failed.status_line(), None);
        assert_eq!(
            failed.failure_line(),
            Some("Secret /app/x failed: failed to create secret /app/x: boom".to_string())
        );

        let described = SecretReport::new(
            "/app/y",
            SecretOutcome::DescribeFailed(describe_error("/app/y")),
        );
        assert_eq!(described.status_line(), None);
        assert!(described.failure_line().is_some());

        let created = SecretReport::new("/app/z", SecretOutcome::Created);
        assert_eq!(created.failure_line(), None);
    }
}
