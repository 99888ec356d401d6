//! Values exposed to issue templates.

use crate::discovery::Repository;
use crate::validation::ComplianceResult;
use serde::Serialize;

/// Variables available to the open-issue and close-comment templates.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    /// Repository name without the owner.
    pub repository: String,
    /// Full repository name in "owner/name" format.
    pub full_name: String,
    /// Repository owner.
    pub owner: String,
    /// Path of the pre-commit configuration file.
    pub filename: String,
    /// Configured tracking issue title.
    pub title: String,
    /// One of "compliant", "missing", "invalid".
    pub compliance: String,
    /// Why the file was rejected; empty unless invalid.
    pub reason: String,
}

impl TemplateContext {
    /// Builds the context for `repository` in the given compliance state.
    pub fn new(
        repository: &Repository,
        filename: &str,
        title: &str,
        compliance: &ComplianceResult,
    ) -> Self {
        Self {
            repository: repository.name.clone(),
            full_name: repository.full_name.clone(),
            owner: repository.owner.clone(),
            filename: filename.to_string(),
            title: title.to_string(),
            compliance: compliance.as_str().to_string(),
            reason: compliance.reason().unwrap_or_default().to_string(),
        }
    }
}
