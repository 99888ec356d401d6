//! Processing result types.

use crate::issues::{IssueAction, IssueOutcome};
use crate::validation::ComplianceResult;
use serde::Serialize;

/// Result of processing a single repository.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ProcessingResult {
    /// The repository was audited and its tracking issue reconciled.
    Processed {
        /// Repository full name.
        repository: String,
        /// Compliance found.
        compliance: ComplianceResult,
        /// Decision taken.
        action: IssueAction,
        /// What was written.
        outcome: IssueOutcome,
    },

    /// Processing was skipped.
    Skipped {
        /// Repository full name.
        repository: String,
        /// Reason for skipping.
        reason: String,
    },

    /// Processing failed.
    Failed {
        /// Repository full name.
        repository: String,
        /// Error message.
        error: String,
    },
}

impl ProcessingResult {
    /// Returns the repository full name.
    #[must_use]
    pub fn repository(&self) -> &str {
        match self {
            Self::Processed { repository, .. }
            | Self::Skipped { repository, .. }
            | Self::Failed { repository, .. } => repository,
        }
    }

    /// Returns the decision taken, if the repository was processed.
    #[must_use]
    pub fn action(&self) -> Option<IssueAction> {
        match self {
            Self::Processed { action, .. } => Some(*action),
            _ => None,
        }
    }
}
