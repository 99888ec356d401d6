//! Issue reconciliation error types.

use crate::github::GitHubError;
use crate::templates::TemplateError;
use thiserror::Error;

/// Errors that can occur while reconciling a repository's tracking issue.
#[derive(Debug, Error)]
pub enum IssueError {
    /// GitHub API error.
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    /// Template rendering error.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl IssueError {
    /// Returns why the repository should be skipped instead of failed.
    #[must_use]
    pub fn skip_reason(&self) -> Option<&'static str> {
        match self {
            Self::GitHub(e) => e.skip_reason(),
            Self::Template(_) => None,
        }
    }
}
