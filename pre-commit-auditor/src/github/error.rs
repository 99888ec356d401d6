//! GitHub client error types.

use thiserror::Error;

/// HTTP status GitHub uses for a missing file.
pub(crate) const NOT_FOUND: u16 = 404;

/// HTTP status for a token lacking permission on the repository.
pub(crate) const FORBIDDEN: u16 = 403;

/// HTTP status GitHub uses when issues are disabled for a repository.
pub(crate) const GONE: u16 = 410;

/// Errors returned by a [`GitHubClient`](super::GitHubClient).
#[derive(Debug, Error)]
pub enum GitHubError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The token may not touch the repository's issues, or issues are disabled.
    #[error("Access denied (HTTP {status}): {message}")]
    AccessDenied { status: u16, message: String },

    /// The API answered with something the auditor cannot use.
    #[error("Unexpected GitHub response: {0}")]
    Unexpected(String),
}

impl GitHubError {
    /// Returns why the repository should be skipped rather than failed, if
    /// this error means the auditor has no business writing there.
    #[must_use]
    pub fn skip_reason(&self) -> Option<&'static str> {
        match self {
            Self::AccessDenied { status, .. } => access_denied_reason(*status),
            _ => None,
        }
    }
}

/// Maps an HTTP status to a skip reason for statuses that deny issue access.
#[must_use]
pub(crate) fn access_denied_reason(status: u16) -> Option<&'static str> {
    match status {
        GONE => Some("issues disabled"),
        FORBIDDEN => Some("no write access"),
        _ => None,
    }
}
