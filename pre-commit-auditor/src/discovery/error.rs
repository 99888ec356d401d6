//! Repository discovery error types.

use crate::github::GitHubError;
use thiserror::Error;

/// Errors that can occur while listing the organization's repositories.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// GitHub API error.
    #[error("Failed to list repositories for '{org}': {source}")]
    GitHubError {
        org: String,
        #[source]
        source: GitHubError,
    },
}
