//! Runner error types.

/// Errors that abort a run.
///
/// Per-repository failures never surface here; they are recorded in the
/// [`RunSummary`](crate::summary::RunSummary).
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    GitHub(#[from] crate::github::GitHubError),

    /// The organization's repositories could not be listed.
    #[error(transparent)]
    Discovery(#[from] crate::discovery::DiscoveryError),
}
