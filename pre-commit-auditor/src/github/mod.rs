//! GitHub access for the auditor.
//!
//! Every remote operation the audit performs goes through [`GitHubClient`].
//! [`OctocrabClient`] talks to the real API; tests substitute an in-memory
//! implementation.

mod error;
mod fetched_file;
mod octocrab_client;

pub use error::GitHubError;
pub use fetched_file::{decode_file_content, FetchedFile};
pub use octocrab_client::OctocrabClient;

use crate::discovery::Repository;
use crate::issues::TrackingIssue;
use async_trait::async_trait;

/// The GitHub operations needed to audit an organization.
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Lists every repository of `org`.
    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>, GitHubError>;

    /// Fetches and decodes the file at `path`.
    async fn fetch_file(
        &self,
        repository: &Repository,
        path: &str,
    ) -> Result<FetchedFile, GitHubError>;

    /// Lists open and closed issues of `repository`, excluding pull requests.
    async fn list_issues(&self, repository: &Repository) -> Result<Vec<TrackingIssue>, GitHubError>;

    /// Opens a new issue.
    async fn create_issue(
        &self,
        repository: &Repository,
        title: &str,
        body: &str,
    ) -> Result<TrackingIssue, GitHubError>;

    /// Posts a comment on an existing issue.
    async fn comment_on_issue(
        &self,
        repository: &Repository,
        number: u64,
        body: &str,
    ) -> Result<(), GitHubError>;

    /// Closes an existing issue.
    async fn close_issue(&self, repository: &Repository, number: u64) -> Result<(), GitHubError>;
}
